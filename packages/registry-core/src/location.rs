//! Map-click location picking for the list details step

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::Location;

/// Geographic rectangle shown by the picker map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl MapBounds {
    /// Rectangle of `span` degrees centred on a point
    pub fn around(lat: f64, lng: f64, span: f64) -> Self {
        let half = span / 2.0;
        Self {
            north: (lat + half).min(90.0),
            south: (lat - half).max(-90.0),
            west: (lng - half).max(-180.0),
            east: (lng + half).min(180.0),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.north + self.south) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// OpenStreetMap embed URL for rendering these bounds, with an optional marker
    pub fn embed_url(&self, marker: Option<(f64, f64)>) -> String {
        let mut url = format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={:.5},{:.5},{:.5},{:.5}&layer=mapnik",
            self.west, self.south, self.east, self.north
        );
        if let Some((lat, lng)) = marker {
            url.push_str(&format!("&marker={:.5},{:.5}", lat, lng));
        }
        url
    }

    /// Translate a click at pixel offset (`x`, `y`) on a `width`×`height`
    /// map into latitude/longitude. Linear interpolation is accurate enough
    /// at city zoom levels.
    pub fn point_at(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(f64, f64), ValidationError> {
        if width <= 0.0 || height <= 0.0 || !(0.0..=width).contains(&x) || !(0.0..=height).contains(&y)
        {
            return Err(ValidationError::LocationOutOfBounds);
        }
        let lat = self.north - (y / height) * (self.north - self.south);
        let lng = self.west + (x / width) * (self.east - self.west);
        Ok((lat, lng))
    }
}

impl Default for MapBounds {
    /// Bogotá city centre
    fn default() -> Self {
        Self::around(4.711, -74.0721, 0.2)
    }
}

impl Location {
    pub fn has_point(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }

    pub fn set_point(&mut self, (lat, lng): (f64, f64)) {
        self.lat = Some(lat);
        self.lng = Some(lng);
    }

    pub fn is_empty(&self) -> bool {
        self.address.trim().is_empty() && !self.has_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> MapBounds {
        MapBounds {
            north: 10.0,
            south: 0.0,
            west: -20.0,
            east: -10.0,
        }
    }

    #[test]
    fn corners_map_to_bounds() {
        let b = bounds();
        assert_eq!(b.point_at(0.0, 0.0, 400.0, 200.0).unwrap(), (10.0, -20.0));
        assert_eq!(b.point_at(400.0, 200.0, 400.0, 200.0).unwrap(), (0.0, -10.0));
        assert_eq!(b.point_at(200.0, 100.0, 400.0, 200.0).unwrap(), (5.0, -15.0));
    }

    #[test]
    fn clicks_outside_map_rejected() {
        let b = bounds();
        assert_eq!(
            b.point_at(-1.0, 10.0, 400.0, 200.0),
            Err(ValidationError::LocationOutOfBounds)
        );
        assert_eq!(
            b.point_at(10.0, 10.0, 0.0, 200.0),
            Err(ValidationError::LocationOutOfBounds)
        );
    }

    #[test]
    fn embed_url_includes_marker() {
        let url = bounds().embed_url(Some((5.0, -15.0)));
        assert!(url.contains("bbox=-20.00000,0.00000,-10.00000,10.00000"));
        assert!(url.ends_with("&marker=5.00000,-15.00000"));
    }

    #[test]
    fn location_point_tracking() {
        let mut location = Location::default();
        assert!(location.is_empty());

        location.set_point((1.0, 2.0));
        assert!(location.has_point());
        assert!(!location.is_empty());
    }
}
