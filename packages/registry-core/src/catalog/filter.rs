use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::within_limit;

/// Query string for `GET /api/Products/paginated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Categories, vendors and price range chosen in the advanced filter panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFilter {
    pub categories: Vec<String>,
    pub suppliers: Vec<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl AdvancedFilter {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.suppliers.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(ValidationError::PriceRangeInverted);
            }
        }
        if self.min_price.is_some_and(|p| p < Decimal::ZERO)
            || self.max_price.is_some_and(|p| p < Decimal::ZERO)
        {
            return Err(ValidationError::PriceRangeInverted);
        }
        Ok(())
    }

    pub fn toggle_category(&mut self, id: &str) {
        toggle(&mut self.categories, id);
    }

    pub fn toggle_supplier(&mut self, id: &str) {
        toggle(&mut self.suppliers, id);
    }

    /// Parse a price box; blank clears the bound.
    pub fn parse_price(input: &str) -> Result<Option<Decimal>, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<Decimal>()
            .map_err(|_| ValidationError::InvalidPrice)
            .and_then(within_limit)
            .map(Some)
    }
}

fn toggle(values: &mut Vec<String>, id: &str) {
    if let Some(pos) = values.iter().position(|v| v == id) {
        values.remove(pos);
    } else {
        values.push(id.to_string());
    }
}

/// Body for `POST /api/products/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearch {
    #[serde(flatten)]
    pub filter: AdvancedFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inverted_price_range_rejected() {
        let filter = AdvancedFilter {
            min_price: Some(Decimal::from(100)),
            max_price: Some(Decimal::from(50)),
            ..Default::default()
        };

        assert_eq!(filter.validate(), Err(ValidationError::PriceRangeInverted));
    }

    #[test]
    fn toggling_adds_then_removes() {
        let mut filter = AdvancedFilter::default();

        filter.toggle_category("kitchen");
        filter.toggle_supplier("acme");
        assert!(!filter.is_empty());

        filter.toggle_category("kitchen");
        filter.toggle_supplier("acme");
        assert!(filter.is_empty());
    }

    #[test]
    fn blank_price_clears_bound() {
        assert_eq!(AdvancedFilter::parse_price("  "), Ok(None));
        assert_eq!(
            AdvancedFilter::parse_price("19.99"),
            Ok(Some(Decimal::new(1999, 2)))
        );
        assert!(AdvancedFilter::parse_price("abc").is_err());
    }

    #[test]
    fn search_body_is_flat_camel_case() {
        let search = ProductSearch {
            filter: AdvancedFilter {
                categories: vec!["kitchen".into()],
                suppliers: vec![],
                min_price: Some(Decimal::from(10)),
                max_price: None,
            },
            search_term: None,
            page: 1,
            page_size: 12,
        };

        let body = serde_json::to_value(&search).unwrap();
        assert_eq!(body["categories"], json!(["kitchen"]));
        assert_eq!(body["minPrice"], json!(10.0));
        assert_eq!(body["maxPrice"], json!(null));
        assert_eq!(body["pageSize"], json!(12));
        assert!(body.get("searchTerm").is_none());
    }

    #[test]
    fn price_bounds_are_limited() {
        assert_eq!(
            AdvancedFilter::parse_price("2000000000"),
            Err(ValidationError::AmountTooLarge)
        );
        assert_eq!(AdvancedFilter::parse_price(" "), Ok(None));
    }
}
