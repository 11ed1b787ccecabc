//! Dashboard view model: the user's registries and their row actions

use qrcode::render::svg;
use qrcode::QrCode;
use tracing::warn;

use crate::api::RegistryClient;
use crate::error::Result;
use crate::progress::ProgressReport;
use crate::types::GiftList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardLayout {
    #[default]
    List,
    Grid,
}

impl DashboardLayout {
    pub fn toggled(self) -> Self {
        match self {
            DashboardLayout::List => DashboardLayout::Grid,
            DashboardLayout::Grid => DashboardLayout::List,
        }
    }
}

/// Which actions a dashboard row offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub delete: bool,
    pub qr: bool,
    pub progress: bool,
}

impl RowActions {
    pub fn for_list(list: &GiftList) -> Self {
        let published = list.is_published();
        Self {
            edit: true,
            delete: true,
            qr: published,
            progress: published,
        }
    }
}

/// Registries shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    lists: Vec<GiftList>,
}

impl Dashboard {
    pub fn new(lists: Vec<GiftList>) -> Self {
        Self { lists }
    }

    /// Load the user's registries.
    pub async fn load(client: &RegistryClient) -> Result<Self> {
        client.lists().await.map(Self::new)
    }

    pub fn lists(&self) -> &[GiftList] {
        &self.lists
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&GiftList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Delete on the server, then drop the row locally.
    pub async fn delete(&mut self, client: &RegistryClient, id: &str) -> Result<()> {
        client.delete_list(id).await?;
        self.remove(id);
        Ok(())
    }

    /// Drop a row locally. Returns the removed list.
    pub fn remove(&mut self, id: &str) -> Option<GiftList> {
        let pos = self.lists.iter().position(|list| list.id == id)?;
        Some(self.lists.remove(pos))
    }

    pub fn published_count(&self) -> usize {
        self.lists.iter().filter(|list| list.is_published()).count()
    }

    /// Overall funding percentage for a row, from the products' recorded
    /// contributions
    pub fn funded_percent(list: &GiftList) -> u8 {
        ProgressReport::from_products(list).percent_rounded()
    }
}

/// Public URL guests open for a registry
pub fn share_url(share_base_url: &str, list_id: &str) -> String {
    format!(
        "{}/{}",
        share_base_url.trim_end_matches('/'),
        urlencoding::encode(list_id)
    )
}

/// SVG QR code encoding the registry's share URL.
pub fn share_qr_svg(share_base_url: &str, list_id: &str) -> Option<String> {
    let url = share_url(share_base_url, list_id);
    match QrCode::new(url.as_bytes()) {
        Ok(code) => Some(
            code.render::<svg::Color>()
                .min_dimensions(200, 200)
                .quiet_zone(true)
                .build(),
        ),
        Err(e) => {
            warn!(error = %e, list_id, "Could not encode share QR code");
            None
        }
    }
}
