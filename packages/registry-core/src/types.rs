//! Type definitions for registry API requests and responses
//!
//! Field names follow the API's camelCase JSON.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common Types
// ============================================================================

/// One page of a paginated endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    /// Empty page used as the fallback when a fetch fails
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 0,
            total_items: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Catalog Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub supplier: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributed_amount: Option<Decimal>,
}

impl CatalogItem {
    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    pub fn contributed(&self) -> Decimal {
        self.contributed_amount.unwrap_or(Decimal::ZERO)
    }

    /// Price times quantity, pinned at `Decimal::MAX`
    pub fn goal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity()))
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

// ============================================================================
// Gift List Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Wedding,
    Birthday,
    BabyShower,
    Other,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Wedding => "Wedding",
            EventKind::Birthday => "Birthday",
            EventKind::BabyShower => "Baby Shower",
            EventKind::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Wedding => "\u{1F48D}",    // 💍
            EventKind::Birthday => "\u{1F382}",   // 🎂
            EventKind::BabyShower => "\u{1F37C}", // 🍼
            EventKind::Other => "\u{1F381}",      // 🎁
        }
    }

    pub fn variants() -> &'static [EventKind] {
        &[
            EventKind::Wedding,
            EventKind::Birthday,
            EventKind::BabyShower,
            EventKind::Other,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    #[default]
    Draft,
    Publish,
}

impl ListStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListStatus::Draft => "Draft",
            ListStatus::Publish => "Published",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftList {
    pub id: String,
    pub name: String,
    pub event_type: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_event_type: Option<String>,
    #[serde(default)]
    pub status: ListStatus,
    pub guest_count: u32,
    #[serde(default)]
    pub min_contribution: Decimal,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub campaign_start: Option<NaiveDate>,
    #[serde(default)]
    pub campaign_end: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub products: Vec<CatalogItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

impl GiftList {
    pub fn is_published(&self) -> bool {
        self.status == ListStatus::Publish
    }

    /// Human-readable event type, using the custom text for `Other`
    pub fn event_label(&self) -> String {
        match (&self.event_type, &self.custom_event_type) {
            (EventKind::Other, Some(custom)) if !custom.trim().is_empty() => {
                custom.trim().to_string()
            }
            (kind, _) => kind.label().to_string(),
        }
    }

    pub fn find_product(&self, product_id: &str) -> Option<&CatalogItem> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

/// Create/update body for `POST /api/list` and `PUT /api/list/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftListPayload {
    pub name: String,
    pub event_type: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_event_type: Option<String>,
    pub status: ListStatus,
    pub guest_count: u32,
    pub min_contribution: Decimal,
    pub event_date: Option<NaiveDate>,
    pub campaign_start: Option<NaiveDate>,
    pub campaign_end: Option<NaiveDate>,
    pub location: Option<Location>,
    pub products: Vec<CatalogItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

// ============================================================================
// Contribution / Notification Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub product_id: String,
    pub contributor_name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}
