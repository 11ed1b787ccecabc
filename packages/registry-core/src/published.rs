//! Guest-facing view of a published registry: item progress, local
//! contributions and the RSVP form.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::error::ValidationError;
use crate::money::within_limit;
use crate::progress::{ItemProgress, ProgressReport};
use crate::types::{CatalogItem, GiftList};

#[derive(Debug, Clone, PartialEq)]
pub struct PublishedRegistry {
    list: GiftList,
}

impl PublishedRegistry {
    /// Wrap a list for guests. Drafts are not guest-accessible.
    pub fn new(list: GiftList) -> Option<Self> {
        list.is_published().then_some(Self { list })
    }

    pub fn list(&self) -> &GiftList {
        &self.list
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.list.products
    }

    pub fn item_progress(&self, product_id: &str) -> Option<ItemProgress> {
        self.list.find_product(product_id).map(|item| ItemProgress {
            product_id: item.id.clone(),
            name: item.name.clone(),
            goal: item.goal(),
            contributed: item.contributed(),
        })
    }

    pub fn overall(&self) -> ProgressReport {
        ProgressReport::from_products(&self.list)
    }

    /// Smallest amount a guest may pledge
    pub fn min_contribution(&self) -> Decimal {
        self.list.min_contribution.max(Decimal::ZERO)
    }

    /// Record a pledge locally and return the item's new contributed total.
    pub fn contribute(
        &mut self,
        product_id: &str,
        amount: Decimal,
    ) -> Result<Decimal, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidContributionAmount);
        }
        within_limit(amount)?;
        let minimum = self.min_contribution();
        if amount < minimum {
            return Err(ValidationError::BelowMinContribution(minimum));
        }

        let item = self
            .list
            .products
            .iter_mut()
            .find(|item| item.id == product_id)
            .ok_or_else(|| ValidationError::ItemNotSelected(product_id.to_string()))?;

        let total = item
            .contributed()
            .checked_add(amount)
            .ok_or(ValidationError::AmountTooLarge)?;
        item.contributed_amount = Some(total);

        info!(
            list_id = %self.list.id,
            product_id,
            amount = %amount,
            "Contribution recorded locally"
        );
        Ok(total)
    }

    /// Parse the amount box of the contribution modal.
    pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
        input
            .trim()
            .parse::<Decimal>()
            .map_err(|_| ValidationError::InvalidContributionAmount)
            .and_then(within_limit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub name: String,
    pub attending: bool,
    pub companions: u32,
    pub message: String,
}

impl Rsvp {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::RsvpNameMissing);
        }
        Ok(())
    }

    /// RSVPs are only logged; nothing is sent to the server.
    pub fn submit(&self, list_id: &str) -> Result<(), ValidationError> {
        self.validate()?;
        info!(
            list_id,
            name = %self.name.trim(),
            attending = self.attending,
            companions = self.companions,
            message = %self.message.trim(),
            "RSVP received"
        );
        Ok(())
    }
}
