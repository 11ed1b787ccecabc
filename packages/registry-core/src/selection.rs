//! Selection cart: the gifts chosen for a list

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::{saturating_sum, within_limit};
use crate::types::CatalogItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    items: Vec<CatalogItem>,
}

impl Selection {
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        let mut selection = Self::default();
        for item in items {
            selection.add(item);
        }
        selection
    }

    /// Append an item. Returns false if it was already selected.
    pub fn add(&mut self, mut item: CatalogItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        if item.quantity.map_or(true, |q| q == 0) {
            item.quantity = Some(1);
        }
        self.items.push(item);
        true
    }

    /// Remove an item, handing it back so the catalog can show it again.
    pub fn remove(&mut self, id: &str) -> Option<CatalogItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn set_quantity(&mut self, id: &str, quantity: u32) -> Result<(), ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity);
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ValidationError::ItemNotSelected(id.to_string()))?;
        item.price
            .checked_mul(Decimal::from(quantity))
            .ok_or(ValidationError::AmountTooLarge)
            .and_then(within_limit)?;
        item.quantity = Some(quantity);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CatalogItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price × quantity over the selection
    pub fn total(&self) -> Decimal {
        saturating_sum(self.items.iter().map(CatalogItem::goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: id.into(),
            price: Decimal::from(price),
            category: "Home".into(),
            supplier: "Acme".into(),
            image_urls: vec![],
            quantity: None,
            contributed_amount: None,
        }
    }

    #[test]
    fn adding_twice_does_not_duplicate() {
        let mut selection = Selection::default();

        assert!(selection.add(item("a", 10)));
        assert!(!selection.add(item("a", 10)));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.items()[0].quantity, Some(1));
    }

    #[test]
    fn remove_returns_the_item() {
        let mut selection = Selection::from_items(vec![item("a", 10), item("b", 5)]);

        let removed = selection.remove("a").unwrap();
        assert_eq!(removed.id, "a");
        assert!(!selection.contains("a"));
        assert!(selection.remove("a").is_none());
    }

    #[test]
    fn quantity_must_be_positive() {
        let mut selection = Selection::from_items(vec![item("a", 10)]);

        assert_eq!(
            selection.set_quantity("a", 0),
            Err(ValidationError::InvalidQuantity)
        );
        assert_eq!(
            selection.set_quantity("zzz", 2),
            Err(ValidationError::ItemNotSelected("zzz".into()))
        );

        selection.set_quantity("a", 3).unwrap();
        assert_eq!(selection.total(), Decimal::from(30));
    }

    #[test]
    fn quantity_cannot_push_goal_past_limit() {
        let mut selection = Selection::from_items(vec![item("a", 200)]);

        assert_eq!(
            selection.set_quantity("a", u32::MAX),
            Err(ValidationError::AmountTooLarge)
        );
        assert_eq!(selection.items()[0].quantity, Some(1));
    }

    #[test]
    fn total_saturates_for_server_prices() {
        let mut huge = item("a", 0);
        huge.price = Decimal::MAX;
        huge.quantity = Some(3);
        let selection = Selection::from_items(vec![huge, item("b", 10)]);

        assert_eq!(selection.total(), Decimal::MAX);
    }
}
