//! Contribution progress: per-item and overall funding figures

use std::collections::{HashMap, HashSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::api::RegistryClient;
use crate::error::Result;
use crate::money::saturating_sum;
use crate::types::{Contribution, GiftList};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `contributed / goal` as a percentage clamped to 0–100, two decimals.
///
/// A zero goal counts as fully funded once anything was contributed.
pub fn progress_percent(contributed: Decimal, goal: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return if contributed > Decimal::ZERO {
            HUNDRED
        } else {
            Decimal::ZERO
        };
    }
    // Only a ratio far above 100 % can overflow.
    contributed
        .checked_div(goal)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(HUNDRED)
        .clamp(Decimal::ZERO, HUNDRED)
        .round_dp(2)
}

/// Whole-number percentage for progress bar widths
pub fn percent_u8(percent: Decimal) -> u8 {
    percent
        .round()
        .clamp(Decimal::ZERO, HUNDRED)
        .to_u8()
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemProgress {
    pub product_id: String,
    pub name: String,
    pub goal: Decimal,
    pub contributed: Decimal,
}

impl ItemProgress {
    pub fn percent(&self) -> Decimal {
        progress_percent(self.contributed, self.goal)
    }

    pub fn percent_rounded(&self) -> u8 {
        percent_u8(self.percent())
    }

    pub fn remaining(&self) -> Decimal {
        self.goal.saturating_sub(self.contributed).max(Decimal::ZERO)
    }

    pub fn is_funded(&self) -> bool {
        self.contributed >= self.goal
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressReport {
    pub items: Vec<ItemProgress>,
    pub total_goal: Decimal,
    pub total_contributed: Decimal,
    pub contributor_count: usize,
    /// Newest first
    pub contributions: Vec<Contribution>,
}

impl ProgressReport {
    /// Only published lists have a report.
    pub fn is_eligible(list: &GiftList) -> bool {
        list.is_published()
    }

    /// Figures from the amounts already recorded on the list's products
    pub fn from_products(list: &GiftList) -> Self {
        let items: Vec<ItemProgress> = list
            .products
            .iter()
            .map(|product| ItemProgress {
                product_id: product.id.clone(),
                name: product.name.clone(),
                goal: product.goal(),
                contributed: product.contributed(),
            })
            .collect();
        Self::from_items(items, Vec::new())
    }

    /// Aggregate contribution records against the list's products.
    ///
    /// Contributions for products no longer on the list are skipped.
    pub fn build(list: &GiftList, contributions: Vec<Contribution>) -> Self {
        let mut per_product: HashMap<&str, Decimal> = HashMap::new();
        for contribution in &contributions {
            if list.find_product(&contribution.product_id).is_some() {
                let sum = per_product
                    .entry(contribution.product_id.as_str())
                    .or_insert(Decimal::ZERO);
                *sum = sum.saturating_add(contribution.amount);
            } else {
                debug!(
                    product_id = %contribution.product_id,
                    "Skipping contribution for product not on list"
                );
            }
        }

        let items: Vec<ItemProgress> = list
            .products
            .iter()
            .map(|product| ItemProgress {
                product_id: product.id.clone(),
                name: product.name.clone(),
                goal: product.goal(),
                contributed: per_product
                    .get(product.id.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO),
            })
            .collect();

        let mut contributions: Vec<Contribution> = contributions
            .into_iter()
            .filter(|c| list.find_product(&c.product_id).is_some())
            .collect();
        contributions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Self::from_items(items, contributions)
    }

    /// Fetch a list and its contributions and aggregate them.
    pub async fn load(client: &RegistryClient, list_id: &str) -> Result<(GiftList, Self)> {
        let list = client.list(list_id).await?;
        let contributions = client.contributions(list_id).await?;
        let report = Self::build(&list, contributions);
        Ok((list, report))
    }

    fn from_items(items: Vec<ItemProgress>, contributions: Vec<Contribution>) -> Self {
        let total_goal = saturating_sum(items.iter().map(|i| i.goal));
        let total_contributed = saturating_sum(items.iter().map(|i| i.contributed));
        let contributor_count = contributions
            .iter()
            .map(|c| c.contributor_name.trim().to_lowercase())
            .collect::<HashSet<_>>()
            .len();

        Self {
            items,
            total_goal,
            total_contributed,
            contributor_count,
            contributions,
        }
    }

    pub fn percent(&self) -> Decimal {
        progress_percent(self.total_contributed, self.total_goal)
    }

    pub fn percent_rounded(&self) -> u8 {
        percent_u8(self.percent())
    }

    pub fn remaining(&self) -> Decimal {
        self.total_goal
            .saturating_sub(self.total_contributed)
            .max(Decimal::ZERO)
    }

    pub fn funded_items(&self) -> usize {
        self.items.iter().filter(|i| i.is_funded()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogItem, EventKind, ListStatus};
    use chrono::{TimeZone, Utc};

    fn product(id: &str, price: i64, quantity: u32) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: format!("Gift {id}"),
            price: Decimal::from(price),
            category: "Home".into(),
            supplier: "Acme".into(),
            image_urls: vec![],
            quantity: Some(quantity),
            contributed_amount: None,
        }
    }

    fn contribution(id: &str, product: &str, who: &str, amount: i64, day: u32) -> Contribution {
        Contribution {
            id: id.into(),
            product_id: product.into(),
            contributor_name: who.into(),
            amount: Decimal::from(amount),
            message: None,
            created_at: Utc.with_ymd_and_hms(2026, 10, day, 12, 0, 0).unwrap(),
        }
    }

    fn list() -> GiftList {
        GiftList {
            id: "1".into(),
            name: "Wedding".into(),
            event_type: EventKind::Wedding,
            custom_event_type: None,
            status: ListStatus::Publish,
            guest_count: 50,
            min_contribution: Decimal::from(10),
            event_date: None,
            campaign_start: None,
            campaign_end: None,
            location: None,
            products: vec![product("a", 100, 1), product("b", 50, 2)],
            contact_email: None,
            contact_phone: None,
        }
    }

    #[test]
    fn percent_clamps_and_handles_zero_goal() {
        assert_eq!(
            progress_percent(Decimal::from(150), Decimal::from(100)),
            Decimal::from(100)
        );
        assert_eq!(
            progress_percent(Decimal::from(1), Decimal::from(3)),
            Decimal::new(3333, 2)
        );
        assert_eq!(progress_percent(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(progress_percent(Decimal::ONE, Decimal::ZERO), Decimal::from(100));
        assert_eq!(percent_u8(Decimal::new(6667, 2)), 67);
    }

    #[test]
    fn aggregates_per_item_and_overall() {
        let report = ProgressReport::build(
            &list(),
            vec![
                contribution("c1", "a", "Ana", 40, 1),
                contribution("c2", "a", "Luis", 60, 3),
                contribution("c3", "b", "ana ", 25, 2),
                contribution("c4", "gone", "Eve", 500, 4),
            ],
        );

        assert_eq!(report.items[0].contributed, Decimal::from(100));
        assert!(report.items[0].is_funded());
        assert_eq!(report.items[1].goal, Decimal::from(100));
        assert_eq!(report.items[1].percent_rounded(), 25);
        assert_eq!(report.total_goal, Decimal::from(200));
        assert_eq!(report.total_contributed, Decimal::from(125));
        assert_eq!(report.remaining(), Decimal::from(75));
        assert_eq!(report.percent(), Decimal::new(6250, 2));
        assert_eq!(report.contributor_count, 2);
        assert_eq!(report.funded_items(), 1);

        let order: Vec<_> = report.contributions.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, vec!["c2", "c3", "c1"]);
    }

    #[test]
    fn from_products_uses_recorded_amounts() {
        let mut list = list();
        list.products[0].contributed_amount = Some(Decimal::from(50));

        let report = ProgressReport::from_products(&list);
        assert_eq!(report.total_contributed, Decimal::from(50));
        assert_eq!(report.percent_rounded(), 25);
    }

    #[test]
    fn only_published_lists_are_eligible() {
        let mut list = list();
        assert!(ProgressReport::is_eligible(&list));
        list.status = ListStatus::Draft;
        assert!(!ProgressReport::is_eligible(&list));
    }

    #[test]
    fn percent_clamps_when_ratio_overflows() {
        assert_eq!(
            progress_percent(Decimal::MAX, Decimal::new(1, 28)),
            Decimal::ONE_HUNDRED
        );

        let item = ItemProgress {
            product_id: "a".into(),
            name: "Gift a".into(),
            goal: Decimal::MAX,
            contributed: Decimal::MIN,
        };
        assert_eq!(item.remaining(), Decimal::MAX);
    }
}
