use tracing::{debug, warn};

use super::filter::{AdvancedFilter, CatalogQuery, ProductSearch};
use crate::api::RegistryClient;
use crate::error::{Result, ValidationError};
use crate::selection::Selection;
use crate::types::{CatalogItem, Page};

/// The request the catalog panel should issue for its current state
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRequest {
    Page(CatalogQuery),
    Search(ProductSearch),
}

impl CatalogRequest {
    pub async fn send(&self, client: &RegistryClient) -> Result<Page<CatalogItem>> {
        match self {
            CatalogRequest::Page(query) => client.products_page(query).await,
            CatalogRequest::Search(search) => client.search_products(search).await,
        }
    }
}

/// Paging, search term and filter state behind the gift catalog panel.
///
/// Plain pagination is used until an advanced filter is applied; from then on
/// every fetch goes through the search endpoint with the term folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogBrowser {
    page_size: u32,
    page: u32,
    term: String,
    filter: Option<AdvancedFilter>,
    results: Page<CatalogItem>,
    error: Option<String>,
    latest_fetch: FetchTicket,
}

/// Identifies one issued catalog fetch. Only the latest may be applied.
pub type FetchTicket = u64;

impl CatalogBrowser {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
            term: String::new(),
            filter: None,
            results: Page::empty(),
            error: None,
            latest_fetch: 0,
        }
    }

    /// Request for the current state, tagged so older responses can be
    /// told apart from it.
    pub fn begin_fetch(&mut self) -> (FetchTicket, CatalogRequest) {
        self.latest_fetch = self.latest_fetch.wrapping_add(1);
        (self.latest_fetch, self.request())
    }

    /// Apply the outcome of the fetch `ticket`. Responses overtaken by a
    /// newer fetch are dropped and false is returned.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Page<CatalogItem>>) -> bool {
        if ticket != self.latest_fetch {
            debug!(ticket, latest = self.latest_fetch, "Dropping stale catalog response");
            return false;
        }
        self.apply_result(result);
        true
    }

    pub fn request(&self) -> CatalogRequest {
        let term = self.trimmed_term();
        match &self.filter {
            Some(filter) => CatalogRequest::Search(ProductSearch {
                filter: filter.clone(),
                search_term: term,
                page: self.page,
                page_size: self.page_size,
            }),
            None => CatalogRequest::Page(CatalogQuery {
                page: self.page,
                page_size: self.page_size,
                search: term,
            }),
        }
    }

    /// Returns true when the term changed and a refetch is needed.
    pub fn set_term(&mut self, term: &str) -> bool {
        if self.term.trim() == term.trim() {
            self.term = term.to_string();
            return false;
        }
        self.term = term.to_string();
        self.page = 1;
        true
    }

    /// Apply the advanced filter. An empty filter returns to plain pagination.
    pub fn apply_filter(&mut self, filter: AdvancedFilter) -> std::result::Result<(), ValidationError> {
        filter.validate()?;
        self.filter = if filter.is_empty() { None } else { Some(filter) };
        self.page = 1;
        Ok(())
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.page = 1;
    }

    pub fn next_page(&mut self) -> bool {
        if self.results.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Store a fetch outcome. Failures leave an empty page and a message.
    pub fn apply_result(&mut self, result: Result<Page<CatalogItem>>) {
        match result {
            Ok(page) => {
                self.page = page.current_page.max(1);
                self.results = page;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed, showing empty catalog");
                self.results = Page::empty();
                self.error = Some(e.to_string());
            }
        }
    }

    /// Catalog items not already in the selection.
    pub fn visible_items(&self, selection: &Selection) -> Vec<CatalogItem> {
        self.results
            .items
            .iter()
            .filter(|item| !selection.contains(&item.id))
            .cloned()
            .collect()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.results.total_pages
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn filter(&self) -> Option<&AdvancedFilter> {
        self.filter.as_ref()
    }

    pub fn results(&self) -> &Page<CatalogItem> {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn trimmed_term(&self) -> Option<String> {
        let term = self.term.trim();
        (!term.is_empty()).then(|| term.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use rust_decimal::Decimal;

    fn item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: format!("Item {id}"),
            price: Decimal::from(10),
            category: "Home".into(),
            supplier: "Acme".into(),
            image_urls: vec![],
            quantity: None,
            contributed_amount: None,
        }
    }

    fn page(ids: &[&str], current: u32, total: u32) -> Page<CatalogItem> {
        Page {
            items: ids.iter().map(|id| item(id)).collect(),
            current_page: current,
            total_pages: total,
            total_items: ids.len() as u64,
        }
    }

    #[test]
    fn new_term_resets_to_first_page() {
        let mut browser = CatalogBrowser::new(12);
        browser.apply_result(Ok(page(&["a"], 1, 3)));
        assert!(browser.next_page());
        assert_eq!(browser.page(), 2);

        assert!(browser.set_term("  lamp "));
        assert_eq!(browser.page(), 1);
        assert_eq!(
            browser.request(),
            CatalogRequest::Page(CatalogQuery {
                page: 1,
                page_size: 12,
                search: Some("lamp".into()),
            })
        );

        assert!(!browser.set_term("lamp"));
    }

    #[test]
    fn filter_switches_to_search_endpoint() {
        let mut browser = CatalogBrowser::new(12);
        browser.set_term("mug");

        let mut filter = AdvancedFilter::default();
        filter.toggle_supplier("acme");
        browser.apply_filter(filter.clone()).unwrap();

        match browser.request() {
            CatalogRequest::Search(search) => {
                assert_eq!(search.filter, filter);
                assert_eq!(search.search_term.as_deref(), Some("mug"));
            }
            other => panic!("expected search request, got {other:?}"),
        }

        browser.apply_filter(AdvancedFilter::default()).unwrap();
        assert!(matches!(browser.request(), CatalogRequest::Page(_)));
    }

    #[test]
    fn failed_fetch_falls_back_to_empty_page() {
        let mut browser = CatalogBrowser::new(12);
        browser.apply_result(Ok(page(&["a", "b"], 1, 1)));

        browser.apply_result(Err(ClientError::Network("offline".into())));

        assert!(browser.results().items.is_empty());
        assert!(browser.error().is_some());
        assert!(!browser.next_page());
    }

    #[test]
    fn selected_items_hidden_from_catalog() {
        let mut browser = CatalogBrowser::new(12);
        browser.apply_result(Ok(page(&["a", "b", "c"], 1, 1)));

        let mut selection = Selection::default();
        selection.add(item("b"));

        let visible: Vec<_> = browser
            .visible_items(&selection)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(visible, vec!["a", "c"]);
    }

    #[test]
    fn previous_page_stops_at_one() {
        let mut browser = CatalogBrowser::new(12);
        assert!(!browser.previous_page());
        assert_eq!(browser.page(), 1);
    }

    #[test]
    fn slow_older_response_does_not_overwrite_newer_search() {
        let mut browser = CatalogBrowser::new(12);
        browser.apply_result(Ok(page(&["a"], 1, 3)));
        browser.next_page();
        let (page_two, _) = browser.begin_fetch();

        browser.set_term("lamp");
        let (search, request) = browser.begin_fetch();
        assert!(matches!(request, CatalogRequest::Page(q) if q.page == 1));

        assert!(browser.apply_fetch(search, Ok(page(&["lamp"], 1, 1))));
        assert!(!browser.apply_fetch(page_two, Ok(page(&["b", "c"], 2, 3))));

        assert_eq!(browser.page(), 1);
        let ids: Vec<_> = browser.results().items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["lamp"]);
    }
}
