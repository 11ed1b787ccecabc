//! Registry API paths
//!
//! Casing matches the server's routes exactly (`Products` is capitalised on
//! the paginated route only).

// ============================================================================
// AUTH
// ============================================================================

pub const LOGIN: &str = "/api/auth/login";

// ============================================================================
// LISTS
// ============================================================================

pub const LISTS: &str = "/api/list";

pub fn list(id: &str) -> String {
    format!("{}/{}", LISTS, urlencoding::encode(id))
}

pub fn list_contributions(id: &str) -> String {
    format!("{}/contributions", list(id))
}

// ============================================================================
// CATALOG
// ============================================================================

pub const PRODUCTS_PAGINATED: &str = "/api/Products/paginated";
pub const PRODUCTS_SEARCH: &str = "/api/products/search";
pub const SUPPLIERS: &str = "/api/suppliers";
pub const CATEGORIES: &str = "/api/categories";

// ============================================================================
// NOTIFICATIONS
// ============================================================================

pub const NOTIFICATIONS: &str = "/api/notifications";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_ids_are_path_encoded() {
        assert_eq!(list("42"), "/api/list/42");
        assert_eq!(list("a/b c"), "/api/list/a%2Fb%20c");
        assert_eq!(list_contributions("42"), "/api/list/42/contributions");
    }
}
