//! Catalog browsing: paginated listing, debounced term search and the
//! advanced filter used by the gift selection step.

mod browser;
mod debounce;
mod filter;

pub use browser::*;
pub use debounce::*;
pub use filter::*;
