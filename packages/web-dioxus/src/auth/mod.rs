//! Session handling

mod context;

pub use context::*;
