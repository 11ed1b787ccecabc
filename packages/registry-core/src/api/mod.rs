//! REST client for the registry API

mod client;
mod endpoints;

pub use client::*;
pub use endpoints::*;
