//! Gift Registry - Dioxus Web Application
//!
//! Single-page frontend for creating, sharing and tracking gift registries.
//! All data comes from the registry REST API through `registry-core`.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! REGISTRY_API_URL=http://localhost:5000 dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod browser;
mod components;
mod format;
mod pages;
mod routes;
mod state;

fn main() {
    init_logging();

    dioxus::launch(app::App);
}

#[cfg(feature = "web")]
fn init_logging() {
    dioxus::logger::initialize_default();
}

#[cfg(not(feature = "web"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,registry_core=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
