//! Gift registry client core
//!
//! Renderer-independent building blocks for the gift registry frontend:
//! the typed REST client for the registry API, the list-creation wizard
//! and its local draft, catalog browsing, the selection cart, and the view
//! models behind the dashboard, published view, progress report and
//! notification screens.
//!
//! # Example
//!
//! ```rust,ignore
//! use registry_core::{Config, RegistryClient, Credentials};
//!
//! let config = Config::from_env()?;
//! let client = RegistryClient::new(&config.api_url);
//!
//! let session = client.login(&Credentials::new("me@example.com", "secret")).await?;
//! let client = client.with_token(&session.token);
//!
//! let lists = client.lists().await?;
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod confirmation;
pub mod dashboard;
pub mod error;
pub mod location;
pub mod money;
pub mod notifications;
pub mod progress;
pub mod published;
pub mod selection;
pub mod types;
pub mod wizard;

pub use api::RegistryClient;
pub use auth::{AuthSession, Credentials};
pub use config::Config;
pub use error::{ClientError, DraftError, Result, SubmitError, ValidationError};
pub use types::*;
