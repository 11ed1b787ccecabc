//! Global state management

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use registry_core::wizard::DraftStore;
use registry_core::Config;

use crate::browser;

/// Configuration and the draft store, shared by every screen
#[derive(Clone, Copy)]
pub struct AppState {
    config: Signal<Config>,
    drafts: Signal<Rc<dyn DraftStore>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let drafts = browser::draft_store(&config);
        Self {
            config: Signal::new(config),
            drafts: Signal::new(drafts),
        }
    }

    pub fn api_url(&self) -> String {
        self.config.peek().api_url.clone()
    }

    pub fn share_base_url(&self) -> String {
        self.config.peek().share_base_url.clone()
    }

    pub fn page_size(&self) -> u32 {
        self.config.peek().page_size
    }

    pub fn search_debounce(&self) -> Duration {
        self.config.peek().search_debounce
    }

    pub fn drafts(&self) -> Rc<dyn DraftStore> {
        self.drafts.peek().clone()
    }
}

/// Hook to access the app state
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

/// Browser builds bake the `REGISTRY_*` values in at compile time; native
/// builds read them from the environment (and `.env`).
pub fn load_config() -> Config {
    #[cfg(not(feature = "web"))]
    match Config::from_env() {
        Ok(config) => return config,
        Err(e) => tracing::warn!(error = %e, "Invalid environment configuration, using defaults"),
    }

    Config::from_build_values(
        option_env!("REGISTRY_API_URL"),
        option_env!("REGISTRY_SHARE_BASE_URL"),
        option_env!("REGISTRY_SEARCH_DEBOUNCE_MS"),
        option_env!("REGISTRY_PAGE_SIZE"),
    )
}
