//! Browser integration: local storage, timers and element metrics.
//!
//! Everything here degrades to an in-process fallback when the crate is
//! built without the `web` feature.

use std::rc::Rc;
use std::time::Duration;

use registry_core::wizard::DraftStore;
#[cfg(not(feature = "web"))]
use registry_core::wizard::{FileDraftStore, MemoryDraftStore};
use registry_core::{AuthSession, Config, DraftError};
use tracing::warn;

/// Storage key for the signed-in session
pub const SESSION_KEY: &str = "gift-registry:session";

/// Wait before firing a debounced action.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "web")]
    {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }

    #[cfg(not(feature = "web"))]
    tokio::time::sleep(duration).await;
}

/// Store used for the wizard draft on this platform
pub fn draft_store(config: &Config) -> Rc<dyn DraftStore> {
    #[cfg(feature = "web")]
    {
        let _ = config;
        Rc::new(LocalStorageSlot::new(registry_core::wizard::DRAFT_KEY))
    }

    #[cfg(not(feature = "web"))]
    {
        let store: Rc<dyn DraftStore> = match &config.draft_path {
            Some(path) => Rc::new(FileDraftStore::new(path)),
            None => Rc::new(MemoryDraftStore::default()),
        };
        store
    }
}

fn session_store() -> Box<dyn DraftStore> {
    #[cfg(feature = "web")]
    {
        Box::new(LocalStorageSlot::new(SESSION_KEY))
    }

    // Native sessions last for the process only.
    #[cfg(not(feature = "web"))]
    {
        Box::new(MemoryDraftStore::default())
    }
}

pub fn load_session() -> Option<AuthSession> {
    let blob = match session_store().load_raw() {
        Ok(blob) => blob?,
        Err(e) => {
            warn!(error = %e, "Could not read stored session");
            return None;
        }
    };
    match serde_json::from_str(&blob) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!(error = %e, "Discarding unreadable stored session");
            clear_session();
            None
        }
    }
}

pub fn save_session(session: &AuthSession) {
    let result = serde_json::to_string(session)
        .map_err(DraftError::from)
        .and_then(|blob| session_store().save_raw(&blob));
    if let Err(e) = result {
        warn!(error = %e, "Could not persist session");
    }
}

pub fn clear_session() {
    if let Err(e) = session_store().clear() {
        warn!(error = %e, "Could not clear stored session");
    }
}

/// Scroll position of an element as `(scroll_top, client_height, scroll_height)`.
pub fn scroll_metrics(element_id: &str) -> Option<(f64, f64, f64)> {
    #[cfg(feature = "web")]
    {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(element_id)?;
        Some((
            f64::from(element.scroll_top()),
            f64::from(element.client_height()),
            f64::from(element.scroll_height()),
        ))
    }

    // No layout outside the browser: the whole element counts as visible.
    #[cfg(not(feature = "web"))]
    {
        let _ = element_id;
        Some((0.0, 0.0, 0.0))
    }
}

/// One key in `window.localStorage`
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageSlot {
    key: &'static str,
}

#[cfg(feature = "web")]
impl LocalStorageSlot {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Result<web_sys::Storage, DraftError> {
        web_sys::window()
            .ok_or_else(|| DraftError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DraftError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(feature = "web")]
fn js_error(e: impl std::fmt::Debug) -> DraftError {
    DraftError::Unavailable(format!("{e:?}"))
}

#[cfg(feature = "web")]
impl DraftStore for LocalStorageSlot {
    fn load_raw(&self) -> Result<Option<String>, DraftError> {
        Self::storage()?.get_item(self.key).map_err(js_error)
    }

    fn save_raw(&self, blob: &str) -> Result<(), DraftError> {
        Self::storage()?.set_item(self.key, blob).map_err(js_error)
    }

    fn clear(&self) -> Result<(), DraftError> {
        Self::storage()?.remove_item(self.key).map_err(js_error)
    }
}

#[cfg(all(test, not(feature = "web")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn native_sleep_waits_for_the_debounce_delay() {
        let started = tokio::time::Instant::now();
        sleep(Duration::from_millis(40)).await;
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn native_draft_store_without_path_is_in_memory() {
        let store = draft_store(&Config::default());
        store.save_raw("{}").unwrap();
        assert_eq!(store.load_raw().unwrap().as_deref(), Some("{}"));
    }
}
