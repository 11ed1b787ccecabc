//! Local persistence of the in-progress wizard session

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, warn};

use super::state::WizardState;
use crate::error::DraftError;

/// Storage key for the draft blob in browser local storage
pub const DRAFT_KEY: &str = "gift-registry:wizard-draft";

/// Holds at most one JSON draft blob.
pub trait DraftStore {
    fn load_raw(&self) -> Result<Option<String>, DraftError>;
    fn save_raw(&self, blob: &str) -> Result<(), DraftError>;
    fn clear(&self) -> Result<(), DraftError>;
}

/// Resume the stored draft.
///
/// Unreadable or corrupt drafts are cleared and treated as absent.
pub fn load_draft(store: &dyn DraftStore) -> Option<WizardState> {
    let blob = match store.load_raw() {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "Could not read wizard draft");
            return None;
        }
    };

    match serde_json::from_str::<WizardState>(&blob) {
        Ok(state) if !state.is_editing() => {
            debug!(draft_id = %state.draft_id, "Resuming wizard draft");
            Some(state)
        }
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "Discarding corrupt wizard draft");
            if let Err(e) = store.clear() {
                warn!(error = %e, "Could not clear corrupt wizard draft");
            }
            None
        }
    }
}

/// Persist the wizard state. Edit sessions are never written so they
/// cannot clobber a new-list draft.
pub fn save_draft(store: &dyn DraftStore, state: &mut WizardState) -> Result<(), DraftError> {
    if state.is_editing() {
        return Ok(());
    }
    state.saved_at = Some(Utc::now());
    let blob = serde_json::to_string(state)?;
    store.save_raw(&blob)
}

/// In-memory store for tests and hosts without persistent storage
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    blob: RefCell<Option<String>>,
}

impl DraftStore for MemoryDraftStore {
    fn load_raw(&self) -> Result<Option<String>, DraftError> {
        Ok(self.blob.borrow().clone())
    }

    fn save_raw(&self, blob: &str) -> Result<(), DraftError> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), DraftError> {
        self.blob.borrow_mut().take();
        Ok(())
    }
}

/// Draft kept in a JSON file on disk (native builds)
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DraftStore for FileDraftStore {
    fn load_raw(&self) -> Result<Option<String>, DraftError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_raw(&self, blob: &str) -> Result<(), DraftError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), DraftError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
