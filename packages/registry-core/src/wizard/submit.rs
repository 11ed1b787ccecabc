use tracing::{info, warn};

use super::draft::DraftStore;
use super::state::WizardState;
use crate::api::RegistryClient;
use crate::error::SubmitError;
use crate::types::{GiftList, ListStatus};

/// Create or update the list described by the wizard.
///
/// Edit sessions `PUT` the existing list; new lists are `POST`ed. Once a new
/// list exists on the server, as draft or published, the local draft is
/// cleared so resuming the wizard cannot create it a second time. Later
/// changes go through the dashboard's edit flow.
pub async fn submit_list(
    client: &RegistryClient,
    state: &WizardState,
    status: ListStatus,
    drafts: &dyn DraftStore,
) -> Result<GiftList, SubmitError> {
    let payload = state.payload(status)?;

    let saved = match state.editing_list_id() {
        Some(list_id) => client.update_list(list_id, &payload).await?,
        None => client.create_list(&payload).await?,
    };

    info!(
        list_id = %saved.id,
        status = ?saved.status,
        editing = state.is_editing(),
        "Gift list saved"
    );

    if !state.is_editing() {
        if let Err(e) = drafts.clear() {
            warn!(error = %e, "Could not clear wizard draft after saving");
        }
    }

    Ok(saved)
}
