use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::steps::{EventTypeForm, GuestInfoForm, ListDetailsForm, WizardStep};
use crate::confirmation::{suggested_total, ConfirmationData};
use crate::error::ValidationError;
use crate::money::within_limit;
use crate::selection::Selection;
use crate::types::{GiftList, GiftListPayload, ListStatus};

/// Fallback name when a list is saved as draft before it was named
pub const UNTITLED_LIST: &str = "Untitled registry";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum WizardMode {
    Create,
    Edit { list_id: String },
}

/// Form state for every wizard step plus the current position.
///
/// Serializes as the local draft blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub draft_id: Uuid,
    mode: WizardMode,
    step: WizardStep,
    pub event: EventTypeForm,
    guests: GuestInfoForm,
    pub selection: Selection,
    pub details: ListDetailsForm,
    pub confirmation: ConfirmationData,
    min_contribution_locked: bool,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh state for creating a new list.
    pub fn new() -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            mode: WizardMode::Create,
            step: WizardStep::EventType,
            event: EventTypeForm::default(),
            guests: GuestInfoForm::default(),
            selection: Selection::default(),
            details: ListDetailsForm::default(),
            confirmation: ConfirmationData::default(),
            min_contribution_locked: false,
            saved_at: None,
        }
    }

    /// State pre-filled from an existing list. The minimum contribution
    /// starts locked.
    pub fn for_edit(list: &GiftList) -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            mode: WizardMode::Edit {
                list_id: list.id.clone(),
            },
            step: WizardStep::EventType,
            event: EventTypeForm {
                kind: Some(list.event_type),
                custom: list.custom_event_type.clone().unwrap_or_default(),
            },
            guests: GuestInfoForm {
                guest_count: list.guest_count,
                min_contribution: list.min_contribution,
                min_contribution_invalid: false,
            },
            selection: Selection::from_items(list.products.clone()),
            details: ListDetailsForm {
                name: list.name.clone(),
                event_date: list.event_date,
                campaign_start: list.campaign_start,
                campaign_end: list.campaign_end,
                location: list.location.clone().unwrap_or_default(),
            },
            confirmation: ConfirmationData {
                email: list.contact_email.clone().unwrap_or_default(),
                phone: list.contact_phone.clone().unwrap_or_default(),
                use_min_contribution: list.min_contribution > Decimal::ZERO,
                terms_accepted: false,
            },
            min_contribution_locked: true,
            saved_at: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn mode(&self) -> &WizardMode {
        &self.mode
    }

    pub fn editing_list_id(&self) -> Option<&str> {
        match &self.mode {
            WizardMode::Edit { list_id } => Some(list_id),
            WizardMode::Create => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_list_id().is_some()
    }

    // ------------------------------------------------------------------------
    // Guest info
    // ------------------------------------------------------------------------

    pub fn guests(&self) -> &GuestInfoForm {
        &self.guests
    }

    pub fn set_guest_count(&mut self, count: u32) {
        self.guests.guest_count = count;
    }

    pub fn set_min_contribution(&mut self, amount: Decimal) -> Result<(), ValidationError> {
        if self.min_contribution_locked {
            return Err(ValidationError::MinContributionLocked);
        }
        if amount < Decimal::ZERO {
            return Err(ValidationError::InvalidMinContribution);
        }
        self.guests.min_contribution = within_limit(amount)?;
        self.guests.min_contribution_invalid = false;
        Ok(())
    }

    /// Apply the raw text of the minimum contribution box. Text that fails
    /// to parse keeps the guest step from advancing until it is corrected.
    pub fn set_min_contribution_text(&mut self, input: &str) -> Result<(), ValidationError> {
        if self.min_contribution_locked {
            return Err(ValidationError::MinContributionLocked);
        }
        let result = GuestInfoForm::parse_min_contribution(input)
            .and_then(|amount| self.set_min_contribution(amount));
        self.guests.min_contribution_invalid = result.is_err();
        result
    }

    pub fn is_min_contribution_locked(&self) -> bool {
        self.min_contribution_locked
    }

    pub fn unlock_min_contribution(&mut self) {
        self.min_contribution_locked = false;
    }

    pub fn suggested_total(&self) -> Decimal {
        suggested_total(self.guests.guest_count, self.guests.min_contribution)
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    pub fn validate_step(&self, step: WizardStep) -> Result<(), ValidationError> {
        match step {
            WizardStep::EventType => self.event.validate().map(|_| ()),
            WizardStep::GuestInfo => self.guests.validate(),
            WizardStep::GiftSelection => {
                if self.selection.is_empty() {
                    Err(ValidationError::NoGiftsSelected)
                } else {
                    Ok(())
                }
            }
            WizardStep::ListDetails => self.details.validate(),
            WizardStep::Confirmation => self.confirmation.validate(),
        }
    }

    /// Validate the current step and advance. The last step stays put.
    pub fn next(&mut self) -> Result<WizardStep, ValidationError> {
        self.validate_step(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Go back one step; a no-op on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Jump to an earlier step (progress header). Forward jumps must go
    /// through `next` so validation runs.
    pub fn go_to(&mut self, step: WizardStep) -> bool {
        if step.index() <= self.step.index() {
            self.step = step;
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    /// Build the create/update body.
    ///
    /// Publishing validates every step; saving as draft only needs an event
    /// type.
    pub fn payload(&self, status: ListStatus) -> Result<GiftListPayload, ValidationError> {
        let event_type = self.event.validate()?;

        if status == ListStatus::Publish {
            for step in WizardStep::ALL {
                self.validate_step(step)?;
            }
        }

        let name = match self.details.name.trim() {
            "" => UNTITLED_LIST.to_string(),
            name => name.to_string(),
        };

        let email = self.confirmation.email.trim();
        let phone = self.confirmation.phone.trim();

        Ok(GiftListPayload {
            name,
            event_type,
            custom_event_type: self.event.custom_label(),
            status,
            guest_count: self.guests.guest_count,
            min_contribution: self
                .confirmation
                .effective_min_contribution(self.guests.min_contribution),
            event_date: self.details.event_date,
            campaign_start: self.details.campaign_start,
            campaign_end: self.details.campaign_end,
            location: self.details.location(),
            products: self.selection.items().to_vec(),
            contact_email: (!email.is_empty()).then(|| email.to_string()),
            contact_phone: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}
