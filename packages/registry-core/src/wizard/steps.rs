use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::{within_limit, MAX_GUESTS};
use crate::types::{EventKind, Location};

/// Steps of the list-creation wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    EventType,
    GuestInfo,
    GiftSelection,
    ListDetails,
    Confirmation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::EventType,
        WizardStep::GuestInfo,
        WizardStep::GiftSelection,
        WizardStep::ListDetails,
        WizardStep::Confirmation,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::EventType => "Event",
            WizardStep::GuestInfo => "Guests",
            WizardStep::GiftSelection => "Gifts",
            WizardStep::ListDetails => "Details",
            WizardStep::Confirmation => "Confirm",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

// ============================================================================
// Event type
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTypeForm {
    pub kind: Option<EventKind>,
    pub custom: String,
}

impl EventTypeForm {
    pub fn validate(&self) -> Result<EventKind, ValidationError> {
        match self.kind {
            None => Err(ValidationError::EventTypeMissing),
            Some(EventKind::Other) if self.custom.trim().is_empty() => {
                Err(ValidationError::CustomEventTypeMissing)
            }
            Some(kind) => Ok(kind),
        }
    }

    /// Custom text, only meaningful for `Other`
    pub fn custom_label(&self) -> Option<String> {
        match self.kind {
            Some(EventKind::Other) => {
                let custom = self.custom.trim();
                (!custom.is_empty()).then(|| custom.to_string())
            }
            _ => None,
        }
    }
}

// ============================================================================
// Guest info
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestInfoForm {
    pub guest_count: u32,
    pub min_contribution: Decimal,
    /// Set while the minimum contribution box holds unparseable text
    #[serde(default)]
    pub(crate) min_contribution_invalid: bool,
}

impl Default for GuestInfoForm {
    fn default() -> Self {
        Self {
            guest_count: 0,
            min_contribution: Decimal::ZERO,
            min_contribution_invalid: false,
        }
    }
}

impl GuestInfoForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.guest_count == 0 {
            return Err(ValidationError::InvalidGuestCount);
        }
        if self.guest_count > MAX_GUESTS {
            return Err(ValidationError::TooManyGuests);
        }
        if self.min_contribution_invalid || self.min_contribution < Decimal::ZERO {
            return Err(ValidationError::InvalidMinContribution);
        }
        within_limit(self.min_contribution).map(|_| ())
    }

    pub fn parse_guest_count(input: &str) -> Result<u32, ValidationError> {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|count| *count > 0)
            .ok_or(ValidationError::InvalidGuestCount)
            .and_then(|count| {
                if count > MAX_GUESTS {
                    Err(ValidationError::TooManyGuests)
                } else {
                    Ok(count)
                }
            })
    }

    pub fn parse_min_contribution(input: &str) -> Result<Decimal, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Decimal::ZERO);
        }
        trimmed
            .parse::<Decimal>()
            .ok()
            .filter(|amount| *amount >= Decimal::ZERO)
            .ok_or(ValidationError::InvalidMinContribution)
            .and_then(within_limit)
    }
}

// ============================================================================
// List details
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDetailsForm {
    pub name: String,
    pub event_date: Option<NaiveDate>,
    pub campaign_start: Option<NaiveDate>,
    pub campaign_end: Option<NaiveDate>,
    pub location: Location,
}

impl ListDetailsForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameMissing);
        }
        let event_date = self.event_date.ok_or(ValidationError::EventDateMissing)?;

        if let (Some(start), Some(end)) = (self.campaign_start, self.campaign_end) {
            if start > end {
                return Err(ValidationError::CampaignWindowInverted);
            }
        }
        if self.campaign_end.is_some_and(|end| end > event_date) {
            return Err(ValidationError::CampaignEndsAfterEvent);
        }
        Ok(())
    }

    /// Parse an `<input type="date">` value; blank means unset.
    pub fn parse_date(input: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
    }

    pub fn location(&self) -> Option<Location> {
        (!self.location.is_empty()).then(|| Location {
            address: self.location.address.trim().to_string(),
            ..self.location.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_sequence_is_linear() {
        assert!(WizardStep::EventType.is_first());
        assert_eq!(WizardStep::EventType.next(), Some(WizardStep::GuestInfo));
        assert_eq!(WizardStep::Confirmation.next(), None);
        assert_eq!(WizardStep::GuestInfo.previous(), Some(WizardStep::EventType));
        assert_eq!(WizardStep::ListDetails.index(), 3);
    }

    #[test]
    fn other_requires_custom_text() {
        let mut form = EventTypeForm {
            kind: Some(EventKind::Other),
            custom: "   ".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::CustomEventTypeMissing));

        form.custom = "Graduation".into();
        assert_eq!(form.validate(), Ok(EventKind::Other));
        assert_eq!(form.custom_label().as_deref(), Some("Graduation"));
    }

    #[test]
    fn missing_event_type_blocks() {
        assert_eq!(
            EventTypeForm::default().validate(),
            Err(ValidationError::EventTypeMissing)
        );
    }

    #[test]
    fn custom_text_ignored_for_standard_kinds() {
        let form = EventTypeForm {
            kind: Some(EventKind::Wedding),
            custom: "leftover".into(),
        };
        assert_eq!(form.custom_label(), None);
    }

    #[test]
    fn guest_inputs_parse() {
        assert_eq!(GuestInfoForm::parse_guest_count(" 40 "), Ok(40));
        assert_eq!(
            GuestInfoForm::parse_guest_count("0"),
            Err(ValidationError::InvalidGuestCount)
        );
        assert_eq!(
            GuestInfoForm::parse_guest_count("-3"),
            Err(ValidationError::InvalidGuestCount)
        );
        assert_eq!(GuestInfoForm::parse_min_contribution(""), Ok(Decimal::ZERO));
        assert_eq!(
            GuestInfoForm::parse_min_contribution("-1"),
            Err(ValidationError::InvalidMinContribution)
        );
    }

    #[test]
    fn details_validation_order() {
        let mut form = ListDetailsForm::default();
        assert_eq!(form.validate(), Err(ValidationError::NameMissing));

        form.name = "Our wedding".into();
        assert_eq!(form.validate(), Err(ValidationError::EventDateMissing));

        form.event_date = ListDetailsForm::parse_date("2026-12-05");
        form.campaign_start = ListDetailsForm::parse_date("2026-11-10");
        form.campaign_end = ListDetailsForm::parse_date("2026-11-01");
        assert_eq!(form.validate(), Err(ValidationError::CampaignWindowInverted));

        form.campaign_end = ListDetailsForm::parse_date("2026-12-20");
        assert_eq!(form.validate(), Err(ValidationError::CampaignEndsAfterEvent));

        form.campaign_end = ListDetailsForm::parse_date("2026-12-01");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn guest_inputs_have_upper_bounds() {
        assert_eq!(
            GuestInfoForm::parse_guest_count("4000000000"),
            Err(ValidationError::TooManyGuests)
        );
        assert_eq!(
            GuestInfoForm::parse_guest_count("100001"),
            Err(ValidationError::TooManyGuests)
        );
        assert_eq!(
            GuestInfoForm::parse_min_contribution("79228162514264337593543950335"),
            Err(ValidationError::AmountTooLarge)
        );
    }
}
