//! Confirmation step: contact details, minimum-contribution choice and the
//! terms-acceptance gate in front of the publish button.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Pixels of slack when deciding the terms were scrolled to the end
const SCROLL_TOLERANCE: f64 = 4.0;

const MIN_PHONE_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationData {
    pub email: String,
    pub phone: String,
    pub use_min_contribution: bool,
    pub terms_accepted: bool,
}

impl Default for ConfirmationData {
    fn default() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            use_min_contribution: true,
            terms_accepted: false,
        }
    }
}

impl ConfirmationData {
    /// First failing rule, in the order fields appear on screen.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }

    /// Whether the publish button is enabled
    pub fn can_publish(&self) -> bool {
        self.validate().is_ok()
    }

    /// Minimum contribution to publish, honouring the override
    pub fn effective_min_contribution(&self, min_contribution: Decimal) -> Decimal {
        if self.use_min_contribution {
            min_contribution
        } else {
            Decimal::ZERO
        }
    }
}

/// Suggested goal shown on the confirmation screen
pub fn suggested_total(guest_count: u32, min_contribution: Decimal) -> Decimal {
    Decimal::from(guest_count).saturating_mul(min_contribution)
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
    allowed && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Terms modal state: acceptance is only possible after scrolling to the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermsGate {
    open: bool,
    read_to_end: bool,
}

impl TermsGate {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn read_to_end(&self) -> bool {
        self.read_to_end
    }

    /// Feed a scroll position from the terms container.
    pub fn on_scroll(&mut self, scroll_top: f64, client_height: f64, scroll_height: f64) {
        if scroll_top + client_height + SCROLL_TOLERANCE >= scroll_height {
            self.read_to_end = true;
        }
    }

    /// Accept the terms into `data` and close the modal.
    pub fn accept(&mut self, data: &mut ConfirmationData) -> Result<(), ValidationError> {
        if !self.read_to_end {
            return Err(ValidationError::TermsNotRead);
        }
        data.terms_accepted = true;
        self.open = false;
        Ok(())
    }
}
