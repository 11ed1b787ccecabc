//! Error types for the registry client.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for registry API operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Registry API errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network error (connection failed, request could not be sent)
    #[error("Network error: {0}")]
    Network(String),

    /// Session missing or rejected by the server
    #[error("Unauthorized: please sign in again")]
    Unauthorized,

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Whether the error should send the user back to the login screen.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

/// Form validation failures. The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please choose an event type")]
    EventTypeMissing,

    #[error("Please describe your event type")]
    CustomEventTypeMissing,

    #[error("Guest count must be a whole number greater than zero")]
    InvalidGuestCount,

    #[error("Minimum contribution must be zero or more")]
    InvalidMinContribution,

    #[error("Guest count must not exceed 100,000")]
    TooManyGuests,

    #[error("Amounts above 1,000,000,000 are not supported")]
    AmountTooLarge,

    #[error("Minimum contribution is locked while editing. Unlock it to make changes")]
    MinContributionLocked,

    #[error("Select at least one gift")]
    NoGiftsSelected,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Item {0} is not in the selection")]
    ItemNotSelected(String),

    #[error("List name is required")]
    NameMissing,

    #[error("Event date is required")]
    EventDateMissing,

    #[error("Campaign start must be on or before campaign end")]
    CampaignWindowInverted,

    #[error("Campaign must end on or before the event date")]
    CampaignEndsAfterEvent,

    #[error("Minimum price must not exceed maximum price")]
    PriceRangeInverted,

    #[error("Please enter a valid price")]
    InvalidPrice,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Please read the terms to the end before accepting")]
    TermsNotRead,

    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,

    #[error("Email and password are required")]
    CredentialsMissing,

    #[error("Contribution amount must be greater than zero")]
    InvalidContributionAmount,

    #[error("The minimum contribution for this registry is {0}")]
    BelowMinContribution(Decimal),

    #[error("Please tell us your name")]
    RsvpNameMissing,

    #[error("Click inside the map to choose a location")]
    LocationOutOfBounds,
}

/// Failure to save or publish a list from the wizard.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Draft storage errors.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Draft storage unavailable: {0}")]
    Unavailable(String),

    #[error("Draft I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Draft serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
