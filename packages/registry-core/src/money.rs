//! Upper bounds for user-entered figures and overflow-free arithmetic

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Largest amount accepted from any money input
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000;

/// Largest guest count accepted by the guest info step
pub const MAX_GUESTS: u32 = 100_000;

pub fn max_amount() -> Decimal {
    Decimal::from(MAX_AMOUNT_UNITS)
}

/// Reject amounts above [`MAX_AMOUNT_UNITS`].
pub fn within_limit(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount > max_amount() {
        return Err(ValidationError::AmountTooLarge);
    }
    Ok(amount)
}

/// Sum that pins at `Decimal::MAX` instead of panicking.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}
