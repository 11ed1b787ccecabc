//! Display formatting for money and dates

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// `$1,234.50` style amount
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${grouped}.{cents}", if negative { "-" } else { "" })
}

pub fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "No date".to_string())
}

/// Value for an `<input type="date">`
pub fn date_input(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn timestamp(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(Decimal::new(123450, 2)), "$1,234.50");
        assert_eq!(money(Decimal::from(20)), "$20.00");
        assert_eq!(money(Decimal::new(-5, 1)), "-$0.50");
        assert_eq!(money(Decimal::from(1_000_000)), "$1,000,000.00");
    }

    #[test]
    fn date_input_round_trips_iso() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 7);
        assert_eq!(date_input(d), "2026-03-07");
        assert_eq!(date(d), "Mar 7, 2026");
        assert_eq!(date_input(None), "");
    }
}
