//! Pricing

use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Default storefront currency.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Errors related to money conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The ISO currency code is not recognised.
    #[error("unknown currency code {0}")]
    UnknownCurrency(String),

    /// The amount does not fit into a signed money amount.
    #[error("amount {0} is too large to display")]
    AmountOutOfRange(u64),

    /// The sum of the lines does not fit into a `u64`.
    #[error("total exceeds {}", u64::MAX)]
    TotalOverflow,
}

/// Price of `quantity` units at `price` minor units each.
pub fn line_total(price: u64, quantity: u32) -> u128 {
    u128::from(price) * u128::from(quantity)
}

/// Sum of `price × quantity` over every line, in minor units.
///
/// Saturates at [`u64::MAX`] instead of wrapping.
pub fn total<I>(lines: I) -> u64
where
    I: IntoIterator<Item = (u64, u32)>,
{
    let sum = lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .fold(0_u128, u128::saturating_add);

    u64::try_from(sum).unwrap_or(u64::MAX)
}

/// Sum of `price × quantity` over every line, failing rather than saturating.
///
/// # Errors
///
/// Returns [`PricingError::TotalOverflow`] if the sum exceeds [`u64::MAX`].
pub fn checked_total<I>(lines: I) -> Result<u64, PricingError>
where
    I: IntoIterator<Item = (u64, u32)>,
{
    let sum = lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .try_fold(0_u128, u128::checked_add)
        .ok_or(PricingError::TotalOverflow)?;

    u64::try_from(sum).map_err(|_overflow| PricingError::TotalOverflow)
}

/// Resolve an ISO 4217 code.
///
/// # Errors
///
/// Returns [`PricingError::UnknownCurrency`] for codes rusty-money doesn't know.
pub fn currency(code: &str) -> Result<&'static Currency, PricingError> {
    iso::find(code).ok_or_else(|| PricingError::UnknownCurrency(code.to_string()))
}

/// Convert a minor-unit amount into [`Money`] for display.
///
/// # Errors
///
/// Returns a `PricingError` if the currency is unknown or the amount overflows.
pub fn to_money(amount: u64, code: &str) -> Result<Money<'static, Currency>, PricingError> {
    let currency = currency(code)?;
    let minor = i64::try_from(amount).map_err(|_overflow| PricingError::AmountOutOfRange(amount))?;

    Ok(Money::from_minor(minor, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn total_sums_lines() {
        assert_eq!(total([(45_000, 1), (12_000, 2)]), 69_000);
    }

    #[test]
    fn total_of_nothing_is_zero() {
        assert_eq!(total([]), 0);
    }

    #[test]
    fn total_saturates() {
        assert_eq!(total([(u64::MAX, 2)]), u64::MAX);
    }

    #[test]
    fn checked_total_matches_total_in_range() {
        assert_eq!(checked_total([(45_000, 1), (12_000, 2)]), Ok(69_000));
        assert_eq!(checked_total([(u64::MAX, 1)]), Ok(u64::MAX));
    }

    #[test]
    fn checked_total_rejects_overflow() {
        assert_eq!(
            checked_total([(u64::MAX / 2 + 1, 2)]),
            Err(PricingError::TotalOverflow)
        );
        assert_eq!(
            checked_total([(u64::MAX, 1), (1, 1)]),
            Err(PricingError::TotalOverflow)
        );
    }

    #[test]
    fn to_money_formats_minor_units() -> TestResult {
        let money = to_money(69_000, "GBP")?;

        assert_eq!(money, Money::from_minor(69_000, iso::GBP));

        Ok(())
    }

    #[test]
    fn to_money_rejects_unknown_currency() {
        let result = to_money(100, "XXQ");

        assert!(
            matches!(result, Err(PricingError::UnknownCurrency(ref code)) if code == "XXQ"),
            "expected UnknownCurrency, got {result:?}"
        );
    }

    #[test]
    fn to_money_rejects_oversized_amount() {
        let result = to_money(u64::MAX, "GBP");

        assert!(
            matches!(result, Err(PricingError::AmountOutOfRange(u64::MAX))),
            "expected AmountOutOfRange, got {result:?}"
        );
    }
}
