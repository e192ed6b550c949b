//! Money rounding and overflow checks.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ValidationError;

/// Number of decimal places kept for monetary amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, half to even, and fixes the scale at two
/// decimal places so that `400` is carried as `400.00`.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()).to_string(), "0.12");
/// assert_eq!(round_money(Decimal::from_str("0.135").unwrap()).to_string(), "0.14");
/// assert_eq!(round_money(Decimal::from(400)).to_string(), "400.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Turns the result of a checked decimal operation into a value, or into
/// [`ValidationError::AmountOutOfRange`] naming the amount that overflowed.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::in_range;
/// use payroll_calc::error::ValidationError;
/// use rust_decimal::Decimal;
///
/// assert_eq!(in_range(Decimal::TEN.checked_mul(Decimal::TWO), "salary"), Ok(Decimal::from(20)));
/// assert_eq!(
///     in_range(Decimal::MAX.checked_mul(Decimal::TWO), "salary"),
///     Err(ValidationError::AmountOutOfRange { field: "salary".to_string() })
/// );
/// ```
pub fn in_range(value: Option<Decimal>, field: &str) -> Result<Decimal, ValidationError> {
    value.ok_or_else(|| ValidationError::AmountOutOfRange {
        field: field.to_string(),
    })
}

/// Sums amounts, failing with [`ValidationError::AmountOutOfRange`] on overflow.
pub fn checked_sum<I>(amounts: I, field: &str) -> Result<Decimal, ValidationError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| {
            in_range(total.checked_add(amount), field)
        })
}
