//! Calculation input model.
//!
//! This module contains the [`CalculationInput`] type: the already-parsed
//! scalar values handed to the calculator by the input form.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The parsed inputs for a monthly calculation.
///
/// The date range is inclusive at both ends and must lie within a single
/// calendar month.
///
/// # Example
///
/// ```
/// use payroll_calc::models::CalculationInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     hourly_rate: Decimal::from(10),
///     days_per_week: 5,
///     daily_hours: Decimal::from(8),
///     meal_compensation_per_day: Decimal::from(5),
///     transport_cost_flat: Decimal::from(30),
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
/// };
///
/// assert!(input.is_single_month());
/// assert_eq!(input.range_length(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The base hourly wage.
    pub hourly_rate: Decimal,
    /// Days worked per week as entered on the form. Collected but not used
    /// in any total; working days are derived from the date range.
    pub days_per_week: u32,
    /// Hours worked on each working day.
    pub daily_hours: Decimal,
    /// Meal compensation paid per working day.
    pub meal_compensation_per_day: Decimal,
    /// Flat transport cost, applied once per calculation.
    pub transport_cost_flat: Decimal,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl CalculationInput {
    /// Returns true when start and end date share month and year.
    pub fn is_single_month(&self) -> bool {
        self.start_date.year() == self.end_date.year()
            && self.start_date.month() == self.end_date.month()
    }

    /// Number of calendar days in the range, or 0 when the range is inverted.
    pub fn range_length(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }
}
