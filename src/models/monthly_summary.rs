//! Monthly summary models.
//!
//! This module contains the [`MonthlySummary`] row produced by a calculation
//! and the [`MonthlyCalculation`] that pairs it with the weekly breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WeeklyPay;

/// Display and export column names, in fixed order.
pub const SUMMARY_COLUMNS: [&str; 5] = [
    "Month",
    "Total Monthly Cost",
    "Transport Cost",
    "Meal Compensation",
    "Total Salary",
];

/// The one-row result of a monthly calculation.
///
/// All amounts are rounded to two decimal places.
///
/// # Example
///
/// ```
/// use payroll_calc::models::MonthlySummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = MonthlySummary {
///     month_label: "March 2024".to_string(),
///     total_monthly_cost: Decimal::from_str("455.00").unwrap(),
///     transport_cost: Decimal::from_str("30.00").unwrap(),
///     total_meal_compensation: Decimal::from_str("25.00").unwrap(),
///     total_salary: Decimal::from_str("400.00").unwrap(),
/// };
///
/// assert_eq!(
///     summary.column_values(),
///     ["March 2024", "455.00", "30.00", "25.00", "400.00"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Month name and year of the range, e.g. "March 2024".
    pub month_label: String,
    /// Salary plus meal compensation plus transport cost.
    pub total_monthly_cost: Decimal,
    /// The flat transport cost, echoed from the input.
    pub transport_cost: Decimal,
    /// Meal compensation summed over all weeks.
    pub total_meal_compensation: Decimal,
    /// Salary summed over all weeks.
    pub total_salary: Decimal,
}

impl MonthlySummary {
    /// Returns the five column values in [`SUMMARY_COLUMNS`] order, with
    /// amounts formatted to two decimals.
    pub fn column_values(&self) -> [String; 5] {
        [
            self.month_label.clone(),
            format!("{:.2}", self.total_monthly_cost),
            format!("{:.2}", self.transport_cost),
            format!("{:.2}", self.total_meal_compensation),
            format!("{:.2}", self.total_salary),
        ]
    }
}

/// A monthly summary together with the weekly lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCalculation {
    /// The summary row.
    pub summary: MonthlySummary,
    /// Pay per ISO week, in chronological order.
    pub weeks: Vec<WeeklyPay>,
}

impl MonthlyCalculation {
    /// Total working days across all weeks.
    pub fn working_days(&self) -> u32 {
        self.weeks.iter().map(|w| w.bucket.working_day_count).sum()
    }

    /// Total overtime hours across all weeks.
    pub fn overtime_hours(&self) -> Decimal {
        self.weeks
            .iter()
            .map(|w| w.tier_1_hours + w.tier_2_hours)
            .sum()
    }
}
