//! Per-week models.
//!
//! This module contains the [`WeeklyBucket`] built while scanning a date
//! range, and the [`WeeklyPay`] computed from each bucket.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditStep;

/// The working days of a date range that fall into one ISO week.
///
/// # Example
///
/// ```
/// use payroll_calc::models::WeeklyBucket;
///
/// let bucket = WeeklyBucket {
///     iso_year: 2024,
///     iso_week: 10,
///     working_day_count: 5,
///     calendar_day_count: 7,
/// };
/// assert_eq!(bucket.label(), "2024-W10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    /// The ISO week-numbering year.
    pub iso_year: i32,
    /// The ISO week number (1 to 53).
    pub iso_week: u32,
    /// Monday to Friday days of the range inside this week.
    pub working_day_count: u32,
    /// All days of the range inside this week, weekends included.
    pub calendar_day_count: u32,
}

impl WeeklyBucket {
    /// Creates an empty bucket for the given ISO week.
    pub fn new(iso_year: i32, iso_week: u32) -> Self {
        Self {
            iso_year,
            iso_week,
            working_day_count: 0,
            calendar_day_count: 0,
        }
    }

    /// Returns the ISO 8601 week label, e.g. `2024-W09`.
    pub fn label(&self) -> String {
        format!("{}-W{:02}", self.iso_year, self.iso_week)
    }
}

/// The pay computed for one ISO week.
///
/// Amounts are rounded to cents. `salary` is the rounded sum of the three
/// independently rounded tier amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPay {
    /// The week this pay belongs to.
    pub bucket: WeeklyBucket,
    /// Working days times daily hours.
    pub hours: Decimal,
    /// Hours paid at the base rate.
    pub base_hours: Decimal,
    /// Hours paid at the first overtime multiplier.
    pub tier_1_hours: Decimal,
    /// Hours paid at the second overtime multiplier.
    pub tier_2_hours: Decimal,
    /// Pay for the base hours.
    pub base_amount: Decimal,
    /// Pay for the first overtime tier.
    pub tier_1_amount: Decimal,
    /// Pay for the second overtime tier.
    pub tier_2_amount: Decimal,
    /// Total salary for the week.
    pub salary: Decimal,
    /// Meal compensation for the week.
    pub meal_compensation: Decimal,
    /// Record of how the week was computed.
    pub audit_step: AuditStep,
}

impl WeeklyPay {
    /// Returns true if any overtime hours were worked this week.
    pub fn has_overtime(&self) -> bool {
        self.tier_1_hours > Decimal::ZERO || self.tier_2_hours > Decimal::ZERO
    }
}
