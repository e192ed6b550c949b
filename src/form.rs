//! Input form parsing for the payroll calculator.
//!
//! This module turns the raw text of the calculator's input fields into a
//! [`CalculationInput`], enforcing the checks that gate entry to the
//! calculation: numeric fields must parse, the hourly rate must reach the
//! wage floor, daily hours must be positive, other amounts must not be
//! negative, and the range must not be inverted. The same-month rule is enforced by the calculation itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::CalculatorRules;
use crate::error::ValidationError;
use crate::models::CalculationInput;

/// Date format of the start and end date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The raw text of the calculator's input fields.
///
/// Decimal fields accept either `,` or `.` as the decimal separator.
///
/// # Example
///
/// ```
/// use payroll_calc::config::CalculatorRules;
/// use payroll_calc::form::FormInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let form = FormInput {
///     hourly_rate: "10,50".to_string(),
///     days_per_week: "5".to_string(),
///     daily_hours: "8".to_string(),
///     meal_compensation: "5.00".to_string(),
///     transport_cost: "30".to_string(),
///     start_date: "2024-03-04".to_string(),
///     end_date: "2024-03-08".to_string(),
/// };
///
/// let input = form.parse(&CalculatorRules::default()).unwrap();
/// assert_eq!(input.hourly_rate, Decimal::from_str("10.50").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Base hourly wage.
    pub hourly_rate: String,
    /// Number of days per week.
    pub days_per_week: String,
    /// Hours worked per day.
    pub daily_hours: String,
    /// Meal compensation per working day.
    pub meal_compensation: String,
    /// Flat transport cost.
    pub transport_cost: String,
    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// End date, `YYYY-MM-DD`.
    pub end_date: String,
}

impl FormInput {
    /// Parses and validates the fields.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NonNumericInput`] when a numeric field does not parse
    /// - [`ValidationError::BelowWageFloor`] when the rate is below `rules.wage_floor`
    /// - [`ValidationError::NegativeAmount`] for negative hours or amounts
    /// - [`ValidationError::NonPositiveAmount`] when the daily hours are zero
    /// - [`ValidationError::InvalidDate`] when a date does not parse
    /// - [`ValidationError::InvertedRange`] when the end date precedes the start date
    pub fn parse(&self, rules: &CalculatorRules) -> Result<CalculationInput, ValidationError> {
        let hourly_rate = parse_decimal_field("hourly_rate", &self.hourly_rate)?;
        if hourly_rate < rules.wage_floor {
            return Err(ValidationError::BelowWageFloor {
                rate: hourly_rate,
                floor: rules.wage_floor,
            });
        }

        let days_per_week = self.days_per_week.trim().parse::<u32>().map_err(|_| {
            ValidationError::NonNumericInput {
                field: "days_per_week".to_string(),
                value: self.days_per_week.clone(),
            }
        })?;

        let daily_hours = parse_amount_field("daily_hours", &self.daily_hours)?;
        if daily_hours.is_zero() {
            return Err(ValidationError::NonPositiveAmount {
                field: "daily_hours".to_string(),
                value: daily_hours,
            });
        }
        let meal_compensation_per_day =
            parse_amount_field("meal_compensation", &self.meal_compensation)?;
        let transport_cost_flat = parse_amount_field("transport_cost", &self.transport_cost)?;

        let start_date = parse_date_field("start_date", &self.start_date)?;
        let end_date = parse_date_field("end_date", &self.end_date)?;
        if end_date < start_date {
            return Err(ValidationError::InvertedRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(CalculationInput {
            hourly_rate,
            days_per_week,
            daily_hours,
            meal_compensation_per_day,
            transport_cost_flat,
            start_date,
            end_date,
        })
    }
}

/// Parses a decimal field, accepting `,` as the decimal separator.
///
/// # Example
///
/// ```
/// use payroll_calc::form::parse_decimal_field;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     parse_decimal_field("hourly_rate", " 9,56 ").unwrap(),
///     Decimal::from_str("9.56").unwrap()
/// );
/// assert!(parse_decimal_field("hourly_rate", "ten").is_err());
/// ```
pub fn parse_decimal_field(field: &str, raw: &str) -> Result<Decimal, ValidationError> {
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| ValidationError::NonNumericInput {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

fn parse_amount_field(field: &str, raw: &str) -> Result<Decimal, ValidationError> {
    let value = parse_decimal_field(field, raw)?;
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

fn parse_date_field(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field: field.to_string(),
            value: raw.to_string(),
        }
    })
}
