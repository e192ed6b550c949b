//! Error types for the payroll calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Input problems are reported as [`ValidationError`], file output problems as
//! [`ExportError`], and both are wrapped by [`EngineError`] together with the
//! configuration failures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// A problem with the values supplied for a calculation.
///
/// Every variant is recoverable: the caller should ask for corrected input
/// and must not display or export anything for the rejected values.
///
/// # Example
///
/// ```
/// use payroll_calc::error::ValidationError;
/// use chrono::NaiveDate;
///
/// let error = ValidationError::CrossMonthRange {
///     start: NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Dates must be within the same month and year: 2024-01-30 to 2024-02-02"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Start and end date fall in different calendar months or years.
    #[error("Dates must be within the same month and year: {start} to {end}")]
    CrossMonthRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// The end date is before the start date.
    #[error("End date {end} must not be before start date {start}")]
    InvertedRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// The hourly rate is lower than the legal wage floor.
    #[error("Hourly rate {rate} cannot be lower than the wage floor of {floor}")]
    BelowWageFloor {
        /// The rate that was supplied.
        rate: Decimal,
        /// The configured minimum hourly rate.
        floor: Decimal,
    },

    /// A numeric field could not be parsed.
    #[error("Field '{field}' is not a valid number: '{value}'")]
    NonNumericInput {
        /// The name of the field.
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// An amount that must not be negative was negative.
    #[error("Field '{field}' must not be negative: {value}")]
    NegativeAmount {
        /// The name of the field.
        field: String,
        /// The parsed value.
        value: Decimal,
    },

    /// An amount that must be greater than zero was zero or less.
    #[error("Field '{field}' must be greater than zero: {value}")]
    NonPositiveAmount {
        /// The name of the field.
        field: String,
        /// The parsed value.
        value: Decimal,
    },

    /// A calculated amount exceeds the range of a decimal.
    #[error("Calculated {field} is too large to represent")]
    AmountOutOfRange {
        /// The name of the calculated amount.
        field: String,
    },

    /// A date field could not be parsed.
    #[error("Field '{field}' is not a valid YYYY-MM-DD date: '{value}'")]
    InvalidDate {
        /// The name of the field.
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },
}

/// A problem writing or reading an exported summary.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be created or written.
    #[error("Cannot write to '{path}': {message}")]
    Unwritable {
        /// The destination path.
        path: String,
        /// The underlying I/O failure.
        message: String,
    },

    /// The summary could not be encoded or decoded as CSV.
    #[error("CSV serialization failed: {message}")]
    Serialization {
        /// A description of the failure.
        message: String,
    },

    /// A CSV file was read back but contained no data row.
    #[error("CSV input contains a header but no summary row")]
    MissingRow,

    /// Export was requested before any summary was calculated.
    #[error("There is no calculated summary to export")]
    NothingToExport,
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::Serialization {
            message: error.to_string(),
        }
    }
}

/// The main error type for the payroll calculator.
///
/// # Example
///
/// ```
/// use payroll_calc::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/calculator.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The calculation input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Exporting the summary failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
