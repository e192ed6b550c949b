//! Core data models for the payroll calculator.
//!
//! This module contains all the domain models used throughout the calculator.

mod audit;
mod calculation_input;
mod monthly_summary;
mod weekly_pay;

pub use audit::AuditStep;
pub use calculation_input::CalculationInput;
pub use monthly_summary::{MonthlyCalculation, MonthlySummary, SUMMARY_COLUMNS};
pub use weekly_pay::{WeeklyBucket, WeeklyPay};
