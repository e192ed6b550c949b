//! Calculation logic for the payroll calculator.
//!
//! This module contains the calculation functions for a monthly summary:
//! scanning the date range into ISO weeks of working days, paying each week
//! with tiered overtime, rounding money to cents, and summing the weeks into
//! the monthly totals.

mod monthly_summary;
mod rounding;
mod weekly_pay;
mod working_days;

pub use monthly_summary::{
    calculate_monthly_breakdown, compute_monthly_summary, month_label, validate_date_range,
};
pub use rounding::{MONEY_DECIMAL_PLACES, checked_sum, in_range, round_money};
pub use weekly_pay::calculate_weekly_pay;
pub use working_days::{collect_weekly_buckets, is_working_day};
