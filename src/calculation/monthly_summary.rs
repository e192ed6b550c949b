//! Monthly summary calculation.
//!
//! This module ties the working day scan and the weekly pay tiers together
//! into a [`MonthlySummary`] for a date range within one calendar month.

use tracing::debug;

use crate::config::CalculatorRules;
use crate::error::ValidationError;
use crate::models::{CalculationInput, MonthlyCalculation, MonthlySummary, WeeklyPay};

use super::{calculate_weekly_pay, checked_sum, collect_weekly_buckets, round_money};

/// Checks the date range of an input.
///
/// Rejects ranges whose end precedes the start, and ranges whose start and
/// end fall in different months or years.
pub fn validate_date_range(input: &CalculationInput) -> Result<(), ValidationError> {
    if input.end_date < input.start_date {
        return Err(ValidationError::InvertedRange {
            start: input.start_date,
            end: input.end_date,
        });
    }

    if !input.is_single_month() {
        return Err(ValidationError::CrossMonthRange {
            start: input.start_date,
            end: input.end_date,
        });
    }

    Ok(())
}

/// Formats the month label of a range, e.g. "March 2024".
pub fn month_label(input: &CalculationInput) -> String {
    input.start_date.format("%B %Y").to_string()
}

/// Computes the monthly summary together with the weekly lines.
///
/// # Errors
///
/// Returns [`ValidationError::InvertedRange`] or
/// [`ValidationError::CrossMonthRange`] when the date range is not a valid
/// range inside one calendar month, and [`ValidationError::AmountOutOfRange`]
/// when an amount is too large for a decimal. No summary is produced in
/// either case.
pub fn calculate_monthly_breakdown(
    input: &CalculationInput,
    rules: &CalculatorRules,
) -> Result<MonthlyCalculation, ValidationError> {
    validate_date_range(input)?;

    let weeks = collect_weekly_buckets(input.start_date, input.end_date)
        .iter()
        .zip(1u32..)
        .map(|(bucket, step_number)| calculate_weekly_pay(bucket, input, rules, step_number))
        .collect::<Result<Vec<WeeklyPay>, _>>()?;

    let total_salary = round_money(checked_sum(weeks.iter().map(|w| w.salary), "total_salary")?);
    let total_meal_compensation = round_money(checked_sum(
        weeks.iter().map(|w| w.meal_compensation),
        "total_meal_compensation",
    )?);
    let transport_cost = round_money(input.transport_cost_flat);
    let total_monthly_cost = round_money(checked_sum(
        [total_salary, total_meal_compensation, transport_cost],
        "total_monthly_cost",
    )?);

    let summary = MonthlySummary {
        month_label: month_label(input),
        total_monthly_cost,
        transport_cost,
        total_meal_compensation,
        total_salary,
    };

    debug!(
        month = %summary.month_label,
        weeks = weeks.len(),
        total_salary = %summary.total_salary,
        total_meal_compensation = %summary.total_meal_compensation,
        total_monthly_cost = %summary.total_monthly_cost,
        "Computed monthly summary"
    );

    Ok(MonthlyCalculation { summary, weeks })
}

/// Computes the monthly summary for a date range within one calendar month.
///
/// Days are grouped by ISO week; each week is paid with tiered overtime and
/// earns meal compensation per working day. The flat transport cost is added
/// exactly once.
///
/// # Examples
///
/// ## One full working week
///
/// ```
/// use payroll_calc::calculation::compute_monthly_summary;
/// use payroll_calc::config::CalculatorRules;
/// use payroll_calc::models::CalculationInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput {
///     hourly_rate: Decimal::from_str("10.00").unwrap(),
///     days_per_week: 5,
///     daily_hours: Decimal::from(8),
///     meal_compensation_per_day: Decimal::from_str("5.00").unwrap(),
///     transport_cost_flat: Decimal::from_str("30.00").unwrap(),
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
/// };
///
/// let summary = compute_monthly_summary(&input, &CalculatorRules::default()).unwrap();
///
/// assert_eq!(summary.month_label, "March 2024");
/// assert_eq!(summary.total_salary, Decimal::from_str("400.00").unwrap());
/// assert_eq!(summary.total_meal_compensation, Decimal::from_str("25.00").unwrap());
/// assert_eq!(summary.total_monthly_cost, Decimal::from_str("455.00").unwrap());
/// ```
///
/// ## Range crossing a month boundary
///
/// ```
/// use payroll_calc::calculation::compute_monthly_summary;
/// use payroll_calc::config::CalculatorRules;
/// use payroll_calc::error::ValidationError;
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
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
/// };
///
/// let result = compute_monthly_summary(&input, &CalculatorRules::default());
/// assert!(matches!(result, Err(ValidationError::CrossMonthRange { .. })));
/// ```
pub fn compute_monthly_summary(
    input: &CalculationInput,
    rules: &CalculatorRules,
) -> Result<MonthlySummary, ValidationError> {
    calculate_monthly_breakdown(input, rules).map(|calculation| calculation.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_input(start: NaiveDate, end: NaiveDate) -> CalculationInput {
        CalculationInput {
            hourly_rate: dec("10.00"),
            days_per_week: 5,
            daily_hours: dec("8"),
            meal_compensation_per_day: dec("5.00"),
            transport_cost_flat: dec("30.00"),
            start_date: start,
            end_date: end,
        }
    }

    fn summarize(input: &CalculationInput) -> MonthlySummary {
        compute_monthly_summary(input, &CalculatorRules::default()).unwrap()
    }

    #[test]
    fn test_single_full_work_week() {
        let summary = summarize(&create_input(date(2024, 3, 4), date(2024, 3, 8)));

        assert_eq!(summary.total_salary, dec("400.00"));
        assert_eq!(summary.total_meal_compensation, dec("25.00"));
        assert_eq!(summary.transport_cost, dec("30.00"));
        assert_eq!(summary.total_monthly_cost, dec("455.00"));
    }

    #[test]
    fn test_weekend_only_range_costs_transport_only() {
        let summary = summarize(&create_input(date(2024, 3, 9), date(2024, 3, 10)));

        assert_eq!(summary.total_salary, Decimal::ZERO);
        assert_eq!(summary.total_meal_compensation, Decimal::ZERO);
        assert_eq!(summary.total_monthly_cost, dec("30.00"));
    }

    #[test]
    fn test_full_month_without_overtime() {
        // March 2024: 21 weekdays × 8h × $10
        let summary = summarize(&create_input(date(2024, 3, 1), date(2024, 3, 31)));

        assert_eq!(summary.total_salary, dec("1680.00"));
        assert_eq!(summary.total_meal_compensation, dec("105.00"));
        assert_eq!(summary.total_monthly_cost, dec("1815.00"));
    }

    #[test]
    fn test_overtime_is_computed_per_week() {
        // 10h days: each full week is 50h = 400 + 100 + 30 = 530.
        // March 2024 has 4 full weeks plus Friday 1st (10h = 100).
        let mut input = create_input(date(2024, 3, 1), date(2024, 3, 31));
        input.daily_hours = dec("10");
        let calculation = calculate_monthly_breakdown(&input, &CalculatorRules::default()).unwrap();

        assert_eq!(calculation.weeks.len(), 5);
        assert_eq!(calculation.weeks[0].salary, dec("100.00"));
        assert_eq!(calculation.weeks[1].salary, dec("530.00"));
        assert_eq!(calculation.summary.total_salary, dec("2220.00"));
        assert_eq!(calculation.working_days(), 21);
        assert_eq!(calculation.overtime_hours(), dec("40"));
    }

    #[test]
    fn test_transport_cost_applied_once() {
        let short = summarize(&create_input(date(2024, 3, 4), date(2024, 3, 4)));
        let long = summarize(&create_input(date(2024, 3, 1), date(2024, 3, 31)));

        assert_eq!(short.transport_cost, dec("30.00"));
        assert_eq!(long.transport_cost, dec("30.00"));
    }

    #[test]
    fn test_days_per_week_does_not_change_totals() {
        let mut input = create_input(date(2024, 3, 4), date(2024, 3, 8));
        let five = summarize(&input);
        input.days_per_week = 2;
        let two = summarize(&input);

        assert_eq!(five, two);
    }

    #[test]
    fn test_cross_month_range_fails() {
        let input = create_input(date(2024, 1, 30), date(2024, 2, 2));
        let result = compute_monthly_summary(&input, &CalculatorRules::default());

        assert_eq!(
            result,
            Err(ValidationError::CrossMonthRange {
                start: date(2024, 1, 30),
                end: date(2024, 2, 2),
            })
        );
    }

    #[test]
    fn test_same_month_different_year_fails() {
        let input = create_input(date(2023, 3, 1), date(2024, 3, 1));
        let result = compute_monthly_summary(&input, &CalculatorRules::default());
        assert!(matches!(result, Err(ValidationError::CrossMonthRange { .. })));
    }

    #[test]
    fn test_inverted_range_fails() {
        let input = create_input(date(2024, 3, 10), date(2024, 3, 1));
        let result = compute_monthly_summary(&input, &CalculatorRules::default());
        assert!(matches!(result, Err(ValidationError::InvertedRange { .. })));
    }

    #[test]
    fn test_month_label_uses_start_date() {
        let input = create_input(date(2024, 12, 2), date(2024, 12, 31));
        assert_eq!(month_label(&input), "December 2024");
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let mut input = create_input(date(2024, 2, 5), date(2024, 2, 23));
        input.hourly_rate = dec("11.37");
        input.daily_hours = dec("9.25");
        input.meal_compensation_per_day = dec("4.35");
        input.transport_cost_flat = dec("27.80");
        let summary = summarize(&input);

        assert_eq!(
            summary.total_monthly_cost,
            round_money(
                summary.total_salary + summary.total_meal_compensation + summary.transport_cost
            )
        );
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let input = create_input(date(2024, 3, 1), date(2024, 3, 31));
        let calculation = calculate_monthly_breakdown(&input, &CalculatorRules::default()).unwrap();

        let steps: Vec<u32> = calculation
            .weeks
            .iter()
            .map(|w| w.audit_step.step_number)
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let mut input = create_input(date(2024, 3, 4), date(2024, 3, 8));
        input.transport_cost_flat = Decimal::MAX;
        let result = compute_monthly_summary(&input, &CalculatorRules::default());

        assert_eq!(
            result,
            Err(ValidationError::AmountOutOfRange {
                field: "total_monthly_cost".to_string()
            })
        );
    }

    #[test]
    fn test_weekly_overflow_stops_the_calculation() {
        let mut input = create_input(date(2024, 3, 1), date(2024, 3, 31));
        input.hourly_rate = Decimal::MAX;
        let result = calculate_monthly_breakdown(&input, &CalculatorRules::default());

        assert!(matches!(
            result,
            Err(ValidationError::AmountOutOfRange { .. })
        ));
    }
}
