//! Property-based tests for the monthly calculation.
//!
//! These tests check invariants of the summary across random rates, hours
//! and date ranges, using the `proptest` crate for case generation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_calc::calculation::{calculate_monthly_breakdown, is_working_day, round_money};
use payroll_calc::config::CalculatorRules;
use payroll_calc::error::ValidationError;
use payroll_calc::models::CalculationInput;

// =============================================================================
// Generators
// =============================================================================

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

/// Generates an inclusive date range inside one calendar month.
fn arb_month_range() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (2000i32..2040, 1u32..=12)
        .prop_flat_map(|(year, month)| {
            let last = days_in_month(year, month);
            (Just(year), Just(month), 1..=last).prop_flat_map(move |(y, m, start)| {
                (Just(y), Just(m), Just(start), start..=last)
            })
        })
        .prop_map(|(year, month, start, end)| {
            (
                NaiveDate::from_ymd_opt(year, month, start).unwrap(),
                NaiveDate::from_ymd_opt(year, month, end).unwrap(),
            )
        })
}

/// Generates an amount in cents between the two bounds.
fn arb_cents(min: i64, max: i64) -> impl Strategy<Value = Decimal> {
    (min..=max).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a valid input with whole daily hours up to `max_hours`.
fn arb_input(max_hours: u32) -> impl Strategy<Value = CalculationInput> {
    (
        arb_cents(956, 5000),     // hourly_rate
        0u32..=max_hours,         // daily_hours
        arb_cents(0, 2000),       // meal_compensation_per_day
        arb_cents(0, 100_000),    // transport_cost_flat
        arb_month_range(),
    )
        .prop_map(|(rate, hours, meal, transport, (start, end))| CalculationInput {
            hourly_rate: rate,
            days_per_week: 5,
            daily_hours: Decimal::from(hours),
            meal_compensation_per_day: meal,
            transport_cost_flat: transport,
            start_date: start,
            end_date: end,
        })
}

fn weekdays_between(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_working_day(*d))
        .count() as u32
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The monthly cost is the sum of its three components, and the
    /// transport cost is added exactly once.
    #[test]
    fn prop_total_is_sum_of_components(input in arb_input(14)) {
        let calculation = calculate_monthly_breakdown(&input, &CalculatorRules::default()).unwrap();
        let summary = &calculation.summary;

        prop_assert_eq!(summary.transport_cost, input.transport_cost_flat);
        prop_assert_eq!(
            summary.total_monthly_cost,
            round_money(summary.total_salary + summary.total_meal_compensation + summary.transport_cost)
        );
    }

    /// Every weekday of the range is counted once, weekends never.
    #[test]
    fn prop_working_days_match_weekdays(input in arb_input(8)) {
        let calculation = calculate_monthly_breakdown(&input, &CalculatorRules::default()).unwrap();
        let expected = weekdays_between(input.start_date, input.end_date);

        prop_assert_eq!(calculation.working_days(), expected);
        prop_assert_eq!(
            calculation.summary.total_meal_compensation,
            Decimal::from(expected) * input.meal_compensation_per_day
        );
    }

    /// With at most 8 hours a day no week exceeds 40 hours, so the salary is
    /// plain hours times rate.
    #[test]
    fn prop_no_overtime_up_to_eight_hours_a_day(input in arb_input(8)) {
        let calculation = calculate_monthly_breakdown(&input, &CalculatorRules::default()).unwrap();
        let days = Decimal::from(calculation.working_days());

        prop_assert_eq!(calculation.overtime_hours(), Decimal::ZERO);
        prop_assert_eq!(
            calculation.summary.total_salary,
            days * input.daily_hours * input.hourly_rate
        );
    }

    /// Overtime premiums never pay less than straight time.
    #[test]
    fn prop_overtime_never_reduces_pay(input in arb_input(16)) {
        let calculation = calculate_monthly_breakdown(&input, &CalculatorRules::default()).unwrap();
        let straight_time =
            Decimal::from(calculation.working_days()) * input.daily_hours * input.hourly_rate;

        prop_assert!(calculation.summary.total_salary >= round_money(straight_time));
    }

    /// Each week's hours split exactly into base and the two tiers.
    #[test]
    fn prop_weekly_hours_split_into_tiers(input in arb_input(16)) {
        let rules = CalculatorRules::default();
        let calculation = calculate_monthly_breakdown(&input, &rules).unwrap();

        for week in &calculation.weeks {
            prop_assert_eq!(week.base_hours + week.tier_1_hours + week.tier_2_hours, week.hours);
            prop_assert!(week.base_hours <= rules.standard_weekly_hours);
            prop_assert!(week.tier_1_hours <= rules.tier_1_band_hours);
            prop_assert!(week.bucket.working_day_count <= 5);
        }
    }

    /// A range whose end lies in a later month is always rejected.
    #[test]
    fn prop_cross_month_range_is_rejected(
        input in arb_input(8),
        extra_days in 1i64..400,
    ) {
        let mut input = input;
        let last = days_in_month(input.start_date.year(), input.start_date.month());
        let month_end = input.start_date.with_day(last).unwrap();
        input.end_date = month_end + chrono::Duration::days(extra_days);

        let result = calculate_monthly_breakdown(&input, &CalculatorRules::default());
        let is_cross_month = matches!(result, Err(ValidationError::CrossMonthRange { .. }));
        prop_assert!(is_cross_month);
    }
}
