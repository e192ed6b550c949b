//! Weekly salary calculation with tiered overtime.
//!
//! ## Rate Structure
//!
//! **Weekly hours are paid in three tiers (default rules):**
//! - Up to 40 hours: base rate
//! - Hours 40 to 48: 125% of base rate
//! - Beyond 48 hours: 150% of base rate
//!
//! Each tier amount is rounded to cents on its own before the weekly sum is
//! taken and rounded again. Amounts too large for a decimal are reported as
//! [`ValidationError::AmountOutOfRange`].

use rust_decimal::Decimal;

use crate::config::CalculatorRules;
use crate::error::ValidationError;
use crate::models::{AuditStep, CalculationInput, WeeklyBucket, WeeklyPay};

use super::{checked_sum, in_range, round_money};

/// Calculates salary and meal compensation for one ISO week.
///
/// # Arguments
///
/// * `bucket` - The week and its working day count
/// * `input` - The calculation input (rate, daily hours, meal compensation)
/// * `rules` - Overtime thresholds and multipliers
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ## 48 hours: the first overtime band is fully used
///
/// ```
/// use payroll_calc::calculation::calculate_weekly_pay;
/// use payroll_calc::config::CalculatorRules;
/// use payroll_calc::models::{CalculationInput, WeeklyBucket};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     hourly_rate: Decimal::from(10),
///     days_per_week: 6,
///     daily_hours: Decimal::from(8),
///     meal_compensation_per_day: Decimal::from(5),
///     transport_cost_flat: Decimal::from(30),
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
/// };
/// let bucket = WeeklyBucket {
///     iso_year: 2024,
///     iso_week: 10,
///     working_day_count: 6,
///     calendar_day_count: 7,
/// };
///
/// let pay = calculate_weekly_pay(&bucket, &input, &CalculatorRules::default(), 1).unwrap();
///
/// assert_eq!(pay.base_amount, Decimal::from(400));
/// assert_eq!(pay.tier_1_amount, Decimal::from(100));
/// assert_eq!(pay.tier_2_amount, Decimal::ZERO);
/// assert_eq!(pay.salary, Decimal::from(500));
/// ```
pub fn calculate_weekly_pay(
    bucket: &WeeklyBucket,
    input: &CalculationInput,
    rules: &CalculatorRules,
    step_number: u32,
) -> Result<WeeklyPay, ValidationError> {
    let rate = input.hourly_rate;
    let days = Decimal::from(bucket.working_day_count);
    let hours = in_range(days.checked_mul(input.daily_hours), "weekly_hours")?;

    let over_standard = in_range(
        hours.checked_sub(rules.standard_weekly_hours),
        "weekly_hours",
    )?;
    let over_band = in_range(
        over_standard.checked_sub(rules.tier_1_band_hours),
        "weekly_hours",
    )?;

    let base_hours = hours.min(rules.standard_weekly_hours);
    let tier_1_hours = over_standard
        .max(Decimal::ZERO)
        .min(rules.tier_1_band_hours);
    let tier_2_hours = over_band.max(Decimal::ZERO);

    let base_amount = round_money(in_range(base_hours.checked_mul(rate), "base_amount")?);
    let tier_1_amount = round_money(in_range(
        tier_1_hours
            .checked_mul(rate)
            .and_then(|amount| amount.checked_mul(rules.tier_1_multiplier)),
        "tier_1_amount",
    )?);
    let tier_2_amount = round_money(in_range(
        tier_2_hours
            .checked_mul(rate)
            .and_then(|amount| amount.checked_mul(rules.tier_2_multiplier)),
        "tier_2_amount",
    )?);
    let salary = round_money(checked_sum(
        [base_amount, tier_1_amount, tier_2_amount],
        "salary",
    )?);

    let meal_compensation = round_money(in_range(
        days.checked_mul(input.meal_compensation_per_day),
        "meal_compensation",
    )?);

    let sym = &rules.currency_symbol;
    let reasoning = format!(
        "Week {}: {} working days × {} hours = {} hours; {} hours at base rate {sym}{} = {sym}{}, \
         {} hours at {}x = {sym}{}, {} hours at {}x = {sym}{}; salary {sym}{}, meal compensation {sym}{}",
        bucket.label(),
        bucket.working_day_count,
        input.daily_hours.normalize(),
        hours.normalize(),
        base_hours.normalize(),
        rate.normalize(),
        base_amount,
        tier_1_hours.normalize(),
        rules.tier_1_multiplier.normalize(),
        tier_1_amount,
        tier_2_hours.normalize(),
        rules.tier_2_multiplier.normalize(),
        tier_2_amount,
        salary,
        meal_compensation
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_salary".to_string(),
        rule_name: "Weekly Salary with Overtime Tiers".to_string(),
        input: serde_json::json!({
            "week": bucket.label(),
            "working_days": bucket.working_day_count,
            "daily_hours": input.daily_hours.normalize().to_string(),
            "hourly_rate": rate.normalize().to_string(),
            "meal_compensation_per_day": input.meal_compensation_per_day.normalize().to_string()
        }),
        output: serde_json::json!({
            "hours": hours.normalize().to_string(),
            "base_amount": base_amount.to_string(),
            "tier_1_amount": tier_1_amount.to_string(),
            "tier_2_amount": tier_2_amount.to_string(),
            "salary": salary.to_string(),
            "meal_compensation": meal_compensation.to_string()
        }),
        reasoning,
    };

    Ok(WeeklyPay {
        bucket: *bucket,
        hours,
        base_hours,
        tier_1_hours,
        tier_2_hours,
        base_amount,
        tier_1_amount,
        tier_2_amount,
        salary,
        meal_compensation,
        audit_step,
    })
}
