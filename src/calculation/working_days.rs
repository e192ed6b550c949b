//! Working day detection and weekly grouping.
//!
//! This module scans an inclusive date range day by day and groups the days
//! into ISO weeks, counting Monday to Friday as working days.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::WeeklyBucket;

/// Returns true for Monday through Friday.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::is_working_day;
/// use chrono::NaiveDate;
///
/// // 2024-03-08 is a Friday, 2024-03-09 a Saturday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()));
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
/// ```
pub fn is_working_day(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() < 5
}

/// Groups the days from `start` to `end` (both inclusive) by ISO week.
///
/// Every day of the range increments its week's calendar day count; only
/// weekdays increment the working day count. Buckets are returned in
/// chronological order. An inverted range yields no buckets.
///
/// Buckets are keyed by ISO year and week together, so the last days of
/// December that belong to week 1 of the following year never merge with
/// the first week of the same calendar year.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::collect_weekly_buckets;
/// use chrono::NaiveDate;
///
/// // Friday 2024-03-08 to Tuesday 2024-03-12 spans two ISO weeks.
/// let buckets = collect_weekly_buckets(
///     NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
/// );
///
/// assert_eq!(buckets.len(), 2);
/// assert_eq!(buckets[0].working_day_count, 1);
/// assert_eq!(buckets[0].calendar_day_count, 3);
/// assert_eq!(buckets[1].working_day_count, 2);
/// ```
pub fn collect_weekly_buckets(start: NaiveDate, end: NaiveDate) -> Vec<WeeklyBucket> {
    let mut buckets: BTreeMap<(i32, u32), WeeklyBucket> = BTreeMap::new();

    for day in start.iter_days().take_while(|d| *d <= end) {
        let iso = day.iso_week();
        let bucket = buckets
            .entry((iso.year(), iso.week()))
            .or_insert_with(|| WeeklyBucket::new(iso.year(), iso.week()));

        bucket.calendar_day_count += 1;
        if is_working_day(day) {
            bucket.working_day_count += 1;
        }
    }

    buckets.into_values().collect()
}
