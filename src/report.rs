//! Plain-text rendering of calculation results.

use crate::models::{MonthlyCalculation, MonthlySummary, SUMMARY_COLUMNS};

/// Column headers with the currency symbol attached to the monetary columns.
///
/// # Example
///
/// ```
/// use payroll_calc::report::display_headers;
///
/// let headers = display_headers("€");
/// assert_eq!(headers[0], "Month");
/// assert_eq!(headers[4], "Total Salary (€)");
/// ```
pub fn display_headers(currency_symbol: &str) -> [String; 5] {
    let mut headers = SUMMARY_COLUMNS.map(str::to_string);
    for header in headers.iter_mut().skip(1) {
        *header = format!("{} ({})", header, currency_symbol);
    }
    headers
}

/// Renders a summary as an announcement line followed by a two-row table.
pub fn render_summary(summary: &MonthlySummary, currency_symbol: &str) -> String {
    let headers = display_headers(currency_symbol);
    let values = summary.column_values();

    let widths: Vec<usize> = headers
        .iter()
        .zip(values.iter())
        .map(|(h, v)| h.chars().count().max(v.chars().count()))
        .collect();

    let row = |cells: &[String; 5]| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    format!(
        "Results for {} are displayed below.\n\n{}\n{}\n",
        summary.month_label,
        row(&headers),
        row(&values)
    )
}

/// Renders one line per ISO week of a calculation.
pub fn render_breakdown(calculation: &MonthlyCalculation, currency_symbol: &str) -> String {
    let mut out = String::from("Weekly breakdown:\n");
    for week in &calculation.weeks {
        out.push_str(&format!(
            "  {}  {} working day(s)  {} h  (base {} h, tier 1 {} h, tier 2 {} h)  salary {} {:.2}  meals {} {:.2}\n",
            week.bucket.label(),
            week.bucket.working_day_count,
            week.hours.normalize(),
            week.base_hours.normalize(),
            week.tier_1_hours.normalize(),
            week.tier_2_hours.normalize(),
            currency_symbol,
            week.salary,
            currency_symbol,
            week.meal_compensation
        ));
    }
    out
}
