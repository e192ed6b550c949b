//! CSV export of monthly summaries.
//!
//! A summary is written as a header row with the five display column names
//! followed by a single data row. Amounts are written with two decimals.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::ExportError;
use crate::models::{MonthlySummary, SUMMARY_COLUMNS};

/// File extension given to export destinations that have none.
pub const CSV_EXTENSION: &str = "csv";

/// Writes a summary as CSV to any writer.
///
/// # Example
///
/// ```
/// use payroll_calc::export::write_summary;
/// use payroll_calc::models::MonthlySummary;
/// use rust_decimal::Decimal;
///
/// let summary = MonthlySummary {
///     month_label: "March 2024".to_string(),
///     total_monthly_cost: Decimal::from(455),
///     transport_cost: Decimal::from(30),
///     total_meal_compensation: Decimal::from(25),
///     total_salary: Decimal::from(400),
/// };
///
/// let mut buffer = Vec::new();
/// write_summary(&mut buffer, &summary).unwrap();
/// assert_eq!(
///     String::from_utf8(buffer).unwrap(),
///     "Month,Total Monthly Cost,Transport Cost,Meal Compensation,Total Salary\n\
///      March 2024,455.00,30.00,25.00,400.00\n"
/// );
/// ```
pub fn write_summary<W: Write>(writer: W, summary: &MonthlySummary) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SUMMARY_COLUMNS)?;
    csv_writer.write_record(summary.column_values())?;
    csv_writer.flush().map_err(|e| ExportError::Serialization {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Reads a summary back from CSV produced by [`write_summary`].
///
/// # Errors
///
/// - [`ExportError::Serialization`] when the header does not match or a
///   field cannot be parsed
/// - [`ExportError::MissingRow`] when there is no data row
pub fn read_summary<R: Read>(reader: R) -> Result<MonthlySummary, ExportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if !headers.iter().eq(SUMMARY_COLUMNS.iter().copied()) {
        return Err(ExportError::Serialization {
            message: format!(
                "unexpected header '{}', expected '{}'",
                headers.iter().collect::<Vec<_>>().join(","),
                SUMMARY_COLUMNS.join(",")
            ),
        });
    }

    let record = csv_reader
        .records()
        .next()
        .ok_or(ExportError::MissingRow)??;

    Ok(MonthlySummary {
        month_label: field(&record, 0)?.to_string(),
        total_monthly_cost: decimal_field(&record, 1)?,
        transport_cost: decimal_field(&record, 2)?,
        total_meal_compensation: decimal_field(&record, 3)?,
        total_salary: decimal_field(&record, 4)?,
    })
}

fn field(record: &csv::StringRecord, index: usize) -> Result<&str, ExportError> {
    record.get(index).ok_or_else(|| ExportError::Serialization {
        message: format!("missing column '{}'", SUMMARY_COLUMNS[index]),
    })
}

fn decimal_field(record: &csv::StringRecord, index: usize) -> Result<Decimal, ExportError> {
    let raw = field(record, index)?;
    Decimal::from_str(raw).map_err(|e| ExportError::Serialization {
        message: format!("column '{}' value '{}': {}", SUMMARY_COLUMNS[index], raw, e),
    })
}

/// Returns the destination with a `.csv` extension added when it has none.
///
/// # Example
///
/// ```
/// use payroll_calc::export::with_csv_extension;
/// use std::path::Path;
///
/// assert_eq!(with_csv_extension(Path::new("march")), Path::new("march.csv"));
/// assert_eq!(with_csv_extension(Path::new("march.txt")), Path::new("march.txt"));
/// ```
pub fn with_csv_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(CSV_EXTENSION)
    }
}

/// Writes a summary to a file and returns the path that was written.
///
/// # Errors
///
/// Returns [`ExportError::Unwritable`] when the file cannot be created or
/// written.
pub fn export_to_path(path: &Path, summary: &MonthlySummary) -> Result<PathBuf, ExportError> {
    let destination = with_csv_extension(path);
    let unwritable = |message: String| ExportError::Unwritable {
        path: destination.display().to_string(),
        message,
    };

    let file = File::create(&destination).map_err(|e| unwritable(e.to_string()))?;
    write_summary(file, summary).map_err(|e| match e {
        ExportError::Serialization { message } => unwritable(message),
        other => other,
    })?;

    info!(
        path = %destination.display(),
        month = %summary.month_label,
        "Exported summary to CSV"
    );

    Ok(destination)
}
