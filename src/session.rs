//! Application session for the payroll calculator.
//!
//! The session owns the rules in force and the last summary produced, and
//! is passed explicitly between the calculate action and the export action.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_monthly_breakdown;
use crate::config::CalculatorRules;
use crate::error::{EngineResult, ExportError};
use crate::export::export_to_path;
use crate::form::FormInput;
use crate::models::{MonthlyCalculation, MonthlySummary};

/// Holds the state shared by the calculate and export actions.
///
/// # Example
///
/// ```no_run
/// use payroll_calc::config::CalculatorRules;
/// use payroll_calc::form::FormInput;
/// use payroll_calc::session::PayrollSession;
/// use std::path::Path;
///
/// let mut session = PayrollSession::new(CalculatorRules::default());
/// let form = FormInput {
///     hourly_rate: "10".to_string(),
///     days_per_week: "5".to_string(),
///     daily_hours: "8".to_string(),
///     meal_compensation: "5".to_string(),
///     transport_cost: "30".to_string(),
///     start_date: "2024-03-04".to_string(),
///     end_date: "2024-03-08".to_string(),
/// };
///
/// session.calculate(&form)?;
/// session.export(Path::new("march.csv"))?;
/// # Ok::<(), payroll_calc::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollSession {
    rules: CalculatorRules,
    last_calculation: Option<MonthlyCalculation>,
}

impl PayrollSession {
    /// Creates a session with no summary yet.
    pub fn new(rules: CalculatorRules) -> Self {
        Self {
            rules,
            last_calculation: None,
        }
    }

    /// Returns the rules used by this session.
    pub fn rules(&self) -> &CalculatorRules {
        &self.rules
    }

    /// Returns the last summary produced, if any.
    pub fn last_summary(&self) -> Option<&MonthlySummary> {
        self.last_calculation.as_ref().map(|c| &c.summary)
    }

    /// Returns the last calculation, including the weekly breakdown.
    pub fn last_calculation(&self) -> Option<&MonthlyCalculation> {
        self.last_calculation.as_ref()
    }

    /// Parses the form, computes the summary and keeps it as the last result.
    ///
    /// Any validation failure clears the previous result, so a summary that
    /// no longer matches the form can never be exported.
    pub fn calculate(&mut self, form: &FormInput) -> EngineResult<&MonthlyCalculation> {
        let correlation_id = Uuid::new_v4();
        info!(correlation_id = %correlation_id, "Processing calculation request");

        let outcome = form
            .parse(&self.rules)
            .and_then(|input| calculate_monthly_breakdown(&input, &self.rules));

        match outcome {
            Ok(calculation) => {
                info!(
                    correlation_id = %correlation_id,
                    month = %calculation.summary.month_label,
                    weeks = calculation.weeks.len(),
                    total_monthly_cost = %calculation.summary.total_monthly_cost,
                    "Calculation completed successfully"
                );
                let stored = self.last_calculation.insert(calculation);
                Ok(&*stored)
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Calculation rejected"
                );
                self.last_calculation = None;
                Err(err.into())
            }
        }
    }

    /// Writes the last summary to `path` as CSV and returns the written path.
    ///
    /// Fails with [`ExportError::NothingToExport`] when no summary exists.
    /// A failed export leaves the summary in place so it can be retried.
    pub fn export(&self, path: &Path) -> EngineResult<PathBuf> {
        let summary = self.last_summary().ok_or(ExportError::NothingToExport)?;

        export_to_path(path, summary).map_err(|err| {
            warn!(path = %path.display(), error = %err, "Export failed");
            err.into()
        })
    }
}
