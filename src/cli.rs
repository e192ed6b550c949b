//! Command line interface for the payroll calculator.
//!
//! These structs define the `payroll-calc` arguments, and the functions below
//! run each command and return the text to print.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::config::{CalculatorRules, ConfigLoader};
use crate::error::{EngineResult, ExportError};
use crate::form::FormInput;
use crate::report::{render_breakdown, render_summary};
use crate::session::PayrollSession;

/// payroll-calc: monthly salary, meal and transport cost calculator.
///
/// Computes salary with weekly overtime tiers, meal compensation and a flat
/// transport cost for a date range inside one calendar month, and optionally
/// exports the result as CSV.
#[derive(Debug, Parser, Clone)]
#[command(name = "payroll-calc", version)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    /// Returns the options shared by all commands.
    pub fn common(&self) -> &Common {
        &self.common
    }

    /// Returns the selected command.
    pub fn command(&self) -> &Command {
        &self.command
    }
}

/// Arguments common to all subcommands.
#[derive(Debug, ClapArgs, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace. Ignored when RUST_LOG is set.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// Directory holding calculator.yaml and overtime.yaml. The built-in
    /// rules are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Common {
    /// Returns the requested log level.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Loads the rules from the configuration directory, or returns the
    /// built-in rules when none was given.
    pub fn rules(&self) -> EngineResult<CalculatorRules> {
        match &self.config {
            Some(dir) => Ok(ConfigLoader::load(dir)?.rules()),
            None => Ok(CalculatorRules::default()),
        }
    }
}

/// The `payroll-calc` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Calculate the monthly summary for a date range and optionally export it.
    Calculate(CalculateArgs),
    /// Print the calculator rules in force.
    Rules,
}

/// Args for the `payroll-calc calculate` command.
///
/// Numbers are taken as text so that `,` is accepted as decimal separator.
#[derive(Debug, ClapArgs, Clone)]
pub struct CalculateArgs {
    /// Base hourly wage.
    #[arg(long)]
    hourly_rate: String,

    /// Number of days per week (recorded, not used in the totals).
    #[arg(long, default_value = "5")]
    days_per_week: String,

    /// Hours worked per working day.
    #[arg(long)]
    daily_hours: String,

    /// Meal compensation per working day.
    #[arg(long, default_value = "0")]
    meal: String,

    /// Flat transport cost, applied once.
    #[arg(long, default_value = "0")]
    transport: String,

    /// First day of the range, YYYY-MM-DD.
    #[arg(long)]
    start: String,

    /// Last day of the range, YYYY-MM-DD.
    #[arg(long)]
    end: String,

    /// Also print the per-week breakdown.
    #[arg(long)]
    breakdown: bool,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Write the summary to this CSV file.
    #[arg(long)]
    export: Option<PathBuf>,
}

impl CalculateArgs {
    /// Returns the form fields carried by these arguments.
    pub fn form(&self) -> FormInput {
        FormInput {
            hourly_rate: self.hourly_rate.clone(),
            days_per_week: self.days_per_week.clone(),
            daily_hours: self.daily_hours.clone(),
            meal_compensation: self.meal.clone(),
            transport_cost: self.transport.clone(),
            start_date: self.start.clone(),
            end_date: self.end.clone(),
        }
    }
}

/// Runs the `calculate` command and returns the text to print.
pub fn calculate(args: &CalculateArgs, rules: CalculatorRules) -> EngineResult<String> {
    let mut session = PayrollSession::new(rules);
    let calculation = session.calculate(&args.form())?.clone();
    let symbol = session.rules().currency_symbol.clone();

    let mut out = if args.json {
        let mut json =
            serde_json::to_string_pretty(&calculation).map_err(|e| ExportError::Serialization {
                message: e.to_string(),
            })?;
        json.push('\n');
        json
    } else {
        let mut text = render_summary(&calculation.summary, &symbol);
        if args.breakdown {
            text.push('\n');
            text.push_str(&render_breakdown(&calculation, &symbol));
        }
        text
    };

    if let Some(path) = &args.export {
        let written = session.export(path)?;
        if !args.json {
            out.push_str(&format!("\nData exported to {}\n", written.display()));
        }
    }

    Ok(out)
}

/// Runs the `rules` command and returns the text to print.
pub fn rules(rules: &CalculatorRules) -> String {
    format!(
        "Wage floor:            {} {}\n\
         Standard weekly hours: {}\n\
         Tier 1:                {} hours at {}x\n\
         Tier 2:                beyond {} hours at {}x\n",
        rules.currency_symbol,
        rules.wage_floor,
        rules.standard_weekly_hours,
        rules.tier_1_band_hours,
        rules.tier_1_multiplier,
        rules.tier_2_threshold(),
        rules.tier_2_multiplier
    )
}
