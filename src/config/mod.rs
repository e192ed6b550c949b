//! Configuration loading and management for the payroll calculator.
//!
//! This module provides functionality to load the calculator rules from YAML
//! files: the wage floor, the weekly overtime threshold and tiers, and the
//! currency symbol used for display. [`CalculatorRules::default`] carries the
//! same values as the shipped `config/standard` directory.
//!
//! # Example
//!
//! ```no_run
//! use payroll_calc::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded rules: {}", config.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorConfig, CalculatorMetadata, CalculatorRules, DEFAULT_CURRENCY_SYMBOL,
    DEFAULT_STANDARD_WEEKLY_HOURS, DEFAULT_TIER_1_BAND_HOURS, DEFAULT_TIER_1_MULTIPLIER,
    DEFAULT_TIER_2_MULTIPLIER, DEFAULT_WAGE_FLOOR, OvertimeBand, OvertimeConfig, OvertimeRate,
};
