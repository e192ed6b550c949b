//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, CalculatorMetadata, CalculatorRules, OvertimeConfig};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── calculator.yaml  # Name, version, currency symbol, wage floor
/// └── overtime.yaml    # Weekly threshold and overtime tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_calc::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Wage floor: {}", loader.rules().wage_floor);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or describes an overtime scheme that cannot be applied (negative
    /// hours, or a multiplier below 1).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calculator_path = path.join("calculator.yaml");
        let metadata = Self::load_yaml::<CalculatorMetadata>(&calculator_path)?;

        let overtime_path = path.join("overtime.yaml");
        let overtime = Self::load_yaml::<OvertimeConfig>(&overtime_path)?;
        Self::check_overtime(&overtime, &overtime_path)?;

        debug!(
            path = %path.display(),
            name = %metadata.name,
            version = %metadata.version,
            "Loaded calculator configuration"
        );

        Ok(Self {
            config: CalculatorConfig::new(metadata, overtime),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_overtime(overtime: &OvertimeConfig, path: &Path) -> EngineResult<()> {
        let problem = if overtime.standard_weekly_hours < Decimal::ZERO {
            Some("standard_weekly_hours must not be negative")
        } else if overtime.tier_1.band_hours < Decimal::ZERO {
            Some("tier_1.band_hours must not be negative")
        } else if overtime.tier_1.multiplier < Decimal::ONE
            || overtime.tier_2.multiplier < Decimal::ONE
        {
            Some("overtime multipliers must be at least 1")
        } else {
            None
        };

        match problem {
            Some(message) => Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the flattened rules for the calculation.
    pub fn rules(&self) -> CalculatorRules {
        self.config.rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_config(dir: &Path, overtime: &str) {
        fs::write(
            dir.join("calculator.yaml"),
            "name: Test\nversion: \"1\"\ncurrency_symbol: \"$\"\nwage_floor: \"10.00\"\n",
        )
        .unwrap();
        fs::write(dir.join("overtime.yaml"), overtime).unwrap();
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().metadata().name, "Monthly Salary Calculator");
        assert_eq!(loader.config().metadata().currency_symbol, "€");
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.rules(), CalculatorRules::default());
    }

    #[test]
    fn test_wage_floor_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.rules().wage_floor, dec("9.56"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calculator.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "standard_weekly_hours: [not, a, number\n");

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("overtime.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_multiplier_below_one_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "standard_weekly_hours: \"40\"\ntier_1:\n  band_hours: \"8\"\n  multiplier: \"0.5\"\ntier_2:\n  multiplier: \"1.5\"\n",
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert_eq!(message, "overtime multipliers must be at least 1");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_configuration_is_flattened() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "standard_weekly_hours: \"38\"\ntier_1:\n  band_hours: \"2\"\n  multiplier: \"1.5\"\ntier_2:\n  multiplier: \"2\"\n",
        );

        let rules = ConfigLoader::load(dir.path()).unwrap().rules();
        assert_eq!(rules.wage_floor, dec("10.00"));
        assert_eq!(rules.standard_weekly_hours, dec("38"));
        assert_eq!(rules.tier_2_threshold(), dec("40"));
        assert_eq!(rules.currency_symbol, "$");
    }
}
