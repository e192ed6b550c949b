//! Configuration types for the payroll calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the flattened
//! [`CalculatorRules`] the calculation functions work from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Legal minimum hourly wage accepted by the input form (9.56).
pub const DEFAULT_WAGE_FLOOR: Decimal = Decimal::from_parts(956, 0, 0, false, 2);

/// Weekly hours paid at the base rate before overtime starts (40).
pub const DEFAULT_STANDARD_WEEKLY_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Width of the first overtime band in hours (8, i.e. hours 40 to 48).
pub const DEFAULT_TIER_1_BAND_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Multiplier applied to the first overtime band (1.25).
pub const DEFAULT_TIER_1_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Multiplier applied to hours beyond the first overtime band (1.5).
pub const DEFAULT_TIER_2_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Currency symbol used when rendering amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Metadata about the calculator, read from `calculator.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorMetadata {
    /// The human-readable name of the calculator.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// Currency symbol shown next to monetary columns.
    pub currency_symbol: String,
    /// Minimum hourly rate accepted by the input form.
    pub wage_floor: Decimal,
}

/// The first overtime band.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeBand {
    /// Number of hours in this band.
    pub band_hours: Decimal,
    /// Multiplier applied to the base rate for hours in this band.
    pub multiplier: Decimal,
}

/// The open-ended overtime tier after the first band.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeRate {
    /// Multiplier applied to the base rate.
    pub multiplier: Decimal,
}

/// Overtime configuration from `overtime.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeConfig {
    /// Weekly hours paid at the base rate.
    pub standard_weekly_hours: Decimal,
    /// First overtime band.
    pub tier_1: OvertimeBand,
    /// Overtime beyond the first band.
    pub tier_2: OvertimeRate,
}

/// The flattened rule set used by the calculation functions.
///
/// # Example
///
/// ```
/// use payroll_calc::config::CalculatorRules;
/// use rust_decimal::Decimal;
///
/// let rules = CalculatorRules::default();
/// assert_eq!(rules.standard_weekly_hours, Decimal::from(40));
/// assert_eq!(rules.tier_2_threshold(), Decimal::from(48));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorRules {
    /// Minimum hourly rate accepted by the input form.
    pub wage_floor: Decimal,
    /// Weekly hours paid at the base rate.
    pub standard_weekly_hours: Decimal,
    /// Width of the first overtime band in hours.
    pub tier_1_band_hours: Decimal,
    /// Multiplier for the first overtime band.
    pub tier_1_multiplier: Decimal,
    /// Multiplier for hours past the first band.
    pub tier_2_multiplier: Decimal,
    /// Currency symbol used for display.
    pub currency_symbol: String,
}

impl CalculatorRules {
    /// Weekly hours after which the second overtime tier applies.
    pub fn tier_2_threshold(&self) -> Decimal {
        self.standard_weekly_hours + self.tier_1_band_hours
    }
}

impl Default for CalculatorRules {
    fn default() -> Self {
        Self {
            wage_floor: DEFAULT_WAGE_FLOOR,
            standard_weekly_hours: DEFAULT_STANDARD_WEEKLY_HOURS,
            tier_1_band_hours: DEFAULT_TIER_1_BAND_HOURS,
            tier_1_multiplier: DEFAULT_TIER_1_MULTIPLIER,
            tier_2_multiplier: DEFAULT_TIER_2_MULTIPLIER,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    metadata: CalculatorMetadata,
    overtime: OvertimeConfig,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(metadata: CalculatorMetadata, overtime: OvertimeConfig) -> Self {
        Self { metadata, overtime }
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.metadata
    }

    /// Returns the overtime configuration.
    pub fn overtime(&self) -> &OvertimeConfig {
        &self.overtime
    }

    /// Flattens the configuration into the rules used by the calculation.
    pub fn rules(&self) -> CalculatorRules {
        CalculatorRules {
            wage_floor: self.metadata.wage_floor,
            standard_weekly_hours: self.overtime.standard_weekly_hours,
            tier_1_band_hours: self.overtime.tier_1.band_hours,
            tier_1_multiplier: self.overtime.tier_1.multiplier,
            tier_2_multiplier: self.overtime.tier_2.multiplier,
            currency_symbol: self.metadata.currency_symbol.clone(),
        }
    }
}
