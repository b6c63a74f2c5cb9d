//! Configuration types for the proration engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::{Deserialize, Serialize};

/// Pay period counts a request may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasisPeriodsConfig {
    /// Accepted numbers of pay periods per year.
    pub allowed: Vec<u32>,
    /// Used when a request does not name one.
    pub default: u32,
}

impl Default for BasisPeriodsConfig {
    fn default() -> Self {
        Self {
            allowed: vec![12, 24, 26],
            default: 12,
        }
    }
}

/// Decimal places used when figures are displayed.
///
/// Only the output layer rounds; calculations always run unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Places for allocation, monthly salary and hourly rate.
    pub money_decimals: u32,
    /// Places for FTE yearly and calculated hours per week.
    pub ratio_decimals: u32,
    /// Places for percent time.
    pub percent_decimals: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            money_decimals: 2,
            ratio_decimals: 4,
            percent_decimals: 0,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// The complete configuration loaded from YAML.
///
/// # Example
///
/// ```
/// use salary_proration::config::ProrationConfig;
///
/// let config = ProrationConfig::default();
/// assert_eq!(config.basis_periods.allowed, vec![12, 24, 26]);
/// assert_eq!(config.display.money_decimals, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProrationConfig {
    /// Pay period counts.
    #[serde(default)]
    pub basis_periods: BasisPeriodsConfig,
    /// Display rounding.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}
