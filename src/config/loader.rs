//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the proration
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ProrationError, ProrationResult};

use super::types::{DisplayConfig, LoggingConfig, ProrationConfig};

/// Loads and provides access to the proration configuration.
///
/// # File Structure
///
/// ```text
/// basis_periods:
///   allowed: [12, 24, 26]
///   default: 12
/// display:
///   money_decimals: 2
///   ratio_decimals: 4
///   percent_decimals: 0
/// logging:
///   filter: info
///   format: text
/// ```
///
/// Every section is optional and falls back to [`ProrationConfig::default`].
///
/// # Example
///
/// ```no_run
/// use salary_proration::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/proration.yaml").unwrap();
/// assert!(loader.is_allowed_basis(12));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ProrationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for [`ProrationConfig`] (`ConfigParseError`)
    /// - The values are inconsistent (`InvalidConfig`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_proration::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/proration.yaml")?;
    /// # Ok::<(), salary_proration::error::ProrationError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ProrationResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ProrationError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ProrationConfig =
            serde_yaml::from_str(&content).map_err(|e| ProrationError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: ProrationConfig) -> ProrationResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &ProrationConfig) -> ProrationResult<()> {
        let periods = &config.basis_periods;

        if periods.allowed.is_empty() {
            return Err(ProrationError::InvalidConfig {
                message: "basis_periods.allowed must not be empty".to_string(),
            });
        }

        if periods.allowed.contains(&0) {
            return Err(ProrationError::InvalidConfig {
                message: "basis_periods.allowed must not contain 0".to_string(),
            });
        }

        if !periods.allowed.contains(&periods.default) {
            return Err(ProrationError::InvalidConfig {
                message: format!(
                    "default basis periods {} is not in allowed {:?}",
                    periods.default, periods.allowed
                ),
            });
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ProrationConfig {
        &self.config
    }

    /// Returns true if `periods` is an accepted number of pay periods.
    pub fn is_allowed_basis(&self, periods: u32) -> bool {
        self.config.basis_periods.allowed.contains(&periods)
    }

    /// The number of pay periods used when a request names none.
    pub fn default_basis_periods(&self) -> u32 {
        self.config.basis_periods.default
    }

    /// Returns the display rounding configuration.
    pub fn display(&self) -> &DisplayConfig {
        &self.config.display
    }

    /// Returns the logging configuration.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }
}
