//! Configuration loading and management for the salary proration engine.
//!
//! This module loads the allowed pay period counts, display rounding and
//! logging settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use salary_proration::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/proration.yaml").unwrap();
//! println!("Default basis periods: {}", config.default_basis_periods());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BasisPeriodsConfig, DisplayConfig, LogFormat, LoggingConfig, ProrationConfig};
