//! Error types for the salary proration engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine refuses to compute through.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the salary proration engine.
///
/// Degenerate inputs that have a defined numeric answer (a reversed span,
/// an annual rate of zero, zero hours per week) never produce an error;
/// only inputs that would divide by zero or that the request layer rejects do.
///
/// # Example
///
/// ```
/// use salary_proration::error::ProrationError;
///
/// let error = ProrationError::InvalidDivisor {
///     divisor: "basis_periods".to_string(),
///     context: "period salary".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid divisor 'basis_periods' in period salary: value is zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ProrationError {
    /// A value used as a divisor was zero.
    #[error("Invalid divisor '{divisor}' in {context}: value is zero")]
    InvalidDivisor {
        /// The name of the zero divisor.
        divisor: String,
        /// The calculation the divisor belongs to.
        context: String,
    },

    /// A required date was not supplied.
    #[error("Please set both date fields: '{field}' is missing")]
    MissingDate {
        /// The date field that was missing.
        field: String,
    },

    /// The begin date falls after the end date.
    #[error("Invalid dates: begin {begin} is after end {end}")]
    InvalidSpan {
        /// The requested begin date.
        begin: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// An input value was outside its accepted range.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A calculation request file could not be read or decoded.
    #[error("Failed to read calculation request '{path}': {message}")]
    MalformedRequest {
        /// The path to the request file.
        path: String,
        /// A description of the read or decode error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },
}

/// A type alias for Results that return ProrationError.
pub type ProrationResult<T> = Result<T, ProrationError>;
