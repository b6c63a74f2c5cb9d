//! Request type for the proration command line.
//!
//! A [`CalculationRequest`] holds the raw form inputs, either read from a JSON
//! file or assembled from `calculate` arguments, before they are validated.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ProrationConfig;
use crate::error::{ProrationError, ProrationResult};
use crate::models::{CompensationBasis, DateSpan};

/// Unvalidated inputs for one proration.
///
/// # Example
///
/// ```
/// use salary_proration::cli::CalculationRequest;
/// use salary_proration::config::ProrationConfig;
///
/// let request: CalculationRequest = serde_json::from_str(r#"{
///     "annual_rate": "120000",
///     "hours_per_week": "40",
///     "begin_date": "2024-01-01",
///     "end_date": "2024-01-31"
/// }"#).unwrap();
///
/// let (basis, span) = request.validate(&ProrationConfig::default()).unwrap();
/// assert_eq!(basis.basis_periods, 12);
/// assert_eq!(span.calendar_days(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross annual salary.
    pub annual_rate: Decimal,
    /// Pay periods per year; the configured default when absent.
    #[serde(default)]
    pub basis_periods: Option<u32>,
    /// Hours worked per week.
    pub hours_per_week: Decimal,
    /// First day of the span.
    #[serde(default)]
    pub begin_date: Option<NaiveDate>,
    /// Last day of the span.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl CalculationRequest {
    /// Checks the request and splits it into the calculation inputs.
    ///
    /// # Errors
    ///
    /// - [`ProrationError::MissingDate`] when either date is absent
    /// - [`ProrationError::InvalidSpan`] when the begin date is after the end date
    /// - [`ProrationError::InvalidInput`] for a negative rate or hours, or a
    ///   basis period count the configuration does not allow
    pub fn validate(
        self,
        config: &ProrationConfig,
    ) -> ProrationResult<(CompensationBasis, DateSpan)> {
        let begin = self.begin_date.ok_or_else(|| ProrationError::MissingDate {
            field: "begin_date".to_string(),
        })?;
        let end = self.end_date.ok_or_else(|| ProrationError::MissingDate {
            field: "end_date".to_string(),
        })?;

        let span = DateSpan::new(begin, end);
        if !span.is_ordered() {
            return Err(ProrationError::InvalidSpan { begin, end });
        }

        if self.annual_rate < Decimal::ZERO {
            return Err(ProrationError::InvalidInput {
                field: "annual_rate".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if self.hours_per_week < Decimal::ZERO {
            return Err(ProrationError::InvalidInput {
                field: "hours_per_week".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let basis_periods = self
            .basis_periods
            .unwrap_or(config.basis_periods.default);
        if !config.basis_periods.allowed.contains(&basis_periods) {
            return Err(ProrationError::InvalidInput {
                field: "basis_periods".to_string(),
                message: format!(
                    "{} is not one of {:?}",
                    basis_periods, config.basis_periods.allowed
                ),
            });
        }

        Ok((
            CompensationBasis::new(self.annual_rate, basis_periods, self.hours_per_week),
            span,
        ))
    }
}
