//! Compensation basis model.
//!
//! This module defines the [`CompensationBasis`] struct grouping the three
//! numeric inputs every proration needs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The compensation inputs for a proration: an annual rate split into a number
/// of pay periods, scaled by weekly hours.
///
/// # Example
///
/// ```
/// use salary_proration::models::CompensationBasis;
/// use rust_decimal::Decimal;
///
/// let basis = CompensationBasis::new(Decimal::new(120000, 0), 12, Decimal::new(40, 0));
/// assert_eq!(basis.basis_periods, 12);
/// assert!(basis.has_salary());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBasis {
    /// The annual rate. Zero means no salary is configured.
    pub annual_rate: Decimal,
    /// The number of pay periods per year (e.g. 12, 24, 26).
    pub basis_periods: u32,
    /// Hours worked per week; 40 is full time.
    pub hours_per_week: Decimal,
}

impl CompensationBasis {
    /// Creates a new compensation basis.
    pub fn new(annual_rate: Decimal, basis_periods: u32, hours_per_week: Decimal) -> Self {
        Self {
            annual_rate,
            basis_periods,
            hours_per_week,
        }
    }

    /// Returns true if an annual rate other than zero is configured.
    pub fn has_salary(&self) -> bool {
        !self.annual_rate.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_annual_rate_has_no_salary() {
        let basis = CompensationBasis::new(Decimal::ZERO, 12, dec("40"));
        assert!(!basis.has_salary());
    }

    #[test]
    fn test_deserialize_basis_with_string_decimals() {
        let json = r#"{
            "annual_rate": "85000.50",
            "basis_periods": 26,
            "hours_per_week": "37.5"
        }"#;

        let basis: CompensationBasis = serde_json::from_str(json).unwrap();
        assert_eq!(basis.annual_rate, dec("85000.50"));
        assert_eq!(basis.basis_periods, 26);
        assert_eq!(basis.hours_per_week, dec("37.5"));
    }

    #[test]
    fn test_serialize_basis_keeps_decimal_precision() {
        let basis = CompensationBasis::new(dec("120000.00"), 12, dec("20"));
        let json = serde_json::to_string(&basis).unwrap();
        assert!(json.contains("\"annual_rate\":\"120000.00\""));
        assert!(json.contains("\"basis_periods\":12"));
    }
}
