//! Staffing metrics derived from the proration.
//!
//! Percent time, full-time equivalence and the hourly rate are plain formulas
//! over the compensation inputs and the allocated amount.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ProrationError, ProrationResult};
use crate::models::CompensationBasis;

use super::business_days::net_work_days;
use super::proration::allocation;

/// Weekly hours of a full-time employee.
pub const FULL_TIME_HOURS_PER_WEEK: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Hours in one business day.
pub const HOURS_PER_WORK_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Full-time equivalence based on the week: `hours_per_week / 40`.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::fte;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fte(Decimal::new(40, 0)), Decimal::ONE);
/// assert_eq!(fte(Decimal::new(20, 0)), Decimal::new(5, 1));
/// ```
pub fn fte(hours_per_week: Decimal) -> Decimal {
    hours_per_week / FULL_TIME_HOURS_PER_WEEK
}

/// Percent of full time: `(hours_per_week / 40) * 100`.
pub fn percent_time(hours_per_week: Decimal) -> Decimal {
    fte(hours_per_week) * Decimal::ONE_HUNDRED
}

/// Full-time equivalence based on the year: the allocation over the span as
/// a fraction of the annual rate.
///
/// An annual rate of zero yields zero without computing the allocation.
///
/// # Errors
///
/// Propagates [`ProrationError::InvalidDivisor`] from the allocation.
pub fn fte_yearly(
    basis: &CompensationBasis,
    begin: NaiveDate,
    end: NaiveDate,
) -> ProrationResult<Decimal> {
    if !basis.has_salary() {
        return Ok(Decimal::ZERO);
    }

    Ok(allocation(basis, Some(begin), end)? / basis.annual_rate)
}

/// Business days expressed as 40-hour weeks, rounded half away from zero to
/// one decimal place.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::work_weeks;
/// use rust_decimal::Decimal;
///
/// assert_eq!(work_weeks(23), Decimal::new(46, 1));
/// ```
pub fn work_weeks(work_days: i64) -> Decimal {
    (Decimal::from(work_days) * HOURS_PER_WORK_DAY / FULL_TIME_HOURS_PER_WEEK)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Hourly rate implied by the allocation over the span.
///
/// `allocation / work_weeks(net_work_days(begin, end)) / hours_per_week`.
/// The work weeks are rounded to one decimal place before they divide.
/// Zero hours per week yields zero without computing the allocation.
///
/// # Errors
///
/// Returns [`ProrationError::InvalidDivisor`] when the span rounds to zero
/// work weeks, and propagates errors from the allocation.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::hourly_rate;
/// use salary_proration::models::CompensationBasis;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let basis = CompensationBasis::new(Decimal::new(120000, 0), 12, Decimal::new(40, 0));
/// let begin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
///
/// // $10000 over 4.6 weeks of 40 hours
/// let rate = hourly_rate(&basis, begin, end).unwrap();
/// assert_eq!(rate.round_dp(2), Decimal::new(5435, 2));
/// ```
pub fn hourly_rate(
    basis: &CompensationBasis,
    begin: NaiveDate,
    end: NaiveDate,
) -> ProrationResult<Decimal> {
    if basis.hours_per_week.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let allocated = allocation(basis, Some(begin), end)?;
    let weeks = work_weeks(net_work_days(begin, end));

    if weeks.is_zero() {
        return Err(ProrationError::InvalidDivisor {
            divisor: "work_weeks".to_string(),
            context: "hourly rate".to_string(),
        });
    }

    Ok(allocated / weeks / basis.hours_per_week)
}

/// Hours per week as reported alongside the rate. Echoes the input.
pub fn calculated_hours_per_week(basis: &CompensationBasis) -> Decimal {
    basis.hours_per_week
}
