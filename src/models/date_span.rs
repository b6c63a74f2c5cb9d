//! Date span model.
//!
//! This module contains the [`DateSpan`] type: the inclusive begin/end pair a
//! salary is prorated over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive span of calendar dates.
///
/// A span is only meaningful for allocation when `end >= begin`; the request
/// layer enforces that before a span reaches the calculator.
///
/// # Example
///
/// ```
/// use salary_proration::models::DateSpan;
/// use chrono::NaiveDate;
///
/// let span = DateSpan::new(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// );
///
/// assert!(span.is_ordered());
/// assert!(span.contains_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// assert_eq!(span.calendar_days(), 61);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// The first date of the span (inclusive).
    pub begin: NaiveDate,
    /// The last date of the span (inclusive).
    pub end: NaiveDate,
}

impl DateSpan {
    /// Creates a new span. No ordering check is made.
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// Returns true if the end date is on or after the begin date.
    pub fn is_ordered(&self) -> bool {
        self.end >= self.begin
    }

    /// Checks if a given date falls within this span, inclusive of both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_proration::models::DateSpan;
    /// use chrono::NaiveDate;
    ///
    /// let span = DateSpan::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    /// );
    ///
    /// assert!(span.contains_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())); // begin
    /// assert!(span.contains_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())); // end
    /// assert!(!span.contains_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.begin && date <= self.end
    }

    /// Number of calendar days in the span, counting both ends. Zero for a
    /// reversed span.
    pub fn calendar_days(&self) -> i64 {
        if self.is_ordered() {
            (self.end - self.begin).num_days() + 1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_span_is_ordered() {
        let span = DateSpan::new(date(2024, 1, 15), date(2024, 1, 15));
        assert!(span.is_ordered());
        assert_eq!(span.calendar_days(), 1);
    }

    #[test]
    fn test_reversed_span_is_not_ordered() {
        let span = DateSpan::new(date(2024, 2, 1), date(2024, 1, 31));
        assert!(!span.is_ordered());
        assert_eq!(span.calendar_days(), 0);
        assert!(!span.contains_date(date(2024, 1, 31)));
    }

    #[test]
    fn test_calendar_days_across_leap_day() {
        let span = DateSpan::new(date(2024, 2, 1), date(2024, 3, 1));
        assert_eq!(span.calendar_days(), 30);
    }

    #[test]
    fn test_span_serialization() {
        let span = DateSpan::new(date(2024, 1, 15), date(2024, 3, 15));
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"begin":"2024-01-15","end":"2024-03-15"}"#);

        let deserialized: DateSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, span);
    }
}
