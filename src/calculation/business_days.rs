//! Business day counting and month boundary helpers.
//!
//! This module counts working days (Monday to Friday) between two calendar
//! dates with a closed-form weekly formula, and provides the calendar
//! month boundaries the proration splits a span on.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Day-of-week index of Sunday when days are numbered from Sunday.
const SUNDAY: i64 = 0;

/// Day-of-week index of Saturday when days are numbered from Sunday.
const SATURDAY: i64 = 6;

/// Returns true for Monday through Friday.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::is_business_day;
/// use chrono::NaiveDate;
///
/// // 2024-01-15 is a Monday, 2024-01-13 a Saturday
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()));
/// ```
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the business days from `start` to `end`, both inclusive.
///
/// The count is computed in closed form rather than by walking the span:
///
/// 1. A reversed span (`end < start`) counts as zero.
/// 2. The inclusive number of calendar days is taken.
/// 3. Two weekend days are removed for every whole week.
/// 4. The remainder is corrected from the start and end weekdays (numbered
///    0 = Sunday to 6 = Saturday): a remainder that wraps through a weekend
///    loses two more days, a leading Sunday loses one, a trailing Saturday
///    loses one.
///
/// # Arguments
///
/// * `start` - The first date of the span
/// * `end` - The last date of the span
///
/// # Returns
///
/// The number of weekdays in the span. Zero for a reversed span or a span
/// that lies entirely within a weekend.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::net_work_days;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2024, 1, 19).unwrap();
/// assert_eq!(net_work_days(monday, friday), 5);
/// assert_eq!(net_work_days(friday, monday), 0);
/// ```
pub fn net_work_days(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return 0;
    }

    let mut days = (end - start).num_days() + 1;

    let weeks = days / 7;
    days -= weeks * 2;

    let start_day = i64::from(start.weekday().num_days_from_sunday());
    let end_day = i64::from(end.weekday().num_days_from_sunday());

    if start_day - end_day > 1 {
        days -= 2;
    }

    if start_day == SUNDAY && end_day != SATURDAY {
        days -= 1;
    }

    if end_day == SATURDAY && start_day != SUNDAY {
        days -= 1;
    }

    days
}

/// Returns the first day of the month `date` falls in.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Returns the last day of the month `date` falls in.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::last_day_of_month;
/// use chrono::NaiveDate;
///
/// let leap = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(last_day_of_month(leap), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) + Months::new(1) - Days::new(1)
}

/// Returns the last day of the month before the one `date` falls in.
pub fn last_day_of_previous_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) - Days::new(1)
}

/// Number of calendar months the span from `begin` to `end` touches,
/// counting both the first and the last month.
///
/// Zero or negative when `end` falls in an earlier month than `begin`.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::months_touched;
/// use chrono::NaiveDate;
///
/// let begin = NaiveDate::from_ymd_opt(2023, 11, 20).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
/// assert_eq!(months_touched(begin, end), 4);
/// ```
pub fn months_touched(begin: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - begin.year()) * 12 - begin.month0() as i32 + 1 + end.month0() as i32
}
