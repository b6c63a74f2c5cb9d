//! Calculation logic for the salary proration engine.
//!
//! This module contains business day counting, the monthly salary
//! proration that splits a span into partial and whole periods, the staffing
//! metrics derived from it, and the report that ties them together.

mod business_days;
mod derived_metrics;
mod proration;
mod report;

pub use business_days::{
    first_day_of_month, is_business_day, last_day_of_month, last_day_of_previous_month,
    months_touched, net_work_days,
};
pub use derived_metrics::{
    FULL_TIME_HOURS_PER_WEEK, HOURS_PER_WORK_DAY, calculated_hours_per_week, fte, fte_yearly,
    hourly_rate, percent_time, work_weeks,
};
pub use proration::{ABSENT_BEGIN_ALLOCATION, allocation, monthly_allocation, period_salary};
pub use report::{breakdown_sum, perform_calculation};
