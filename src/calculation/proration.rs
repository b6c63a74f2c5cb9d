//! Monthly salary proration.
//!
//! This module splits a date span into a partial first month, whole middle
//! months and a partial last month, and weights each partial month by the
//! share of its business days the span covers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{ProrationError, ProrationResult};
use crate::models::{AllocationBreakdown, AuditStep, CompensationBasis, PartialPeriod};

use super::business_days::{
    first_day_of_month, last_day_of_month, last_day_of_previous_month, months_touched,
    net_work_days,
};
use super::derived_metrics::fte;

/// The allocation returned when no begin date is set.
///
/// This is a fixed marker, not a prorated amount. Callers that reach it
/// have skipped date validation.
pub const ABSENT_BEGIN_ALLOCATION: Decimal = Decimal::ONE;

/// Salary for one full pay period, scaled by full-time equivalence.
///
/// `(hours_per_week / 40) * (annual_rate / basis_periods)`
///
/// # Errors
///
/// Returns [`ProrationError::InvalidDivisor`] when `basis_periods` is zero.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::period_salary;
/// use salary_proration::models::CompensationBasis;
/// use rust_decimal::Decimal;
///
/// let half_time = CompensationBasis::new(Decimal::new(120000, 0), 12, Decimal::new(20, 0));
/// assert_eq!(period_salary(&half_time).unwrap(), Decimal::new(5000, 0));
/// ```
pub fn period_salary(basis: &CompensationBasis) -> ProrationResult<Decimal> {
    if basis.basis_periods == 0 {
        return Err(ProrationError::InvalidDivisor {
            divisor: "basis_periods".to_string(),
            context: "period salary".to_string(),
        });
    }

    Ok(fte(basis.hours_per_week) * (basis.annual_rate / Decimal::from(basis.basis_periods)))
}

/// Prorates `period_salary` by the business days from `from` to `to` out of
/// those in the `window_start..=window_end` reference window.
fn prorate(
    period_salary: Decimal,
    from: NaiveDate,
    to: NaiveDate,
    window_start: NaiveDate,
    window_end: NaiveDate,
    context: &str,
) -> ProrationResult<PartialPeriod> {
    let worked_days = net_work_days(from, to);
    let total_days = net_work_days(window_start, window_end);

    if total_days == 0 {
        return Err(ProrationError::InvalidDivisor {
            divisor: "total_days".to_string(),
            context: context.to_string(),
        });
    }

    let share = period_salary * Decimal::from(worked_days) / Decimal::from(total_days);

    debug!(
        context,
        %from,
        %to,
        worked_days,
        total_days,
        share = %share,
        "Prorated partial period"
    );

    Ok(PartialPeriod {
        from,
        to,
        worked_days,
        total_days,
        share,
    })
}

fn partial_period_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    period_salary: Decimal,
    period: &PartialPeriod,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        formula: "period_salary * worked_days / total_days".to_string(),
        input: serde_json::json!({
            "period_salary": period_salary.normalize().to_string(),
            "from": period.from.to_string(),
            "to": period.to.to_string(),
            "worked_days": period.worked_days,
            "total_days": period.total_days
        }),
        output: serde_json::json!({
            "share": period.share.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {}/{} business days = ${}",
            period_salary.normalize(),
            period.worked_days,
            period.total_days,
            period.share.round_dp(2)
        ),
    }
}

/// Allocates a salary over the span from `begin` to `end`.
///
/// The span is split on calendar months:
///
/// - **Begin partial period**: the period salary weighted by the business
///   days from `begin` to the end of its month, out of the business days in
///   that whole month.
/// - **Whole periods**: when the span touches `n >= 2` months, `n - 2` full
///   period salaries.
/// - **End partial period**: when the span touches `n >= 2` months, the
///   period salary weighted by the business days from the last day of the
///   month before `end` through `end`, out of those from that same day to
///   the end of `end`'s month.
///
/// A span inside a single month gets the begin share alone, measured to the
/// end of the month rather than to `end`.
///
/// # Errors
///
/// Returns [`ProrationError::InvalidDivisor`] when `basis_periods` is zero.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::monthly_allocation;
/// use salary_proration::models::CompensationBasis;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let basis = CompensationBasis::new(Decimal::new(120000, 0), 12, Decimal::new(40, 0));
/// let begin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
///
/// let breakdown = monthly_allocation(&basis, begin, end).unwrap();
/// assert_eq!(breakdown.period_count, 1);
/// assert_eq!(breakdown.total, Decimal::new(10000, 0));
/// assert!(breakdown.end_period.is_none());
/// ```
pub fn monthly_allocation(
    basis: &CompensationBasis,
    begin: NaiveDate,
    end: NaiveDate,
) -> ProrationResult<AllocationBreakdown> {
    let period_salary = period_salary(basis)?;
    let mut audit_steps = vec![AuditStep {
        step_number: 1,
        rule_id: "period_salary".to_string(),
        rule_name: "Period Salary".to_string(),
        formula: "(hours_per_week / 40) * (annual_rate / basis_periods)".to_string(),
        input: serde_json::json!({
            "annual_rate": basis.annual_rate.to_string(),
            "basis_periods": basis.basis_periods,
            "hours_per_week": basis.hours_per_week.to_string()
        }),
        output: serde_json::json!({
            "period_salary": period_salary.normalize().to_string()
        }),
        reasoning: format!(
            "({} / 40) x (${} / {}) = ${}",
            basis.hours_per_week.normalize(),
            basis.annual_rate.normalize(),
            basis.basis_periods,
            period_salary.round_dp(2)
        ),
    }];

    let begin_month_end = last_day_of_month(begin);
    let begin_period = prorate(
        period_salary,
        begin,
        begin_month_end,
        first_day_of_month(begin),
        begin_month_end,
        "begin partial period",
    )?;
    audit_steps.push(partial_period_step(
        2,
        "begin_partial_period",
        "Begin Partial Period",
        period_salary,
        &begin_period,
    ));

    let period_count = months_touched(begin, end);
    let mut whole_periods_salary = Decimal::ZERO;
    let mut end_period = None;

    if period_count - 2 >= 0 {
        whole_periods_salary = Decimal::from(period_count - 2) * period_salary;
        audit_steps.push(AuditStep {
            step_number: 3,
            rule_id: "whole_periods".to_string(),
            rule_name: "Whole Periods".to_string(),
            formula: "(period_count - 2) * period_salary".to_string(),
            input: serde_json::json!({
                "period_count": period_count,
                "period_salary": period_salary.normalize().to_string()
            }),
            output: serde_json::json!({
                "whole_periods_salary": whole_periods_salary.normalize().to_string()
            }),
            reasoning: format!(
                "{} months touched, {} whole periods x ${} = ${}",
                period_count,
                period_count - 2,
                period_salary.round_dp(2),
                whole_periods_salary.round_dp(2)
            ),
        });

        let boundary = last_day_of_previous_month(end);
        let period = prorate(
            period_salary,
            boundary,
            end,
            boundary,
            last_day_of_month(end),
            "end partial period",
        )?;
        audit_steps.push(partial_period_step(
            4,
            "end_partial_period",
            "End Partial Period",
            period_salary,
            &period,
        ));
        end_period = Some(period);
    }

    let end_share = end_period.as_ref().map_or(Decimal::ZERO, |p| p.share);
    let total = begin_period.share + whole_periods_salary + end_share;

    audit_steps.push(AuditStep {
        step_number: audit_steps.len() as u32 + 1,
        rule_id: "allocation_total".to_string(),
        rule_name: "Allocation Total".to_string(),
        formula: "begin_share + whole_periods_salary + end_share".to_string(),
        input: serde_json::json!({
            "begin_share": begin_period.share.normalize().to_string(),
            "whole_periods_salary": whole_periods_salary.normalize().to_string(),
            "end_share": end_share.normalize().to_string()
        }),
        output: serde_json::json!({
            "allocation": total.normalize().to_string()
        }),
        reasoning: format!(
            "${} + ${} + ${} = ${}",
            begin_period.share.round_dp(2),
            whole_periods_salary.round_dp(2),
            end_share.round_dp(2),
            total.round_dp(2)
        ),
    });

    debug!(
        %begin,
        %end,
        period_count,
        total = %total,
        "Computed monthly allocation"
    );

    Ok(AllocationBreakdown {
        period_salary,
        period_count,
        begin_period,
        whole_periods_salary,
        end_period,
        total,
        audit_steps,
    })
}

/// Allocated amount for a span whose begin date may be unset.
///
/// With no begin date this returns [`ABSENT_BEGIN_ALLOCATION`] without
/// prorating anything; otherwise it returns the total of
/// [`monthly_allocation`].
///
/// # Example
///
/// ```
/// use salary_proration::calculation::{allocation, ABSENT_BEGIN_ALLOCATION};
/// use salary_proration::models::CompensationBasis;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let basis = CompensationBasis::new(Decimal::new(120000, 0), 12, Decimal::new(40, 0));
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(allocation(&basis, None, end).unwrap(), ABSENT_BEGIN_ALLOCATION);
/// ```
pub fn allocation(
    basis: &CompensationBasis,
    begin: Option<NaiveDate>,
    end: NaiveDate,
) -> ProrationResult<Decimal> {
    match begin {
        Some(begin) => Ok(monthly_allocation(basis, begin, end)?.total),
        None => {
            warn!(%end, "No begin date set, returning fixed allocation");
            Ok(ABSENT_BEGIN_ALLOCATION)
        }
    }
}
