//! Full proration report.
//!
//! This module runs the allocation and every derived metric for one
//! validated span and collects them, with an audit trace, into a
//! [`CalculationResult`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ProrationError, ProrationResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, CompensationBasis, DateSpan,
    SalaryReport,
};

use super::business_days::net_work_days;
use super::derived_metrics::{
    calculated_hours_per_week, fte, fte_yearly, hourly_rate, percent_time, work_weeks,
};
use super::proration::monthly_allocation;

/// Performs the full proration for a compensation basis over a span.
///
/// The span is expected to be ordered; see
/// [`CalculationRequest::validate`](crate::cli::CalculationRequest::validate).
///
/// # Errors
///
/// Returns [`ProrationError::InvalidDivisor`] when `basis_periods` is zero.
/// A span with no business days does not fail: the hourly rate is reported
/// as `None` and a warning is added to the audit trace.
///
/// # Example
///
/// ```
/// use salary_proration::calculation::perform_calculation;
/// use salary_proration::models::{CompensationBasis, DateSpan};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let basis = CompensationBasis::new(Decimal::new(120000, 0), 12, Decimal::new(40, 0));
/// let span = DateSpan::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// );
///
/// let result = perform_calculation(&basis, &span).unwrap();
/// assert_eq!(result.report.allocation, Decimal::new(10000, 0));
/// assert_eq!(result.report.work_days, 23);
/// ```
pub fn perform_calculation(
    basis: &CompensationBasis,
    span: &DateSpan,
) -> ProrationResult<CalculationResult> {
    let start_time = Instant::now();
    let calculation_id = Uuid::new_v4();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let mut breakdown = monthly_allocation(basis, span.begin, span.end)?;
    let mut steps = std::mem::take(&mut breakdown.audit_steps);
    let mut step_number = steps.len() as u32 + 1;

    let work_days = net_work_days(span.begin, span.end);
    let weeks = work_weeks(work_days);
    steps.push(AuditStep {
        step_number,
        rule_id: "work_days".to_string(),
        rule_name: "Business Days In Span".to_string(),
        formula: "net_work_days(begin, end); round(work_days * 8 / 40, 1)".to_string(),
        input: serde_json::json!({
            "begin": span.begin.to_string(),
            "end": span.end.to_string()
        }),
        output: serde_json::json!({
            "work_days": work_days,
            "work_weeks": weeks.to_string()
        }),
        reasoning: format!(
            "{} business days from {} to {} = {} weeks of 40 hours",
            work_days, span.begin, span.end, weeks
        ),
    });
    step_number += 1;

    if work_days == 0 {
        warnings.push(AuditWarning {
            code: "NO_BUSINESS_DAYS".to_string(),
            message: format!(
                "The span {} to {} contains no business days",
                span.begin, span.end
            ),
            severity: "medium".to_string(),
        });
    }

    let fte_yearly = fte_yearly(basis, span.begin, span.end)?;
    if !basis.has_salary() {
        warnings.push(AuditWarning {
            code: "ZERO_ANNUAL_RATE".to_string(),
            message: "No annual rate configured; FTE yearly reported as 0".to_string(),
            severity: "low".to_string(),
        });
    }

    let hourly_rate = match hourly_rate(basis, span.begin, span.end) {
        Ok(rate) => Some(rate),
        Err(ProrationError::InvalidDivisor { divisor, context }) => {
            warn!(
                calculation_id = %calculation_id,
                divisor = %divisor,
                "Hourly rate undefined"
            );
            warnings.push(AuditWarning {
                code: "UNDEFINED_HOURLY_RATE".to_string(),
                message: format!("{} is zero in {}; hourly rate not reported", divisor, context),
                severity: "medium".to_string(),
            });
            None
        }
        Err(err) => return Err(err),
    };

    let report = SalaryReport {
        allocation: breakdown.total,
        monthly_salary: breakdown.period_salary,
        percent_time: percent_time(basis.hours_per_week),
        fte: fte(basis.hours_per_week),
        fte_yearly,
        work_days,
        calculated_hours_per_week: calculated_hours_per_week(basis),
        hourly_rate,
    };

    steps.push(AuditStep {
        step_number,
        rule_id: "derived_metrics".to_string(),
        rule_name: "Derived Metrics".to_string(),
        formula: "fte = hours / 40; fte_yearly = allocation / annual_rate; \
                  hourly_rate = allocation / work_weeks / hours"
            .to_string(),
        input: serde_json::json!({
            "allocation": report.allocation.normalize().to_string(),
            "annual_rate": basis.annual_rate.to_string(),
            "hours_per_week": basis.hours_per_week.to_string(),
            "work_weeks": weeks.to_string()
        }),
        output: serde_json::json!({
            "percent_time": report.percent_time.normalize().to_string(),
            "fte": report.fte.normalize().to_string(),
            "fte_yearly": report.fte_yearly.normalize().to_string(),
            "hourly_rate": report.hourly_rate.map(|r| r.normalize().to_string())
        }),
        reasoning: match report.hourly_rate {
            Some(rate) => format!(
                "{}% time, FTE {}, hourly ${}",
                report.percent_time.normalize(),
                report.fte.normalize(),
                rate.round_dp(2)
            ),
            None => format!(
                "{}% time, FTE {}, hourly rate undefined",
                report.percent_time.normalize(),
                report.fte.normalize()
            ),
        },
    });

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        calculation_id = %calculation_id,
        begin = %span.begin,
        end = %span.end,
        allocation = %report.allocation.round_dp(2),
        work_days,
        warnings = warnings.len(),
        duration_us,
        "Proration completed"
    );

    Ok(CalculationResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        basis: basis.clone(),
        span: *span,
        breakdown,
        report,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

/// Sum of the parts of a breakdown, for cross-checking a reported total.
pub fn breakdown_sum(result: &CalculationResult) -> Decimal {
    let b = &result.breakdown;
    b.begin_period.share
        + b.whole_periods_salary
        + b.end_period.as_ref().map_or(Decimal::ZERO, |p| p.share)
}
