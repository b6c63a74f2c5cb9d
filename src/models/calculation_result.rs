//! Calculation result models for the salary proration engine.
//!
//! This module contains the [`CalculationResult`] type and its associated structures
//! that capture all outputs from a proration: the per-period breakdown, the
//! reported figures, and an audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DisplayConfig;

use super::{CompensationBasis, DateSpan};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use salary_proration::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "period_salary".to_string(),
///     rule_name: "Period Salary".to_string(),
///     formula: "(hours_per_week / 40) * (annual_rate / basis_periods)".to_string(),
///     input: serde_json::json!({"annual_rate": "120000", "basis_periods": 12}),
///     output: serde_json::json!({"period_salary": "10000"}),
///     reasoning: "(40 / 40) * (120000 / 12) = 10000".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The formula the rule evaluates.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate results that are defined but probably not what the
/// caller meant, such as a span with no business days in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use salary_proration::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The prorated portion of one calendar month at the edge of a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPeriod {
    /// First date counted as worked.
    pub from: NaiveDate,
    /// Last date counted as worked.
    pub to: NaiveDate,
    /// Business days counted as worked.
    pub worked_days: i64,
    /// Business days in the reference month window.
    pub total_days: i64,
    /// `period_salary * worked_days / total_days`.
    pub share: Decimal,
}

/// How an allocation was split across the months of a span.
///
/// `total` is always `begin_period.share + whole_periods_salary` plus the
/// end share when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationBreakdown {
    /// Salary for one full pay period, scaled by FTE.
    pub period_salary: Decimal,
    /// Number of calendar months the span touches, inclusive.
    pub period_count: i32,
    /// The partial period at the start of the span.
    pub begin_period: PartialPeriod,
    /// Salary for the whole periods between the partial ones.
    pub whole_periods_salary: Decimal,
    /// The partial period at the end of the span, if the span reaches past
    /// its first month.
    pub end_period: Option<PartialPeriod>,
    /// The allocated amount.
    pub total: Decimal,
    /// Audit steps recorded while building the breakdown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audit_steps: Vec<AuditStep>,
}

/// Every figure reported for a proration, unrounded.
///
/// # Example
///
/// ```
/// use salary_proration::models::SalaryReport;
/// use rust_decimal::Decimal;
///
/// let report = SalaryReport {
///     allocation: Decimal::new(10000, 0),
///     monthly_salary: Decimal::new(10000, 0),
///     percent_time: Decimal::new(100, 0),
///     fte: Decimal::ONE,
///     fte_yearly: Decimal::new(833, 4),
///     work_days: 23,
///     calculated_hours_per_week: Decimal::new(40, 0),
///     hourly_rate: Some(Decimal::new(5435, 2)),
/// };
/// assert_eq!(report.work_days, 23);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// Allocated amount for the span.
    pub allocation: Decimal,
    /// Salary for one full pay period, scaled by FTE.
    pub monthly_salary: Decimal,
    /// Percent of full time.
    pub percent_time: Decimal,
    /// Full-time equivalence based on the week.
    pub fte: Decimal,
    /// Allocation as a fraction of the annual rate.
    pub fte_yearly: Decimal,
    /// Business days in the span.
    pub work_days: i64,
    /// Hours per week as entered.
    pub calculated_hours_per_week: Decimal,
    /// Hourly rate, absent when the span rounds to zero work weeks.
    pub hourly_rate: Option<Decimal>,
}

impl SalaryReport {
    /// Returns a copy rounded for display, half away from zero.
    ///
    /// Money figures use `money_decimals`, FTE yearly and calculated hours use
    /// `ratio_decimals`, percent time uses `percent_decimals`. FTE and work
    /// days are left as they are.
    pub fn rounded(&self, display: &DisplayConfig) -> Self {
        let round = |value: Decimal, places: u32| {
            value
                .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
        };

        Self {
            allocation: round(self.allocation, display.money_decimals),
            monthly_salary: round(self.monthly_salary, display.money_decimals),
            percent_time: round(self.percent_time, display.percent_decimals),
            fte: self.fte,
            fte_yearly: round(self.fte_yearly, display.ratio_decimals),
            work_days: self.work_days,
            calculated_hours_per_week: round(
                self.calculated_hours_per_week,
                display.ratio_decimals,
            ),
            hourly_rate: self
                .hourly_rate
                .map(|rate| round(rate, display.money_decimals)),
        }
    }
}

/// The complete result of a proration.
///
/// Two results for the same inputs differ only in `calculation_id`,
/// `timestamp` and `audit_trace.duration_us`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The compensation inputs.
    pub basis: CompensationBasis,
    /// The prorated span.
    pub span: DateSpan,
    /// How the allocation was split across months.
    pub breakdown: AllocationBreakdown,
    /// The reported figures.
    pub report: SalaryReport,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
