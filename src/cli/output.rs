//! Rendering of command results for stdout.
//!
//! Figures are rounded here and nowhere else; the calculation layer hands
//! over exact values.

use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::config::DisplayConfig;
use crate::models::CalculationResult;

use super::args::OutputFormat;

const LABEL_WIDTH: usize = 28;

/// What a command produced, before formatting.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A full proration.
    Calculation(Box<CalculationResult>),
    /// A business day count.
    WorkDays(WorkDayCount),
}

/// Business days between two dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDayCount {
    /// First day counted.
    pub begin: NaiveDate,
    /// Last day counted.
    pub end: NaiveDate,
    /// Weekdays in between, inclusive.
    pub work_days: i64,
}

impl Outcome {
    /// Formats the outcome, rounding figures per `display`.
    pub fn render(
        &self,
        format: OutputFormat,
        display: &DisplayConfig,
    ) -> serde_json::Result<String> {
        match (self, format) {
            (Outcome::Calculation(result), OutputFormat::Text) => {
                Ok(render_calculation_text(result, display))
            }
            (Outcome::Calculation(result), OutputFormat::Json) => {
                serde_json::to_string_pretty(&rounded_result(result, display))
            }
            (Outcome::WorkDays(count), OutputFormat::Text) => Ok(format!(
                "{:<width$}{}\n",
                "Number of work days:",
                count.work_days,
                width = LABEL_WIDTH
            )),
            (Outcome::WorkDays(count), OutputFormat::Json) => serde_json::to_string_pretty(count),
        }
    }
}

/// A copy of `result` whose report is rounded for display.
///
/// The breakdown keeps its exact shares so the audit can be re-checked.
pub fn rounded_result(result: &CalculationResult, display: &DisplayConfig) -> CalculationResult {
    let mut rounded = result.clone();
    rounded.report = result.report.rounded(display);
    rounded
}

fn money(value: Decimal, display: &DisplayConfig) -> String {
    let places = display.money_decimals;
    let value = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, value)
}

fn render_calculation_text(result: &CalculationResult, display: &DisplayConfig) -> String {
    let report = result.report.rounded(display);
    let mut out = String::new();

    let mut line = |label: &str, value: String| {
        let _ = writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH);
    };

    line("Allocation:", money(report.allocation, display));
    line("Monthly salary:", money(report.monthly_salary, display));
    line("Percent time:", report.percent_time.to_string());
    line("FTE:", report.fte.normalize().to_string());
    line("FTE yearly:", report.fte_yearly.to_string());
    line("Number of work days:", report.work_days.to_string());
    line(
        "Calculated hours per week:",
        report.calculated_hours_per_week.to_string(),
    );
    line(
        "Hourly rate:",
        report
            .hourly_rate
            .map_or_else(|| "undefined".to_string(), |rate| money(rate, display)),
    );

    for warning in &result.audit_trace.warnings {
        let _ = writeln!(out, "warning [{}]: {}", warning.code, warning.message);
    }

    out
}
