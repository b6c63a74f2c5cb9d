//! Integration tests for the salary proration engine.
//!
//! This test suite drives the library the way the command line does:
//! - JSON requests through validation into a full calculation
//! - Spans inside one month, across two months and across several
//! - Pay period counts other than monthly
//! - Degenerate inputs (weekend spans, zero rate, zero hours)
//! - Rendering of rounded output
//! - Configuration loading
//! - Error cases

use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use salary_proration::calculation::{breakdown_sum, perform_calculation};
use salary_proration::cli::{
    CalculationRequest, Commands, Outcome, OutputFormat, execute, rounded_result,
};
use salary_proration::config::{ConfigLoader, ProrationConfig};
use salary_proration::error::ProrationError;
use salary_proration::models::CalculationResult;

// =============================================================================
// Test Helpers
// =============================================================================

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/proration.yaml").expect("Failed to load config")
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn request(body: Value) -> CalculationRequest {
    serde_json::from_value(body).expect("request should deserialize")
}

fn calculate(body: Value) -> CalculationResult {
    let config = load_config();
    let (basis, span) = request(body)
        .validate(config.config())
        .expect("request should validate");
    perform_calculation(&basis, &span).expect("calculation should succeed")
}

fn rounded(body: Value) -> CalculationResult {
    let config = load_config();
    rounded_result(&calculate(body), config.display())
}

fn full_time(begin: &str, end: &str) -> Value {
    json!({
        "annual_rate": "120000",
        "basis_periods": 12,
        "hours_per_week": "40",
        "begin_date": begin,
        "end_date": end
    })
}

// =============================================================================
// Single Month Spans
// =============================================================================

#[test]
fn test_full_month_full_time() {
    let result = rounded(full_time("2024-01-01", "2024-01-31"));

    assert_eq!(result.report.allocation, decimal("10000"));
    assert_eq!(result.report.monthly_salary, decimal("10000"));
    assert_eq!(result.report.percent_time, decimal("100"));
    assert_eq!(result.report.fte, decimal("1"));
    assert_eq!(result.report.fte_yearly, decimal("0.0833"));
    assert_eq!(result.report.work_days, 23);
    assert_eq!(result.report.calculated_hours_per_week, decimal("40"));
    assert_eq!(result.report.hourly_rate, Some(decimal("54.35")));
}

#[test]
fn test_full_month_half_time() {
    let result = rounded(json!({
        "annual_rate": "120000",
        "basis_periods": 12,
        "hours_per_week": "20",
        "begin_date": "2024-01-01",
        "end_date": "2024-01-31"
    }));

    assert_eq!(result.report.allocation, decimal("5000"));
    assert_eq!(result.report.percent_time, decimal("50"));
    assert_eq!(result.report.fte, decimal("0.5"));
    assert_eq!(result.report.fte_yearly, decimal("0.0417"));
    assert_eq!(result.report.hourly_rate, Some(decimal("54.35")));
}

#[test]
fn test_mid_month_span_allocates_to_month_end() {
    let result = rounded(json!({
        "annual_rate": 60000,
        "basis_periods": 12,
        "hours_per_week": 20,
        "begin_date": "2024-06-10",
        "end_date": "2024-06-20"
    }));

    // June 10 to June 30 is 15 of June's 20 business days
    assert_eq!(result.breakdown.period_count, 1);
    assert_eq!(result.report.allocation, decimal("1875"));
    assert_eq!(result.report.work_days, 9);
    assert_eq!(result.report.hourly_rate, Some(decimal("52.08")));
    assert!(result.breakdown.end_period.is_none());
}

// =============================================================================
// Multi-Month Spans
// =============================================================================

#[test]
fn test_three_month_span() {
    let result = rounded(full_time("2024-01-15", "2024-03-15"));

    assert_eq!(result.breakdown.period_count, 3);
    assert_eq!(result.breakdown.begin_period.worked_days, 13);
    assert_eq!(result.breakdown.begin_period.total_days, 23);
    assert_eq!(result.breakdown.whole_periods_salary, decimal("10000"));

    let end = result.breakdown.end_period.as_ref().unwrap();
    assert_eq!(end.worked_days, 12);
    assert_eq!(end.total_days, 22);

    assert_eq!(result.report.allocation, decimal("21106.72"));
    assert_eq!(result.report.work_days, 45);
    assert_eq!(result.report.fte_yearly, decimal("0.1759"));
    assert_eq!(result.report.hourly_rate, Some(decimal("58.63")));
}

#[test]
fn test_two_month_span_carries_end_share() {
    let result = rounded(full_time("2024-01-15", "2024-02-10"));

    assert_eq!(result.breakdown.period_count, 2);
    assert_eq!(result.breakdown.whole_periods_salary, Decimal::ZERO);

    // The end share counts from January 31, the last day of the previous month
    let end = result.breakdown.end_period.as_ref().unwrap();
    assert_eq!(end.worked_days, 8);
    assert_eq!(end.total_days, 22);

    assert_eq!(result.report.allocation, decimal("9288.54"));
    assert_eq!(result.report.work_days, 20);
    assert_eq!(result.report.hourly_rate, Some(decimal("58.05")));
}

#[test]
fn test_span_across_year_boundary() {
    let result = rounded(full_time("2023-11-20", "2024-02-14"));

    assert_eq!(result.breakdown.period_count, 4);
    assert_eq!(result.breakdown.whole_periods_salary, decimal("20000"));
    assert_eq!(result.report.allocation, decimal("29090.91"));
    assert_eq!(result.report.work_days, 63);
    assert_eq!(result.report.fte_yearly, decimal("0.2424"));
}

#[test]
fn test_full_year_allocates_annual_rate() {
    let result = calculate(full_time("2024-01-01", "2024-12-31"));

    assert_eq!(result.breakdown.period_count, 12);
    assert_eq!(result.report.allocation, decimal("120000"));
    assert_eq!(result.report.fte_yearly, decimal("1"));
    assert_eq!(result.report.work_days, 262);
}

#[test]
fn test_allocation_equals_sum_of_parts() {
    let result = calculate(full_time("2023-11-20", "2024-02-14"));
    assert_eq!(breakdown_sum(&result), result.report.allocation);
}

// =============================================================================
// Pay Period Counts
// =============================================================================

#[test]
fn test_fortnightly_basis_full_month() {
    let result = rounded(json!({
        "annual_rate": "52000",
        "basis_periods": 26,
        "hours_per_week": "40",
        "begin_date": "2024-01-01",
        "end_date": "2024-01-31"
    }));

    assert_eq!(result.report.monthly_salary, decimal("2000"));
    assert_eq!(result.report.allocation, decimal("2000"));
    assert_eq!(result.report.hourly_rate, Some(decimal("10.87")));
}

#[test]
fn test_semi_monthly_basis_half_year() {
    let result = rounded(json!({
        "annual_rate": "90000",
        "basis_periods": 24,
        "hours_per_week": "30",
        "begin_date": "2024-07-01",
        "end_date": "2024-12-31"
    }));

    assert_eq!(result.report.monthly_salary, decimal("2812.5"));
    assert_eq!(result.report.allocation, decimal("16875"));
    assert_eq!(result.report.percent_time, decimal("75"));
    assert_eq!(result.report.fte_yearly, decimal("0.1875"));
    assert_eq!(result.report.work_days, 132);
    assert_eq!(result.report.hourly_rate, Some(decimal("21.31")));
}

#[test]
fn test_missing_basis_periods_uses_configured_default() {
    let result = calculate(json!({
        "annual_rate": "120000",
        "hours_per_week": "40",
        "begin_date": "2024-01-01",
        "end_date": "2024-01-31"
    }));

    assert_eq!(result.basis.basis_periods, 12);
}

// =============================================================================
// Degenerate Inputs
// =============================================================================

#[test]
fn test_weekend_span_has_no_hourly_rate() {
    let result = rounded(full_time("2024-01-13", "2024-01-14"));

    assert_eq!(result.report.work_days, 0);
    assert_eq!(result.report.hourly_rate, None);

    let codes: Vec<&str> = result
        .audit_trace
        .warnings
        .iter()
        .map(|w| w.code.as_str())
        .collect();
    assert_eq!(codes, vec!["NO_BUSINESS_DAYS", "UNDEFINED_HOURLY_RATE"]);
}

#[test]
fn test_zero_annual_rate() {
    let result = calculate(json!({
        "annual_rate": "0",
        "basis_periods": 12,
        "hours_per_week": "40",
        "begin_date": "2024-01-01",
        "end_date": "2024-01-31"
    }));

    assert_eq!(result.report.allocation, Decimal::ZERO);
    assert_eq!(result.report.fte_yearly, Decimal::ZERO);
    assert_eq!(result.report.hourly_rate, Some(Decimal::ZERO));
}

#[test]
fn test_zero_hours_per_week() {
    let result = calculate(json!({
        "annual_rate": "120000",
        "basis_periods": 12,
        "hours_per_week": "0",
        "begin_date": "2024-01-13",
        "end_date": "2024-01-14"
    }));

    assert_eq!(result.report.allocation, Decimal::ZERO);
    assert_eq!(result.report.fte, Decimal::ZERO);
    assert_eq!(result.report.hourly_rate, Some(Decimal::ZERO));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_missing_dates_rejected() {
    let config = load_config();
    let result = request(json!({
        "annual_rate": "120000",
        "hours_per_week": "40",
        "end_date": "2024-01-31"
    }))
    .validate(config.config());

    let error = result.unwrap_err();
    assert!(matches!(error, ProrationError::MissingDate { .. }));
    assert!(error.to_string().starts_with("Please set both date fields"));
}

#[test]
fn test_reversed_dates_rejected() {
    let config = load_config();
    let result = request(full_time("2024-03-01", "2024-02-01")).validate(config.config());

    let error = result.unwrap_err();
    assert!(matches!(error, ProrationError::InvalidSpan { .. }));
    assert!(error.to_string().starts_with("Invalid dates"));
}

#[test]
fn test_unknown_basis_periods_rejected() {
    let config = load_config();
    let result = request(json!({
        "annual_rate": "120000",
        "basis_periods": 52,
        "hours_per_week": "40",
        "begin_date": "2024-01-01",
        "end_date": "2024-01-31"
    }))
    .validate(config.config());

    assert!(matches!(
        result,
        Err(ProrationError::InvalidInput { ref field, .. }) if field == "basis_periods"
    ));
}

#[test]
fn test_malformed_date_fails_to_deserialize() {
    let result: Result<CalculationRequest, _> = serde_json::from_value(json!({
        "annual_rate": "120000",
        "hours_per_week": "40",
        "begin_date": "2024-02-30",
        "end_date": "2024-03-01"
    }));
    assert!(result.is_err());
}

// =============================================================================
// Command Execution and Rendering
// =============================================================================

#[test]
fn test_execute_and_render_json() {
    let config = load_config();
    let command = Commands::Calculate {
        annual_rate: decimal("120000"),
        basis_periods: None,
        hours_per_week: decimal("40"),
        begin: Some("2024-01-15".parse().unwrap()),
        end: Some("2024-03-15".parse().unwrap()),
    };

    let outcome = execute(&command, config.config()).unwrap();
    let json = outcome.render(OutputFormat::Json, config.display()).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["report"]["allocation"], "21106.72");
    assert_eq!(value["report"]["hourly_rate"], "58.63");
    assert_eq!(value["engine_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["audit_trace"]["steps"].as_array().unwrap().len(), 7);
}

#[test]
fn test_execute_and_render_text() {
    let config = load_config();
    let command = Commands::Calculate {
        annual_rate: decimal("120000"),
        basis_periods: Some(12),
        hours_per_week: decimal("40"),
        begin: Some("2024-01-01".parse().unwrap()),
        end: Some("2024-01-31".parse().unwrap()),
    };

    let text = execute(&command, config.config())
        .unwrap()
        .render(OutputFormat::Text, config.display())
        .unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("Allocation:"));
    assert!(lines[0].ends_with("10000.00"));
    assert!(lines[7].starts_with("Hourly rate:"));
    assert!(lines[7].ends_with("54.35"));
}

#[test]
fn test_execute_work_days() {
    let config = load_config();
    let command = Commands::WorkDays {
        begin: "2024-09-01".parse().unwrap(),
        end: "2024-09-30".parse().unwrap(),
    };

    match execute(&command, config.config()).unwrap() {
        Outcome::WorkDays(count) => assert_eq!(count.work_days, 21),
        other => panic!("Expected work day count, got {:?}", other),
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_shipped_config_matches_defaults() {
    assert_eq!(load_config().config(), &ProrationConfig::default());
}

#[test]
fn test_restricted_config_rejects_monthly_basis() {
    let mut config = ProrationConfig::default();
    config.basis_periods.allowed = vec![26];
    config.basis_periods.default = 26;
    let loader = ConfigLoader::from_config(config).unwrap();

    let result = request(full_time("2024-01-01", "2024-01-31")).validate(loader.config());
    assert!(matches!(result, Err(ProrationError::InvalidInput { .. })));
}
