//! Command line front end for the salary proration engine.
//!
//! Parses arguments with `clap`, turns them (or a JSON request file) into a
//! validated [`CompensationBasis`](crate::models::CompensationBasis) and
//! [`DateSpan`](crate::models::DateSpan), runs the calculation and renders
//! the outcome.

mod args;
mod output;
mod request;

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::calculation::{net_work_days, perform_calculation};
use crate::config::ProrationConfig;
use crate::error::{ProrationError, ProrationResult};

pub use args::{Cli, Commands, OutputFormat};
pub use output::{Outcome, WorkDayCount, rounded_result};
pub use request::CalculationRequest;

/// Runs a parsed command against the given configuration.
///
/// # Errors
///
/// Returns the validation error for a rejected request,
/// [`ProrationError::MalformedRequest`] for an unreadable request file, and
/// any error from the calculation itself.
pub fn execute(command: &Commands, config: &ProrationConfig) -> ProrationResult<Outcome> {
    match command {
        Commands::Calculate {
            annual_rate,
            basis_periods,
            hours_per_week,
            begin,
            end,
        } => {
            let request = CalculationRequest {
                annual_rate: *annual_rate,
                basis_periods: *basis_periods,
                hours_per_week: *hours_per_week,
                begin_date: *begin,
                end_date: *end,
            };
            calculate(request, config)
        }
        Commands::Request { path } => {
            let request = read_request(path)?;
            calculate(request, config)
        }
        Commands::WorkDays { begin, end } => {
            let work_days = net_work_days(*begin, *end);
            info!(begin = %begin, end = %end, work_days, "Counted business days");
            Ok(Outcome::WorkDays(WorkDayCount {
                begin: *begin,
                end: *end,
                work_days,
            }))
        }
    }
}

/// Reads a JSON [`CalculationRequest`] from a file.
pub fn read_request(path: &Path) -> ProrationResult<CalculationRequest> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| ProrationError::MalformedRequest {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ProrationError::MalformedRequest {
        path: path_str,
        message: e.to_string(),
    })
}

fn calculate(request: CalculationRequest, config: &ProrationConfig) -> ProrationResult<Outcome> {
    let (basis, span) = request.validate(config).inspect_err(|err| {
        warn!(error = %err, "Rejected calculation request");
    })?;

    let result = perform_calculation(&basis, &span)?;
    Ok(Outcome::Calculation(Box::new(result)))
}
