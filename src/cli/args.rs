//! Command line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

/// Prorates a salary over a date span that may cross month boundaries.
#[derive(Debug, Parser)]
#[command(name = "salary-proration")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file (built-in defaults when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One labelled figure per line
    Text,
    /// Rounded calculation result as JSON
    Json,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prorate a salary from command line values
    Calculate {
        /// Gross annual salary
        #[arg(long)]
        annual_rate: Decimal,

        /// Pay periods per year (configured default when omitted)
        #[arg(long)]
        basis_periods: Option<u32>,

        /// Hours worked per week
        #[arg(long)]
        hours_per_week: Decimal,

        /// First day of the span (YYYY-MM-DD)
        #[arg(long)]
        begin: Option<NaiveDate>,

        /// Last day of the span (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Prorate a salary from a JSON request file
    Request {
        /// Path to the request file
        path: PathBuf,
    },

    /// Count business days between two dates, inclusive
    WorkDays {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        begin: NaiveDate,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },
}
