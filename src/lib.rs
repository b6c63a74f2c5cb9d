//! Salary proration engine
//!
//! This crate prorates a periodic salary over a date span that may cross
//! calendar month boundaries. Each month's share is weighted by the business
//! days (Monday to Friday) the span covers in that month. From the allocated
//! amount it derives percent time, full-time equivalence and an hourly rate.
//!
//! # Example
//!
//! ```
//! use salary_proration::calculation::monthly_allocation;
//! use salary_proration::models::CompensationBasis;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let basis = CompensationBasis::new(Decimal::new(120000, 0), 12, Decimal::new(40, 0));
//! let begin = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//!
//! let breakdown = monthly_allocation(&basis, begin, end).unwrap();
//! assert_eq!(breakdown.period_count, 3);
//! assert_eq!(breakdown.total.round_dp(2), Decimal::new(2110672, 2));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
