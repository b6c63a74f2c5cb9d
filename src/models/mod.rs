//! Core data models for the salary proration engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod compensation;
mod date_span;

pub use calculation_result::{
    AllocationBreakdown, AuditStep, AuditTrace, AuditWarning, CalculationResult, PartialPeriod,
    SalaryReport,
};
pub use compensation::CompensationBasis;
pub use date_span::DateSpan;
