//! Core data models for the travel subsidy engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod input;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BreakdownRow, CalculationResult, SubsidyStatus,
};
pub use input::{CalculationInput, DATE_FORMAT, SuspensionWindow, parse_optional_date};
