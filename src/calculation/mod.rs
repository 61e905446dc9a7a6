//! Calculation logic for the travel subsidy engine.
//!
//! This module contains the entitlement rules: anniversary enumeration,
//! seniority tier lookup, project-usage deduction targeting, per-row status
//! resolution, the current-year flag, and the audit trail explaining them.

mod anniversary;
mod audit;
mod current_year;
mod deduction;
mod entitlement;
mod status;
mod tier;

pub use anniversary::{anniversary_date, enumerate_anniversaries};
pub use audit::build_audit_trace;
pub use current_year::current_year_count;
pub use deduction::find_deduction_target;
pub use entitlement::{calculate_entitlement, calculate_subsidy};
pub use status::{StatusResolution, resolve_status};
pub use tier::subsidy_amount_for_seniority;
