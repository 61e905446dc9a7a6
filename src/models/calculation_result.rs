//! Calculation result models for the travel subsidy engine.
//!
//! This module contains the [`CalculationResult`] type and its breakdown
//! rows, plus the audit types that explain how each row was resolved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The outcome for one service anniversary.
///
/// # Example
///
/// ```
/// use travel_subsidy::models::SubsidyStatus;
///
/// let json = serde_json::to_string(&SubsidyStatus::NotEligible).unwrap();
/// assert_eq!(json, "\"NOT_ELIGIBLE\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubsidyStatus {
    /// The subsidy for this year is granted in full.
    Eligible,
    /// The anniversary fell inside the suspension window.
    Suspended,
    /// The year was consumed by a project grant taken during suspension.
    Deducted,
    /// Seniority does not reach any tier.
    NotEligible,
}

impl SubsidyStatus {
    /// Returns true only for [`SubsidyStatus::Eligible`].
    pub fn is_paid(self) -> bool {
        self == SubsidyStatus::Eligible
    }
}

/// One service-year anniversary in the breakdown.
///
/// # Example
///
/// ```
/// use travel_subsidy::models::{BreakdownRow, SubsidyStatus};
/// use chrono::NaiveDate;
///
/// let row = BreakdownRow {
///     year_index: 1,
///     anniversary_date: NaiveDate::from_ymd_opt(2021, 3, 10).unwrap(),
///     seniority_years: 1,
///     theoretical_amount: 10_000,
///     status: SubsidyStatus::Eligible,
///     actual_amount: 10_000,
/// };
/// assert_eq!(row.withheld_amount(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// 1-based anniversary number.
    pub year_index: u32,
    /// Hire date advanced by `year_index` years.
    pub anniversary_date: NaiveDate,
    /// Completed years of service at the anniversary.
    pub seniority_years: u32,
    /// The tier amount before any override.
    pub theoretical_amount: u64,
    /// How the year was resolved.
    pub status: SubsidyStatus,
    /// The amount actually granted.
    pub actual_amount: u64,
}

impl BreakdownRow {
    /// The part of the tier amount that was not granted.
    pub fn withheld_amount(&self) -> u64 {
        self.theoretical_amount - self.actual_amount
    }
}

/// The result of an entitlement calculation.
///
/// `total_amount` is always the sum of `actual_amount` over `breakdown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Sum of all granted amounts.
    pub total_amount: u64,
    /// 1 if the calendar year of the calculation date holds an eligible
    /// anniversary, otherwise 0.
    pub current_year_count: u8,
    /// Anniversary rows, ascending by `year_index`.
    pub breakdown: Vec<BreakdownRow>,
}

impl CalculationResult {
    /// The result for an input missing its hire or calculation date.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the rows carrying `status`.
    pub fn rows_with_status(&self, status: SubsidyStatus) -> impl Iterator<Item = &BreakdownRow> {
        self.breakdown.iter().filter(move |row| row.status == status)
    }

    /// Number of years granted in full.
    pub fn eligible_years(&self) -> usize {
        self.rows_with_status(SubsidyStatus::Eligible).count()
    }

    /// Sum of the amounts that were withheld by any override.
    pub fn withheld_total(&self) -> u64 {
        self.breakdown.iter().map(BreakdownRow::withheld_amount).sum()
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning about the input that did not prevent the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium" or "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
