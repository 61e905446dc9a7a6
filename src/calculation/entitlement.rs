//! Entitlement calculation.
//!
//! This module ties the individual rules together: enumerate anniversaries,
//! look up tier amounts, pick the deduction target, resolve each row and
//! aggregate.

use chrono::NaiveDate;

use crate::config::SubsidyPolicy;
use crate::error::EngineResult;
use crate::models::{BreakdownRow, CalculationInput, CalculationResult};

use super::anniversary::enumerate_anniversaries;
use super::current_year::current_year_count;
use super::deduction::find_deduction_target;
use super::status::resolve_status;
use super::tier::subsidy_amount_for_seniority;

/// Calculates the subsidy entitlement for `input` under `policy`.
///
/// The calculation is pure and never fails. If the hire date or calculation
/// date is missing the result is empty with all totals zero.
///
/// # Examples
///
/// ```
/// use travel_subsidy::calculation::calculate_entitlement;
/// use travel_subsidy::config::SubsidyPolicy;
/// use travel_subsidy::models::CalculationInput;
///
/// let input = CalculationInput::parse("2020-03-10", "2024-01-01", "", "", "").unwrap();
/// let result = calculate_entitlement(&input, &SubsidyPolicy::standard());
///
/// assert_eq!(result.breakdown.len(), 3);
/// assert_eq!(result.total_amount, 42_000);
/// assert_eq!(result.current_year_count, 0);
/// ```
pub fn calculate_entitlement(input: &CalculationInput, policy: &SubsidyPolicy) -> CalculationResult {
    let (Some(hire_date), Some(calc_date)) = (input.hire_date, input.calc_date) else {
        return CalculationResult::empty();
    };

    let anniversaries = enumerate_anniversaries(hire_date, calc_date);
    let window = input.suspension_window();

    let dates: Vec<NaiveDate> = anniversaries.iter().map(|(_, date)| *date).collect();
    let deduction_target = find_deduction_target(&dates, input.project_usage_date, window);

    let breakdown: Vec<BreakdownRow> = anniversaries
        .into_iter()
        .enumerate()
        .map(|(index, (year_index, anniversary_date))| {
            let seniority_years = year_index;
            let theoretical_amount = subsidy_amount_for_seniority(seniority_years, policy);
            let resolution = resolve_status(
                index,
                anniversary_date,
                theoretical_amount,
                deduction_target,
                window,
            );

            BreakdownRow {
                year_index,
                anniversary_date,
                seniority_years,
                theoretical_amount,
                status: resolution.status,
                actual_amount: resolution.actual_amount,
            }
        })
        .collect();

    let total_amount = breakdown.iter().map(|row| row.actual_amount).sum();
    let current_year_count = current_year_count(&breakdown, calc_date);

    CalculationResult {
        total_amount,
        current_year_count,
        breakdown,
    }
}

/// Calculates the entitlement from ISO `YYYY-MM-DD` strings using the
/// standard policy.
///
/// Empty strings are treated as absent dates.
///
/// # Errors
///
/// Returns `InvalidDate` if a non-empty string is not a valid date.
///
/// # Examples
///
/// ```
/// use travel_subsidy::calculation::calculate_subsidy;
///
/// let result = calculate_subsidy("", "2024-01-01", "", "", "").unwrap();
/// assert!(result.breakdown.is_empty());
/// ```
pub fn calculate_subsidy(
    hire_date: &str,
    calc_date: &str,
    suspend_start: &str,
    suspend_end: &str,
    project_usage_date: &str,
) -> EngineResult<CalculationResult> {
    let input = CalculationInput::parse(
        hire_date,
        calc_date,
        suspend_start,
        suspend_end,
        project_usage_date,
    )?;

    Ok(calculate_entitlement(&input, &SubsidyPolicy::standard()))
}
