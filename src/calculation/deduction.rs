//! Project-usage deduction targeting.
//!
//! A project grant taken while the subsidy is suspended is paid back out of
//! the first anniversary after the grant.

use chrono::NaiveDate;

use crate::models::SuspensionWindow;

/// Finds the index of the anniversary consumed by a project grant.
///
/// Returns `Some(index)` of the first entry in `anniversaries` strictly
/// after `project_usage_date`, but only when the usage date lies inside the
/// suspension window. Returns `None` when either date is missing, the usage
/// falls outside the window, or no anniversary comes after it.
///
/// `anniversaries` must be ascending.
///
/// # Examples
///
/// ```
/// use travel_subsidy::calculation::find_deduction_target;
/// use travel_subsidy::models::SuspensionWindow;
/// use chrono::NaiveDate;
///
/// let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let anniversaries = [d("2025-03-10"), d("2026-03-10"), d("2027-03-10")];
/// let window = SuspensionWindow { start: d("2025-05-01"), end: d("2025-12-31") };
///
/// assert_eq!(
///     find_deduction_target(&anniversaries, Some(d("2025-07-03")), Some(window)),
///     Some(1)
/// );
/// ```
pub fn find_deduction_target(
    anniversaries: &[NaiveDate],
    project_usage_date: Option<NaiveDate>,
    window: Option<SuspensionWindow>,
) -> Option<usize> {
    let usage = project_usage_date?;
    let window = window?;

    if !window.contains(usage) {
        return None;
    }

    anniversaries.iter().position(|date| *date > usage)
}
