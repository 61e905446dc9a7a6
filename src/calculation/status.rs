//! Per-anniversary status resolution.
//!
//! Rules are checked in a fixed order and the first match wins:
//! deduction, then suspension, then zero tier, then eligible. Swapping the
//! first two changes the outcome for an anniversary that is both the
//! deduction target and inside the window.

use chrono::NaiveDate;

use crate::models::{SubsidyStatus, SuspensionWindow};

/// The resolved status and granted amount for one anniversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResolution {
    /// The resolved status.
    pub status: SubsidyStatus,
    /// The amount granted; zero unless the status is eligible.
    pub actual_amount: u64,
}

/// Resolves the status of the anniversary at `index`.
///
/// # Arguments
///
/// * `index` - Position of the row in the breakdown
/// * `anniversary_date` - The row's anniversary
/// * `theoretical_amount` - The tier amount for the row's seniority
/// * `deduction_target` - Index chosen by [`find_deduction_target`](super::find_deduction_target)
/// * `window` - The suspension window, if both ends were supplied
///
/// # Examples
///
/// ```
/// use travel_subsidy::calculation::resolve_status;
/// use travel_subsidy::models::SubsidyStatus;
/// use chrono::NaiveDate;
///
/// let anniversary = NaiveDate::from_ymd_opt(2022, 3, 10).unwrap();
/// let resolution = resolve_status(1, anniversary, 14_000, None, None);
/// assert_eq!(resolution.status, SubsidyStatus::Eligible);
/// assert_eq!(resolution.actual_amount, 14_000);
/// ```
pub fn resolve_status(
    index: usize,
    anniversary_date: NaiveDate,
    theoretical_amount: u64,
    deduction_target: Option<usize>,
    window: Option<SuspensionWindow>,
) -> StatusResolution {
    let status = if deduction_target == Some(index) {
        SubsidyStatus::Deducted
    } else if window.is_some_and(|w| w.contains(anniversary_date)) {
        SubsidyStatus::Suspended
    } else if theoretical_amount == 0 {
        SubsidyStatus::NotEligible
    } else {
        SubsidyStatus::Eligible
    };

    let actual_amount = if status.is_paid() {
        theoretical_amount
    } else {
        0
    };

    StatusResolution {
        status,
        actual_amount,
    }
}
