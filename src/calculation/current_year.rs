//! Current calendar-year flag.

use chrono::{Datelike, NaiveDate};

use crate::models::{BreakdownRow, SubsidyStatus};

/// Returns 1 if the calendar year of `calc_date` holds an anniversary that
/// has occurred by `calc_date` and is eligible, otherwise 0.
///
/// Only the first row in that calendar year is considered.
pub fn current_year_count(breakdown: &[BreakdownRow], calc_date: NaiveDate) -> u8 {
    let calc_year = calc_date.year();

    let this_year_row = breakdown
        .iter()
        .find(|row| row.anniversary_date.year() == calc_year);

    match this_year_row {
        Some(row) if row.anniversary_date <= calc_date && row.status == SubsidyStatus::Eligible => 1,
        _ => 0,
    }
}
