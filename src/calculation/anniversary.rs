//! Service anniversary enumeration.
//!
//! Anniversaries are the hire date advanced by whole calendar years. When the
//! hire day does not exist in the target month (a 29 February hire in a
//! common year) the date is clamped to the last day of that month.

use chrono::{Months, NaiveDate};

/// Returns the `years`-th anniversary of `hire_date`.
///
/// Returns `None` only when the result would fall outside the supported
/// calendar range.
///
/// # Examples
///
/// ```
/// use travel_subsidy::calculation::anniversary_date;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
/// assert_eq!(
///     anniversary_date(hire, 1),
///     NaiveDate::from_ymd_opt(2021, 2, 28)
/// );
/// assert_eq!(
///     anniversary_date(hire, 4),
///     NaiveDate::from_ymd_opt(2024, 2, 29)
/// );
/// ```
pub fn anniversary_date(hire_date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let months = years.checked_mul(12)?;
    hire_date.checked_add_months(Months::new(months))
}

/// Lists every anniversary of `hire_date` on or before `calc_date`.
///
/// Each entry is `(year_index, anniversary_date)` with `year_index` starting
/// at 1. The sequence is strictly increasing in both components; it is empty
/// when the first anniversary is already after `calc_date`.
pub fn enumerate_anniversaries(hire_date: NaiveDate, calc_date: NaiveDate) -> Vec<(u32, NaiveDate)> {
    let mut anniversaries = Vec::new();
    let mut year_index: u32 = 1;

    while let Some(date) = anniversary_date(hire_date, year_index) {
        if date > calc_date {
            break;
        }
        anniversaries.push((year_index, date));
        year_index += 1;
    }

    anniversaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_anniversary_preserves_month_and_day() {
        assert_eq!(anniversary_date(date("2020-03-10"), 1), Some(date("2021-03-10")));
        assert_eq!(anniversary_date(date("2020-03-10"), 7), Some(date("2027-03-10")));
    }

    #[test]
    fn test_anniversary_zero_years_is_hire_date() {
        assert_eq!(anniversary_date(date("2020-03-10"), 0), Some(date("2020-03-10")));
    }

    #[test]
    fn test_leap_day_hire_clamps_to_feb_28() {
        let hire = date("2020-02-29");
        assert_eq!(anniversary_date(hire, 1), Some(date("2021-02-28")));
        assert_eq!(anniversary_date(hire, 3), Some(date("2023-02-28")));
        assert_eq!(anniversary_date(hire, 4), Some(date("2024-02-29")));
    }

    #[test]
    fn test_anniversary_past_calendar_range_is_none() {
        assert_eq!(anniversary_date(NaiveDate::MAX, 1), None);
        assert_eq!(anniversary_date(date("2020-01-01"), u32::MAX), None);
    }

    #[test]
    fn test_enumerate_stops_at_calc_date() {
        let anniversaries = enumerate_anniversaries(date("2020-03-10"), date("2024-01-01"));

        assert_eq!(
            anniversaries,
            vec![
                (1, date("2021-03-10")),
                (2, date("2022-03-10")),
                (3, date("2023-03-10")),
            ]
        );
    }

    #[test]
    fn test_enumerate_includes_anniversary_on_calc_date() {
        let anniversaries = enumerate_anniversaries(date("2020-03-10"), date("2022-03-10"));
        assert_eq!(anniversaries.last(), Some(&(2, date("2022-03-10"))));
    }

    #[test]
    fn test_enumerate_before_first_anniversary_is_empty() {
        assert!(enumerate_anniversaries(date("2020-03-10"), date("2021-03-09")).is_empty());
    }

    #[test]
    fn test_enumerate_hire_after_calc_is_empty() {
        assert!(enumerate_anniversaries(date("2025-01-01"), date("2024-01-01")).is_empty());
    }

    #[test]
    fn test_enumerate_terminates_at_end_of_calendar() {
        let hire = NaiveDate::MAX
            .checked_sub_months(Months::new(30))
            .unwrap();
        let anniversaries = enumerate_anniversaries(hire, NaiveDate::MAX);
        assert_eq!(anniversaries.len(), 2);
    }
}
