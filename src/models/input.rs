//! Calculation input model.
//!
//! This module defines [`CalculationInput`], the date snapshot a calculation
//! runs against, and [`SuspensionWindow`], the inclusive range during which
//! subsidies are withheld.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The date format accepted at the string boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive date range during which subsidies are withheld.
///
/// A window whose start is after its end contains no dates.
///
/// # Example
///
/// ```
/// use travel_subsidy::models::SuspensionWindow;
/// use chrono::NaiveDate;
///
/// let window = SuspensionWindow {
///     start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
/// };
/// assert!(window.contains(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
/// assert!(!window.contains(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspensionWindow {
    /// First suspended day.
    pub start: NaiveDate,
    /// Last suspended day.
    pub end: NaiveDate,
}

impl SuspensionWindow {
    /// Returns true if `date` lies within the window, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns true if the window's start is after its end.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// The dates a single entitlement calculation runs against.
///
/// Every field is optional. A missing hire or calculation date is the
/// "not yet configured" state and yields an empty result; missing optional
/// dates simply disable the rules that depend on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The employee's hire date.
    pub hire_date: Option<NaiveDate>,
    /// The calculation cutoff date.
    pub calc_date: Option<NaiveDate>,
    /// First day of the suspension window.
    pub suspend_start: Option<NaiveDate>,
    /// Last day of the suspension window.
    pub suspend_end: Option<NaiveDate>,
    /// The day a project-based grant was used.
    pub project_usage_date: Option<NaiveDate>,
}

impl CalculationInput {
    /// Builds an input from ISO `YYYY-MM-DD` strings.
    ///
    /// Empty or blank strings are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` naming the first field that holds a non-empty
    /// value which is not a valid calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use travel_subsidy::models::CalculationInput;
    ///
    /// let input = CalculationInput::parse("2020-03-10", "2024-01-01", "", "", "").unwrap();
    /// assert!(input.hire_date.is_some());
    /// assert!(input.suspension_window().is_none());
    ///
    /// assert!(CalculationInput::parse("2020-02-30", "2024-01-01", "", "", "").is_err());
    /// ```
    pub fn parse(
        hire_date: &str,
        calc_date: &str,
        suspend_start: &str,
        suspend_end: &str,
        project_usage_date: &str,
    ) -> EngineResult<Self> {
        Ok(Self {
            hire_date: parse_optional_date("hire_date", hire_date)?,
            calc_date: parse_optional_date("calc_date", calc_date)?,
            suspend_start: parse_optional_date("suspend_start", suspend_start)?,
            suspend_end: parse_optional_date("suspend_end", suspend_end)?,
            project_usage_date: parse_optional_date("project_usage_date", project_usage_date)?,
        })
    }

    /// Returns the suspension window if both of its ends are present.
    pub fn suspension_window(&self) -> Option<SuspensionWindow> {
        match (self.suspend_start, self.suspend_end) {
            (Some(start), Some(end)) => Some(SuspensionWindow { start, end }),
            _ => None,
        }
    }

    /// Returns true if both required dates are present.
    pub fn is_configured(&self) -> bool {
        self.hire_date.is_some() && self.calc_date.is_some()
    }
}

/// Parses an optional ISO date, mapping blank input to `None`.
pub fn parse_optional_date(field: &str, value: &str) -> EngineResult<Option<NaiveDate>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = || EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    };

    if !is_iso_date_shape(trimmed) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| invalid())
}

/// Checks for exactly `YYYY-MM-DD`: chrono alone also accepts unpadded
/// fields and a leading sign.
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_parse_all_fields() {
        let input = CalculationInput::parse(
            "2020-03-10",
            "2027-10-15",
            "2025-05-01",
            "2025-12-31",
            "2025-07-03",
        )
        .unwrap();

        assert_eq!(input.hire_date, Some(date("2020-03-10")));
        assert_eq!(input.calc_date, Some(date("2027-10-15")));
        assert_eq!(input.suspend_start, Some(date("2025-05-01")));
        assert_eq!(input.suspend_end, Some(date("2025-12-31")));
        assert_eq!(input.project_usage_date, Some(date("2025-07-03")));
        assert!(input.is_configured());
    }

    #[test]
    fn test_parse_blank_fields_are_absent() {
        let input = CalculationInput::parse("", "2024-01-01", "  ", "", "").unwrap();

        assert!(input.hire_date.is_none());
        assert!(input.suspend_start.is_none());
        assert!(!input.is_configured());
    }

    #[test]
    fn test_parse_rejects_malformed_date() {
        let result = CalculationInput::parse("2020-03-10", "01/01/2024", "", "", "");

        match result {
            Err(EngineError::InvalidDate { field, value }) => {
                assert_eq!(field, "calc_date");
                assert_eq!(value, "01/01/2024");
            }
            _ => panic!("Expected InvalidDate error"),
        }
    }

    #[test]
    fn test_parse_rejects_unpadded_and_signed_dates() {
        for value in ["2024-1-1", "+2024-01-01", "2024-01-1", "02024-01-01"] {
            match CalculationInput::parse(value, "2024-01-01", "", "", "") {
                Err(EngineError::InvalidDate { field, value: rejected }) => {
                    assert_eq!(field, "hire_date");
                    assert_eq!(rejected, value);
                }
                other => panic!("Expected InvalidDate for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_accepts_padded_date_with_surrounding_space() {
        let input = CalculationInput::parse(" 2024-01-01 ", "2024-01-01", "", "", "").unwrap();
        assert_eq!(input.hire_date, Some(date("2024-01-01")));
    }

    #[test]
    fn test_parse_rejects_impossible_calendar_day() {
        let result = CalculationInput::parse("2021-02-29", "2024-01-01", "", "", "");
        assert!(matches!(result, Err(EngineError::InvalidDate { .. })));
    }

    #[test]
    fn test_suspension_window_requires_both_ends() {
        let mut input = CalculationInput {
            suspend_start: Some(date("2025-01-01")),
            ..Default::default()
        };
        assert!(input.suspension_window().is_none());

        input.suspend_end = Some(date("2025-12-31"));
        let window = input.suspension_window().unwrap();
        assert_eq!(window.start, date("2025-01-01"));
        assert_eq!(window.end, date("2025-12-31"));
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let window = SuspensionWindow {
            start: date("2025-05-01"),
            end: date("2025-12-31"),
        };

        assert!(window.contains(date("2025-05-01")));
        assert!(window.contains(date("2025-07-03")));
        assert!(window.contains(date("2025-12-31")));
        assert!(!window.contains(date("2025-04-30")));
        assert!(!window.contains(date("2026-01-01")));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let window = SuspensionWindow {
            start: date("2025-12-31"),
            end: date("2025-01-01"),
        };

        assert!(window.is_inverted());
        assert!(!window.contains(date("2025-06-15")));
        assert!(!window.contains(date("2025-12-31")));
    }

    #[test]
    fn test_input_deserializes_iso_dates() {
        let json = r#"{
            "hire_date": "2020-03-10",
            "calc_date": "2024-01-01",
            "suspend_start": null,
            "suspend_end": null,
            "project_usage_date": null
        }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.hire_date, Some(date("2020-03-10")));
        assert!(input.project_usage_date.is_none());
    }
}
