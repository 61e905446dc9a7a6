//! Request types for the travel subsidy API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Dates arrive as the raw strings a date form produces, so a
//! field may be missing, `null` or `""` and all three mean "not set".

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::CalculationInput;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee's hire date.
    #[serde(default)]
    pub hire_date: Option<String>,
    /// The calculation cutoff date.
    #[serde(default)]
    pub calc_date: Option<String>,
    /// First day of the suspension window.
    #[serde(default)]
    pub suspend_start: Option<String>,
    /// Last day of the suspension window.
    #[serde(default)]
    pub suspend_end: Option<String>,
    /// The day a project-based grant was used.
    #[serde(default)]
    pub project_usage_date: Option<String>,
}

impl CalculationRequest {
    /// Parses the request into a calculation input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` for the first non-empty field that is not a
    /// `YYYY-MM-DD` date.
    pub fn to_input(&self) -> EngineResult<CalculationInput> {
        let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_owned();

        CalculationInput::parse(
            &field(&self.hire_date),
            &field(&self.calc_date),
            &field(&self.suspend_start),
            &field(&self.suspend_end),
            &field(&self.project_usage_date),
        )
    }
}
