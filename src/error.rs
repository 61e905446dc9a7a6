//! Error types for the travel subsidy engine.
//!
//! The entitlement calculation itself never fails: missing dates degrade to
//! an empty result. Errors only arise at the edges, when loading a policy
//! from disk or when parsing date strings supplied by a caller.

use thiserror::Error;

/// The main error type for the travel subsidy engine.
///
/// # Example
///
/// ```
/// use travel_subsidy::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The subsidy policy parsed but is not usable.
    #[error("Invalid subsidy policy: {message}")]
    InvalidPolicy {
        /// What is wrong with the policy.
        message: String,
    },

    /// A date string was not a valid ISO `YYYY-MM-DD` date.
    #[error("Invalid date for '{field}': '{value}' is not a YYYY-MM-DD date")]
    InvalidDate {
        /// The input field holding the bad value.
        field: String,
        /// The rejected value.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
