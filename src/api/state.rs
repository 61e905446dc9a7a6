//! Application state for the travel subsidy API.

use std::sync::Arc;

use crate::config::{ConfigLoader, SubsidyPolicy};

/// Shared application state.
///
/// Holds the active subsidy policy. Calculations themselves keep no state
/// between requests.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<SubsidyPolicy>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            policy: Arc::new(config.into_policy()),
        }
    }

    /// Returns the active subsidy policy.
    pub fn policy(&self) -> &SubsidyPolicy {
        &self.policy
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::standard())
    }
}
