//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a subsidy
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyMetadata, SubsidyPolicy, TiersConfig};

/// Loads and provides access to the subsidy policy.
///
/// # Directory Structure
///
/// ```text
/// config/overseas_travel/
/// ├── policy.yaml   # Policy metadata
/// └── tiers.yaml    # Seniority tier table
/// ```
///
/// # Example
///
/// ```no_run
/// use travel_subsidy::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/overseas_travel").unwrap();
/// println!("Loaded policy: {}", loader.policy().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: SubsidyPolicy,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if either file is missing
    /// - `ConfigParseError` if either file contains invalid YAML
    /// - `InvalidPolicy` if the tier table fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let tiers_config = Self::load_yaml::<TiersConfig>(&path.join("tiers.yaml"))?;

        let policy = SubsidyPolicy::new(metadata, tiers_config.tiers)?;
        debug!(
            policy_code = %policy.metadata().code,
            tiers = policy.tiers().len(),
            "Loaded subsidy policy"
        );

        Ok(Self { policy })
    }

    /// Wraps the built-in standard policy.
    pub fn standard() -> Self {
        Self {
            policy: SubsidyPolicy::standard(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &SubsidyPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> SubsidyPolicy {
        self.policy
    }
}
