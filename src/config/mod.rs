//! Configuration loading and management for the travel subsidy engine.
//!
//! The seniority tier table lives in YAML so that amounts can change
//! without a rebuild. When no directory is supplied the built-in
//! [`SubsidyPolicy::standard`] table is used.
//!
//! # Example
//!
//! ```no_run
//! use travel_subsidy::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/overseas_travel").unwrap();
//! println!("Loaded policy: {}", config.policy().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PolicyMetadata, SubsidyPolicy, SubsidyTier, TiersConfig};
