//! Configuration types for the subsidy policy.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a policy directory, plus the validated [`SubsidyPolicy`]
//! the calculation runs against.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the subsidy policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier of the policy (e.g., "OTS-STD").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// ISO 4217 code of the currency amounts are expressed in.
    pub currency: String,
}

/// One row of the seniority tier table.
///
/// A tier applies to every seniority of at least `min_years` full years, up
/// to the next tier's threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyTier {
    /// Minimum completed years of service for this tier.
    pub min_years: u32,
    /// The annual subsidy amount for this tier.
    pub amount: u64,
    /// Optional display label (e.g., "1-2 years").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Tier table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TiersConfig {
    /// The tiers, in any order.
    pub tiers: Vec<SubsidyTier>,
}

/// A validated subsidy policy.
///
/// Tiers are sorted by `min_years` ascending, thresholds are unique and at
/// least one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubsidyPolicy {
    metadata: PolicyMetadata,
    tiers: Vec<SubsidyTier>,
}

impl SubsidyPolicy {
    /// Creates a policy from its parts, validating the tier table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if the table is empty, a threshold is zero, or
    /// two tiers share a threshold.
    pub fn new(metadata: PolicyMetadata, tiers: Vec<SubsidyTier>) -> EngineResult<Self> {
        if tiers.is_empty() {
            return Err(EngineError::InvalidPolicy {
                message: "no tiers defined".to_string(),
            });
        }

        let mut sorted_tiers = tiers;
        sorted_tiers.sort_by_key(|t| t.min_years);

        if sorted_tiers[0].min_years == 0 {
            return Err(EngineError::InvalidPolicy {
                message: "tier thresholds must be at least 1 year".to_string(),
            });
        }

        if let Some(pair) = sorted_tiers
            .windows(2)
            .find(|pair| pair[0].min_years == pair[1].min_years)
        {
            return Err(EngineError::InvalidPolicy {
                message: format!("duplicate tier threshold: {} years", pair[0].min_years),
            });
        }

        Ok(Self {
            metadata,
            tiers: sorted_tiers,
        })
    }

    /// The standard overseas-travel policy: 10,000 after one year, 14,000
    /// after two, 18,000 from three years on.
    ///
    /// # Example
    ///
    /// ```
    /// use travel_subsidy::config::SubsidyPolicy;
    ///
    /// let policy = SubsidyPolicy::standard();
    /// assert_eq!(policy.tiers().len(), 3);
    /// assert_eq!(policy.metadata().currency, "TWD");
    /// ```
    pub fn standard() -> Self {
        let tier = |min_years, amount, label: &str| SubsidyTier {
            min_years,
            amount,
            label: Some(label.to_string()),
        };

        Self {
            metadata: PolicyMetadata {
                code: "OTS-STD".to_string(),
                name: "Overseas Travel Subsidy".to_string(),
                version: "2.0".to_string(),
                currency: "TWD".to_string(),
            },
            tiers: vec![
                tier(1, 10_000, "1-2 years"),
                tier(2, 14_000, "2-3 years"),
                tier(3, 18_000, "3+ years"),
            ],
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the tiers, sorted by threshold.
    pub fn tiers(&self) -> &[SubsidyTier] {
        &self.tiers
    }

    /// Looks up the tier that applies to a seniority, if any.
    ///
    /// Returns `None` below the lowest threshold.
    pub fn tier_for_seniority(&self, seniority_years: u32) -> Option<&SubsidyTier> {
        self.tiers.iter().rfind(|t| t.min_years <= seniority_years)
    }
}

impl Default for SubsidyPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
