//! Seniority tier lookup.

use crate::config::SubsidyPolicy;

/// Returns the subsidy amount for a seniority under `policy`.
///
/// Seniorities below the lowest tier threshold receive 0. With the standard
/// policy this gives `<1 → 0`, `1 → 10000`, `2 → 14000`, `≥3 → 18000`.
///
/// # Examples
///
/// ```
/// use travel_subsidy::calculation::subsidy_amount_for_seniority;
/// use travel_subsidy::config::SubsidyPolicy;
///
/// let policy = SubsidyPolicy::standard();
/// assert_eq!(subsidy_amount_for_seniority(0, &policy), 0);
/// assert_eq!(subsidy_amount_for_seniority(2, &policy), 14_000);
/// ```
pub fn subsidy_amount_for_seniority(seniority_years: u32, policy: &SubsidyPolicy) -> u64 {
    policy
        .tier_for_seniority(seniority_years)
        .map_or(0, |tier| tier.amount)
}
