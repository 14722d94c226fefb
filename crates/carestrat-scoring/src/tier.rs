//! The fixed 5-tier intervention policy.
//!
//! The tier is a deterministic threshold table over the primary (30-day
//! hospitalization) score. Each tier fixes an intervention, its annual cost,
//! and the hospitalization-prevention rate that feeds the cost-savings
//! estimate. The table is static policy, never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Average cost of one preventable hospitalization, in dollars.
pub const AVERAGE_PREVENTABLE_COST: f64 = 10_000.0;

/// Discrete risk severity bucket, 1 (low) through 5 (critical).
///
/// Serializes as its numeric level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum RiskTier {
    Low = 1,
    LowModerate = 2,
    Moderate = 3,
    High = 4,
    Critical = 5,
}

impl From<RiskTier> for u8 {
    fn from(tier: RiskTier) -> Self {
        tier as u8
    }
}

impl TryFrom<u8> for RiskTier {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(RiskTier::Low),
            2 => Ok(RiskTier::LowModerate),
            3 => Ok(RiskTier::Moderate),
            4 => Ok(RiskTier::High),
            5 => Ok(RiskTier::Critical),
            other => Err(format!("risk tier must be 1-5, got {other}")),
        }
    }
}

impl RiskTier {
    /// Classifies a 30-day hospitalization score. Total over all inputs:
    /// every tier's lower bound is inclusive, anything below 0.15 (including
    /// a missing score read as 0, or NaN) is tier 1.
    #[must_use]
    pub fn from_score(p: f64) -> RiskTier {
        if p >= 0.85 {
            RiskTier::Critical
        } else if p >= 0.65 {
            RiskTier::High
        } else if p >= 0.40 {
            RiskTier::Moderate
        } else if p >= 0.15 {
            RiskTier::LowModerate
        } else {
            RiskTier::Low
        }
    }

    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// The intervention policy row for this tier.
    #[must_use]
    pub fn policy(self) -> &'static TierPolicy {
        &TIER_POLICIES[self as usize - 1]
    }
}

/// One row of the intervention policy table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierPolicy {
    pub tier: RiskTier,
    pub label: &'static str,
    pub intervention: &'static str,
    pub annual_intervention_cost: u32,
    pub prevention_rate: f64,
}

/// The policy table, ascending by tier.
pub const TIER_POLICIES: [TierPolicy; 5] = [
    TierPolicy {
        tier: RiskTier::Low,
        label: "Low Risk",
        intervention: "Preventive Care",
        annual_intervention_cost: 200,
        prevention_rate: 0.02,
    },
    TierPolicy {
        tier: RiskTier::LowModerate,
        label: "Low-Moderate Risk",
        intervention: "Enhanced Wellness",
        annual_intervention_cost: 300,
        prevention_rate: 0.05,
    },
    TierPolicy {
        tier: RiskTier::Moderate,
        label: "Moderate Risk",
        intervention: "Care Coordination",
        annual_intervention_cost: 600,
        prevention_rate: 0.15,
    },
    TierPolicy {
        tier: RiskTier::High,
        label: "High Risk",
        intervention: "Case Management",
        annual_intervention_cost: 800,
        prevention_rate: 0.25,
    },
    TierPolicy {
        tier: RiskTier::Critical,
        label: "Critical Risk",
        intervention: "Intensive Management",
        annual_intervention_cost: 1000,
        prevention_rate: 0.35,
    },
];

/// Expected prevention outcome for one patient under a tier's policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreventionEstimate {
    pub prevented_hospitalizations: f64,
    pub cost_savings: f64,
}

impl TierPolicy {
    /// `prevented = p * prevention_rate`, `savings = prevented * 10000`.
    #[must_use]
    pub fn prevention_estimate(&self, p: f64) -> PreventionEstimate {
        let prevented_hospitalizations = p * self.prevention_rate;
        PreventionEstimate {
            prevented_hospitalizations,
            cost_savings: prevented_hospitalizations * AVERAGE_PREVENTABLE_COST,
        }
    }
}
