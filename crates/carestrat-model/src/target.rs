//! Predicted outcomes and the per-target score set.

use serde::{Deserialize, Serialize};

/// One of the four predicted outcomes.
///
/// Serialization uses the artifact key names (`30d_hospitalization`, ...,
/// `mortality`); the externally documented score field names are available
/// through [`score_field`](Self::score_field).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum RiskTarget {
    #[serde(rename = "30d_hospitalization")]
    #[display("30d_hospitalization")]
    Hospitalization30d,
    #[serde(rename = "60d_hospitalization")]
    #[display("60d_hospitalization")]
    Hospitalization60d,
    #[serde(rename = "90d_hospitalization")]
    #[display("90d_hospitalization")]
    Hospitalization90d,
    #[serde(rename = "mortality")]
    #[display("mortality")]
    Mortality,
}

impl RiskTarget {
    pub const ALL: [RiskTarget; 4] = [
        RiskTarget::Hospitalization30d,
        RiskTarget::Hospitalization60d,
        RiskTarget::Hospitalization90d,
        RiskTarget::Mortality,
    ];

    /// The score field name used in externally visible result records.
    #[must_use]
    pub fn score_field(self) -> &'static str {
        match self {
            RiskTarget::Hospitalization30d => "hospitalization_30d_score",
            RiskTarget::Hospitalization60d => "hospitalization_60d_score",
            RiskTarget::Hospitalization90d => "hospitalization_90d_score",
            RiskTarget::Mortality => "mortality_score",
        }
    }
}

/// One positive-class probability per target, produced fresh per prediction.
///
/// Serializes under the external score field names, so a score set can be
/// merged verbatim into a result record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    #[serde(rename = "hospitalization_30d_score")]
    pub hospitalization_30d: f64,
    #[serde(rename = "hospitalization_60d_score")]
    pub hospitalization_60d: f64,
    #[serde(rename = "hospitalization_90d_score")]
    pub hospitalization_90d: f64,
    #[serde(rename = "mortality_score")]
    pub mortality: f64,
}

impl ScoreSet {
    #[must_use]
    pub fn get(self, target: RiskTarget) -> f64 {
        match target {
            RiskTarget::Hospitalization30d => self.hospitalization_30d,
            RiskTarget::Hospitalization60d => self.hospitalization_60d,
            RiskTarget::Hospitalization90d => self.hospitalization_90d,
            RiskTarget::Mortality => self.mortality,
        }
    }

    /// The primary score, from which the risk tier is derived.
    #[must_use]
    pub fn primary(self) -> f64 {
        self.hospitalization_30d
    }
}
