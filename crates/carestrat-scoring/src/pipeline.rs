//! The single scoring entry point.

use std::sync::Arc;

use carestrat_features::{IntakeRecord, derive};
use carestrat_model::{ModelBundle, SchemaError, ScoreSet};
use serde::Serialize;

use crate::{
    scorer::RiskScorer,
    tier::{RiskTier, TierPolicy},
};

/// The externally visible output of one scoring call: the enriched feature
/// record, the per-target scores, the chosen tier with its policy fields, and
/// the derived cost figures.
///
/// Serializes flat, the way result records are persisted and rendered
/// downstream: enriched fields and score fields side by side with the tier
/// fields.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringResult {
    #[serde(flatten)]
    pub features: IntakeRecord,
    #[serde(flatten)]
    pub scores: ScoreSet,
    pub risk_tier: RiskTier,
    pub risk_tier_label: &'static str,
    pub care_intervention: &'static str,
    pub annual_intervention_cost: u32,
    pub prevention_rate: f64,
    pub prevented_hospitalizations: f64,
    pub cost_savings: f64,
}

/// Composes derivation, normalization, prediction, and tier policy into one
/// call.
///
/// This is the unit external callers invoke. It performs no I/O and holds no
/// mutable state; errors from the model layer propagate to the caller
/// untouched, and identical input always produces an identical result.
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    scorer: RiskScorer,
}

impl ScoringPipeline {
    #[must_use]
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self {
            scorer: RiskScorer::new(bundle),
        }
    }

    /// Scores one raw intake record end to end.
    pub fn score(&self, raw: &IntakeRecord) -> Result<ScoringResult, SchemaError> {
        let enriched = derive::enrich_intake(raw);
        let scores = self.scorer.score_enriched(&enriched)?;

        let tier = RiskTier::from_score(scores.primary());
        let policy: &TierPolicy = tier.policy();
        let estimate = policy.prevention_estimate(scores.primary());

        Ok(ScoringResult {
            features: enriched,
            scores,
            risk_tier: tier,
            risk_tier_label: policy.label,
            care_intervention: policy.intervention,
            annual_intervention_cost: policy.annual_intervention_cost,
            prevention_rate: policy.prevention_rate,
            prevented_hospitalizations: estimate.prevented_hospitalizations,
            cost_savings: estimate.cost_savings,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use carestrat_model::{
        ClassifierArtifact, ModelSetArtifact, RiskTarget, TransformArtifact,
    };

    use super::*;

    /// Two-column bundle with strong positive weights, so a loaded record
    /// lands in an upper tier.
    fn pipeline() -> ScoringPipeline {
        let columns = ["sp_chf", "prior_hospitalization"];
        let transform = TransformArtifact {
            means: vec![0.0, 0.0],
            scales: vec![1.0, 1.0],
        };
        let models: BTreeMap<_, _> = RiskTarget::ALL
            .into_iter()
            .map(|target| {
                (
                    target,
                    ClassifierArtifact::Logistic {
                        coefficients: vec![2.0, 2.0],
                        intercept: -1.0,
                    },
                )
            })
            .collect();
        let models = ModelSetArtifact {
            name: "test".to_owned(),
            trained_at: "2026-03-01T00:00:00Z".parse().unwrap(),
            feature_columns: columns.iter().map(|&c| c.to_owned()).collect(),
            models,
        };
        ScoringPipeline::new(Arc::new(
            ModelBundle::from_artifacts(transform, models).unwrap(),
        ))
    }

    fn loaded_record() -> IntakeRecord {
        let mut record = IntakeRecord::new();
        record.insert("SP_CHF", "on");
        record.insert("inpatient_admissions", 3);
        record.insert("name", "Jane Doe");
        record
    }

    #[test]
    fn test_result_is_consistent() {
        let result = pipeline().score(&loaded_record()).unwrap();

        assert_eq!(result.risk_tier, RiskTier::from_score(result.scores.primary()));
        let policy = result.risk_tier.policy();
        assert_eq!(result.risk_tier_label, policy.label);
        assert_eq!(result.care_intervention, policy.intervention);
        assert_eq!(result.annual_intervention_cost, policy.annual_intervention_cost);
        assert!(
            (result.cost_savings
                - result.scores.primary() * policy.prevention_rate * 10_000.0)
                .abs()
                < f64::EPSILON,
        );
        // The enriched record rides along, passthrough fields included.
        assert_eq!(result.features.numeric("sp_chf"), Some(1.0));
        assert_eq!(result.features.numeric("prior_hospitalization"), Some(1.0));
        assert!(result.features.contains("name"));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let pipeline = pipeline();
        let record = loaded_record();
        let first = pipeline.score(&record).unwrap();
        let second = pipeline.score(&record).unwrap();
        assert_eq!(first.scores, second.scores);
        assert_eq!(first.risk_tier, second.risk_tier);
        assert_eq!(first.features, second.features);
    }

    #[test]
    fn test_empty_record_lands_in_a_tier() {
        let result = pipeline().score(&IntakeRecord::new()).unwrap();
        assert_eq!(result.risk_tier, RiskTier::from_score(result.scores.primary()));
    }

    #[test]
    fn test_result_serializes_flat() {
        let result = pipeline().score(&loaded_record()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        // Enriched fields, score fields, and tier fields are siblings.
        assert_eq!(json["sp_chf"], 1);
        assert!(json["hospitalization_30d_score"].is_number());
        assert!(json["mortality_score"].is_number());
        assert!(json["risk_tier"].is_u64());
        assert!(json["risk_tier_label"].is_string());
        assert!(json["cost_savings"].is_number());
    }
}
