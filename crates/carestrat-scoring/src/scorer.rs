//! Per-patient score computation.

use std::sync::Arc;

use carestrat_features::{IntakeRecord, derive, normalize};
use carestrat_model::{ModelBundle, SchemaError, ScoreSet};

/// Scores one patient against every target of an injected model bundle.
///
/// Two entry points mirror the two shapes a patient record arrives in:
/// [`score_intake`](Self::score_intake) for raw intake (derives engineered
/// features first) and [`score_enriched`](Self::score_enriched) for records
/// that already carry them (persisted analysis rows). Re-deriving an enriched
/// record would misread its zero-valued condition flags as checked
/// checkboxes, so the caller states which shape it holds.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    bundle: Arc<ModelBundle>,
}

impl RiskScorer {
    #[must_use]
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self { bundle }
    }

    #[must_use]
    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }

    /// Scores a raw intake record: derive, normalize, predict.
    pub fn score_intake(&self, raw: &IntakeRecord) -> Result<ScoreSet, SchemaError> {
        self.score_enriched(&derive::enrich_intake(raw))
    }

    /// Scores a record that already carries the engineered features.
    pub fn score_enriched(&self, enriched: &IntakeRecord) -> Result<ScoreSet, SchemaError> {
        let vector = normalize::feature_vector(enriched, self.bundle.feature_columns());
        self.bundle.predict(&vector)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use carestrat_model::{
        ClassifierArtifact, ModelSetArtifact, RiskTarget, TransformArtifact,
    };

    use super::*;

    fn bundle() -> Arc<ModelBundle> {
        let columns = ["age", "sp_chf", "prior_hospitalization"];
        let transform = TransformArtifact {
            means: vec![72.0, 0.0, 0.0],
            scales: vec![8.0, 1.0, 1.0],
        };
        let models: BTreeMap<_, _> = RiskTarget::ALL
            .into_iter()
            .map(|target| {
                (
                    target,
                    ClassifierArtifact::Logistic {
                        coefficients: vec![0.8, 1.2, 0.6],
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
        Arc::new(ModelBundle::from_artifacts(transform, models).unwrap())
    }

    #[test]
    fn test_intake_path_derives_before_predicting() {
        let scorer = RiskScorer::new(bundle());
        let mut raw = IntakeRecord::new();
        raw.insert("AGE", 80);
        raw.insert("SP_CHF", "on");
        raw.insert("inpatient_admissions", 2);

        let mut enriched = IntakeRecord::new();
        enriched.insert("age", 80);
        enriched.insert("sp_chf", 1);
        enriched.insert("prior_hospitalization", 1);

        let from_intake = scorer.score_intake(&raw).unwrap();
        let from_enriched = scorer.score_enriched(&enriched).unwrap();
        assert_eq!(from_intake, from_enriched);
    }

    #[test]
    fn test_scores_are_probabilities() {
        let scorer = RiskScorer::new(bundle());
        let mut raw = IntakeRecord::new();
        raw.insert("age", 95);
        raw.insert("sp_chf", 1);

        let scores = scorer.score_intake(&raw).unwrap();
        for target in RiskTarget::ALL {
            assert!((0.0..=1.0).contains(&scores.get(target)));
        }
    }

    #[test]
    fn test_empty_record_scores_without_error() {
        let scorer = RiskScorer::new(bundle());
        assert!(scorer.score_intake(&IntakeRecord::new()).is_ok());
    }
}
