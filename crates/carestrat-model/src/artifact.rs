//! Persisted JSON schema of a trained model bundle.
//!
//! Training persists two addressable blobs:
//!
//! 1. [`TransformArtifact`] - the fitted feature transform
//! 2. [`ModelSetArtifact`] - one classifier per target plus the canonical
//!    ordered feature-column list and training metadata
//!
//! Both are plain serde documents; turning them into a validated runtime
//! bundle is [`ModelBundle::from_artifacts`](crate::bundle::ModelBundle::from_artifacts).
//! Classifier kinds form a closed set: an artifact naming an unknown kind or
//! an unknown target fails at parse time, not at prediction time.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    classifier::{
        BoostedStumpsClassifier, BoxedClassifier, CalibratedClassifier, DecisionStump,
        LogisticClassifier,
    },
    target::RiskTarget,
};

/// The fitted feature transform blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformArtifact {
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

/// The classifier-set blob: target to fitted classifier, the canonical
/// ordered feature columns, and training metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSetArtifact {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub feature_columns: Vec<String>,
    pub models: BTreeMap<RiskTarget, ClassifierArtifact>,
}

/// One persisted classifier, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Logistic {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    BoostedStumps {
        stumps: Vec<DecisionStump>,
        bias: f64,
        feature_importances: Vec<f64>,
    },
    Calibrated {
        base: Box<ClassifierArtifact>,
        slope: f64,
        intercept: f64,
    },
}

impl ClassifierArtifact {
    /// Builds the runtime classifier for this artifact.
    #[must_use]
    pub fn into_classifier(self) -> BoxedClassifier {
        match self {
            ClassifierArtifact::Logistic {
                coefficients,
                intercept,
            } => Box::new(LogisticClassifier::new(coefficients, intercept)),
            ClassifierArtifact::BoostedStumps {
                stumps,
                bias,
                feature_importances,
            } => Box::new(BoostedStumpsClassifier::new(stumps, bias, feature_importances)),
            ClassifierArtifact::Calibrated {
                base,
                slope,
                intercept,
            } => Box::new(CalibratedClassifier::new(
                base.into_classifier(),
                slope,
                intercept,
            )),
        }
    }
}
