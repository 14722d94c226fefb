//! The validated runtime model bundle.

use chrono::{DateTime, Utc};

use crate::{
    ConfigError, SchemaError,
    artifact::{ModelSetArtifact, TransformArtifact},
    classifier::{BoxedClassifier, Classifier},
    scaler::StandardScaler,
    target::{RiskTarget, ScoreSet},
};

/// One classifier per target, proven complete at construction.
#[derive(Debug, Clone)]
struct ClassifierSet {
    hospitalization_30d: BoxedClassifier,
    hospitalization_60d: BoxedClassifier,
    hospitalization_90d: BoxedClassifier,
    mortality: BoxedClassifier,
}

impl ClassifierSet {
    fn get(&self, target: RiskTarget) -> &dyn Classifier {
        match target {
            RiskTarget::Hospitalization30d => self.hospitalization_30d.as_ref(),
            RiskTarget::Hospitalization60d => self.hospitalization_60d.as_ref(),
            RiskTarget::Hospitalization90d => self.hospitalization_90d.as_ref(),
            RiskTarget::Mortality => self.mortality.as_ref(),
        }
    }
}

/// A fitted feature transform plus one fitted classifier per target,
/// validated against the canonical feature-column list.
///
/// Constructed once at process start; immutable afterwards. Prediction
/// touches no mutable state, so a bundle behind an `Arc` serves unbounded
/// concurrent scoring calls without synchronization.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    name: String,
    trained_at: DateTime<Utc>,
    feature_columns: Vec<String>,
    scaler: StandardScaler,
    classifiers: ClassifierSet,
}

impl ModelBundle {
    /// Builds a bundle from its two persisted artifacts, checking every
    /// schema invariant: scaler shape, transform width against the column
    /// list, per-classifier width, and presence of all four targets.
    pub fn from_artifacts(
        transform: TransformArtifact,
        models: ModelSetArtifact,
    ) -> Result<Self, ConfigError> {
        let scaler = StandardScaler::new(transform.means, transform.scales)?;
        let ModelSetArtifact {
            name,
            trained_at,
            feature_columns,
            models: mut artifacts,
        } = models;

        if scaler.n_features() != feature_columns.len() {
            return Err(ConfigError::ColumnCountMismatch {
                fitted: scaler.n_features(),
                listed: feature_columns.len(),
            });
        }

        let mut take = |target: RiskTarget| -> Result<BoxedClassifier, ConfigError> {
            let classifier = artifacts
                .remove(&target)
                .ok_or(ConfigError::MissingTarget { target })?
                .into_classifier();
            if classifier.n_features() != feature_columns.len() {
                return Err(ConfigError::ClassifierWidthMismatch {
                    target,
                    expected: classifier.n_features(),
                    listed: feature_columns.len(),
                });
            }
            Ok(classifier)
        };

        let classifiers = ClassifierSet {
            hospitalization_30d: take(RiskTarget::Hospitalization30d)?,
            hospitalization_60d: take(RiskTarget::Hospitalization60d)?,
            hospitalization_90d: take(RiskTarget::Hospitalization90d)?,
            mortality: take(RiskTarget::Mortality)?,
        };

        Ok(Self {
            name,
            trained_at,
            feature_columns,
            scaler,
            classifiers,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    /// The canonical ordered feature-column list every input vector must
    /// follow.
    #[must_use]
    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    /// The fitted classifier for one target.
    #[must_use]
    pub fn classifier(&self, target: RiskTarget) -> &dyn Classifier {
        self.classifiers.get(target)
    }

    /// Scales the input vector and asks each classifier for its
    /// positive-class probability.
    pub fn predict(&self, features: &[f64]) -> Result<ScoreSet, SchemaError> {
        let scaled = self.scaler.transform(features)?;
        let score = |target| self.classifiers.get(target).predict_probability(&scaled);
        Ok(ScoreSet {
            hospitalization_30d: score(RiskTarget::Hospitalization30d),
            hospitalization_60d: score(RiskTarget::Hospitalization60d),
            hospitalization_90d: score(RiskTarget::Hospitalization90d),
            mortality: score(RiskTarget::Mortality),
        })
    }
}
