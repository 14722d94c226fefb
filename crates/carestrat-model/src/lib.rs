//! Fitted risk-model inference.
//!
//! A trained model bundle pairs one fitted feature transform with one fitted
//! binary classifier per predicted outcome. This crate holds the runtime form
//! of that bundle and the serde schema of its persisted artifacts; it consumes
//! plain `&[f64]` feature vectors and knows nothing about intake records.
//!
//! # Architecture
//!
//! - [`target`] - the four predicted outcomes and their external names
//! - [`classifier`] - the [`Classifier`](classifier::Classifier) trait, its
//!   optional capability surface (importances, coefficients, wrapped base
//!   estimator), and the concrete classifier kinds
//! - [`scaler`] - the fitted z-score feature transform
//! - [`artifact`] - the persisted JSON schema for both blobs
//! - [`bundle`] - [`ModelBundle`](bundle::ModelBundle), validated at
//!   construction, immutable and lock-free afterwards
//!
//! # Lifecycle
//!
//! A bundle is constructed once at process start from its two artifacts and
//! shared read-only for the life of the process. Construction is where every
//! schema invariant is checked ([`ConfigError`]); prediction only re-checks
//! the input vector width ([`SchemaError`]). There is no uninitialized bundle
//! state: holding a `ModelBundle` proves loading succeeded.

pub use self::{
    artifact::{ClassifierArtifact, ModelSetArtifact, TransformArtifact},
    bundle::ModelBundle,
    classifier::{BoxedClassifier, Classifier, resolve_importances},
    scaler::StandardScaler,
    target::{RiskTarget, ScoreSet},
};

pub mod artifact;
pub mod bundle;
pub mod classifier;
pub mod scaler;
pub mod target;

/// Artifact-level schema mismatch, detected when a bundle is constructed.
/// Fatal at startup: a process must not serve predictions from a bundle that
/// failed validation.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("transform is fitted for {means} means but {scales} scales")]
    ScalerShapeMismatch { means: usize, scales: usize },
    #[display("transform is fitted for {fitted} columns but the bundle lists {listed}")]
    ColumnCountMismatch { fitted: usize, listed: usize },
    #[display(
        "classifier for target {target} expects {expected} features but the bundle lists {listed} columns"
    )]
    ClassifierWidthMismatch {
        target: target::RiskTarget,
        expected: usize,
        listed: usize,
    },
    #[display("bundle defines no classifier for target {target}")]
    MissingTarget { target: target::RiskTarget },
}

/// Input vector width mismatch at prediction time. Surfaced to the caller as
/// a request-level failure; never retried, since inference is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("feature vector has {actual} values but the model expects {expected}")]
pub struct SchemaError {
    pub expected: usize,
    pub actual: usize,
}
