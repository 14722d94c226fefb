//! Binary classifiers and their capability surface.
//!
//! Every fitted classifier answers one question - the positive-class
//! probability for a scaled feature vector - through the [`Classifier`]
//! trait. Beyond that, classifiers differ in what they can explain about
//! themselves, and that difference is modeled as optional capabilities rather
//! than runtime attribute probing:
//!
//! - [`feature_importances`](Classifier::feature_importances) - non-negative
//!   per-feature importance scores (tree ensembles)
//! - [`linear_coefficients`](Classifier::linear_coefficients) - signed
//!   per-feature weights (linear models)
//! - [`base_estimator`](Classifier::base_estimator) - the wrapped estimator
//!   of a calibration wrapper, which carries the capabilities itself
//!
//! [`resolve_importances`] walks those capabilities in priority order to
//! produce one non-negative importance value per feature, or `None` when the
//! classifier genuinely cannot explain itself.

use std::fmt;

/// Logistic link shared by every classifier kind.
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// A fitted binary classifier over scaled feature vectors.
///
/// Implementations are immutable after construction and hold no interior
/// state, so one instance serves unbounded concurrent predictions.
pub trait Classifier: fmt::Debug + Send + Sync {
    /// Short artifact-schema name of this classifier kind.
    #[must_use]
    fn kind(&self) -> &'static str;

    /// Number of features the classifier was fitted on.
    #[must_use]
    fn n_features(&self) -> usize;

    #[must_use]
    fn clone_boxed(&self) -> BoxedClassifier;

    /// Positive-class probability in [0, 1].
    ///
    /// `features` must have [`n_features`](Self::n_features) values; the
    /// owning bundle validates widths before calling.
    #[must_use]
    fn predict_probability(&self, features: &[f64]) -> f64;

    /// Non-negative per-feature importance scores, when the model form has
    /// them.
    #[must_use]
    fn feature_importances(&self) -> Option<&[f64]> {
        None
    }

    /// Signed per-feature linear coefficients, when the model form has them.
    #[must_use]
    fn linear_coefficients(&self) -> Option<&[f64]> {
        None
    }

    /// The wrapped estimator, when this classifier is a wrapper.
    #[must_use]
    fn base_estimator(&self) -> Option<&dyn Classifier> {
        None
    }
}

pub type BoxedClassifier = Box<dyn Classifier>;

impl Clone for BoxedClassifier {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

impl Classifier for BoxedClassifier {
    fn kind(&self) -> &'static str {
        self.as_ref().kind()
    }

    fn n_features(&self) -> usize {
        self.as_ref().n_features()
    }

    fn clone_boxed(&self) -> BoxedClassifier {
        self.as_ref().clone_boxed()
    }

    fn predict_probability(&self, features: &[f64]) -> f64 {
        self.as_ref().predict_probability(features)
    }

    fn feature_importances(&self) -> Option<&[f64]> {
        self.as_ref().feature_importances()
    }

    fn linear_coefficients(&self) -> Option<&[f64]> {
        self.as_ref().linear_coefficients()
    }

    fn base_estimator(&self) -> Option<&dyn Classifier> {
        self.as_ref().base_estimator()
    }
}

/// Resolves one importance value per feature from a classifier's
/// capabilities.
///
/// Source priority, first available wins:
///
/// 1. direct non-negative importance scores
/// 2. absolute values of linear coefficients
/// 3. recursion into the wrapped base estimator
///
/// Returns `None` when no source is available anywhere in the chain.
#[must_use]
pub fn resolve_importances(classifier: &dyn Classifier) -> Option<Vec<f64>> {
    if let Some(importances) = classifier.feature_importances() {
        return Some(importances.to_vec());
    }
    if let Some(coefficients) = classifier.linear_coefficients() {
        return Some(coefficients.iter().map(|c| c.abs()).collect());
    }
    classifier.base_estimator().and_then(resolve_importances)
}

/// Logistic-regression classifier: sigmoid of a fitted linear predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticClassifier {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticClassifier {
    #[must_use]
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }
}

impl Classifier for LogisticClassifier {
    fn kind(&self) -> &'static str {
        "logistic"
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn clone_boxed(&self) -> BoxedClassifier {
        Box::new(self.clone())
    }

    fn predict_probability(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.coefficients.len());
        let linear: f64 = std::iter::zip(&self.coefficients, features)
            .map(|(w, x)| w * x)
            .sum();
        sigmoid(linear + self.intercept)
    }

    fn linear_coefficients(&self) -> Option<&[f64]> {
        Some(&self.coefficients)
    }
}

/// One depth-1 regression tree of a boosted ensemble.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecisionStump {
    pub feature_index: usize,
    pub threshold: f64,
    pub left_value: f64,
    pub right_value: f64,
}

impl DecisionStump {
    fn response(&self, features: &[f64]) -> f64 {
        if features[self.feature_index] <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Gradient-boosted ensemble of decision stumps with a logistic link.
///
/// Carries the per-feature importance scores accumulated during training;
/// features no stump splits on have importance 0.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostedStumpsClassifier {
    stumps: Vec<DecisionStump>,
    bias: f64,
    importances: Vec<f64>,
}

impl BoostedStumpsClassifier {
    /// # Panics
    ///
    /// Panics if a stump's `feature_index` is out of range for the
    /// importance vector.
    #[must_use]
    pub fn new(stumps: Vec<DecisionStump>, bias: f64, importances: Vec<f64>) -> Self {
        for stump in &stumps {
            assert!(stump.feature_index < importances.len());
        }
        Self {
            stumps,
            bias,
            importances,
        }
    }
}

impl Classifier for BoostedStumpsClassifier {
    fn kind(&self) -> &'static str {
        "boosted_stumps"
    }

    fn n_features(&self) -> usize {
        self.importances.len()
    }

    fn clone_boxed(&self) -> BoxedClassifier {
        Box::new(self.clone())
    }

    fn predict_probability(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.importances.len());
        let raw: f64 = self.stumps.iter().map(|s| s.response(features)).sum();
        sigmoid(self.bias + raw)
    }

    fn feature_importances(&self) -> Option<&[f64]> {
        Some(&self.importances)
    }
}

/// Platt-scaled calibration wrapper around another classifier.
///
/// Exposes neither importances nor coefficients itself; explainability
/// queries must recurse through [`base_estimator`](Classifier::base_estimator).
#[derive(Debug, Clone)]
pub struct CalibratedClassifier {
    base: BoxedClassifier,
    slope: f64,
    intercept: f64,
}

impl CalibratedClassifier {
    #[must_use]
    pub fn new(base: BoxedClassifier, slope: f64, intercept: f64) -> Self {
        Self {
            base,
            slope,
            intercept,
        }
    }
}

impl Classifier for CalibratedClassifier {
    fn kind(&self) -> &'static str {
        "calibrated"
    }

    fn n_features(&self) -> usize {
        self.base.n_features()
    }

    fn clone_boxed(&self) -> BoxedClassifier {
        Box::new(self.clone())
    }

    fn predict_probability(&self, features: &[f64]) -> f64 {
        let raw = self.base.predict_probability(features);
        sigmoid(self.slope * raw + self.intercept)
    }

    fn base_estimator(&self) -> Option<&dyn Classifier> {
        Some(self.base.as_ref())
    }
}
