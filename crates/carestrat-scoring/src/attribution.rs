//! Condition-level attribution of mortality risk.
//!
//! Given a patient's chronic-condition flags and the mortality classifier's
//! learned feature weights, attribution apportions the mortality risk across
//! the conditions the patient actually has, as relative percentages summing
//! to (approximately) 100.
//!
//! # Algorithm
//!
//! 1. Resolve one importance value per feature column from the mortality
//!    classifier's capabilities
//!    ([`resolve_importances`](carestrat_model::resolve_importances):
//!    importances, else |coefficients|, else the wrapped base estimator)
//! 2. Restrict to the patient's present conditions and sum their importances
//! 3. When the sum is positive, each present condition's impact is its share
//!    of that sum, as a percentage rounded to two decimals; conditions whose
//!    share is zero are omitted
//! 4. When weights are unavailable or every present condition's weight is
//!    zero, fall back to a uniform split of 100 across the present
//!    conditions - a patient with at least one condition always receives a
//!    non-empty map
//! 5. A patient with no present conditions yields an empty map; that is a
//!    valid answer, not an error
//!
//! Attribution is defined against the mortality classifier only; the
//! hospitalization classifiers are not consulted.

use std::{collections::BTreeMap, sync::Arc};

use carestrat_features::{IntakeRecord, conditions};
use carestrat_model::{ModelBundle, RiskTarget, resolve_importances};

/// Condition display name to relative impact percentage.
pub type ConditionImpactMap = BTreeMap<&'static str, f64>;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Explains mortality risk per present condition for an injected bundle.
///
/// Invocable standalone with any persisted patient record; full scoring is
/// not required first.
#[derive(Debug, Clone)]
pub struct ConditionAttributor {
    bundle: Arc<ModelBundle>,
}

impl ConditionAttributor {
    #[must_use]
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self { bundle }
    }

    /// Computes the relative impact map for a patient record.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn condition_impacts(&self, record: &IntakeRecord) -> ConditionImpactMap {
        let present = conditions::present_conditions(record);
        if present.is_empty() {
            return ConditionImpactMap::new();
        }

        let mut impacts = ConditionImpactMap::new();
        let classifier = self.bundle.classifier(RiskTarget::Mortality);
        if let Some(importances) = resolve_importances(classifier) {
            let columns = self.bundle.feature_columns();
            let weight_of = |code: &str| {
                columns
                    .iter()
                    .position(|column| column == code)
                    .map_or(0.0, |index| importances[index])
            };

            let total: f64 = present
                .iter()
                .map(|condition| weight_of(condition.code()))
                .sum();
            if total > 0.0 {
                for condition in &present {
                    let relative = weight_of(condition.code()) / total * 100.0;
                    if relative > 0.0 {
                        impacts.insert(condition.display_name(), round2(relative));
                    }
                }
            }
        }

        // Weights unavailable, or every present condition carried zero
        // weight: split the impact evenly instead of answering nothing.
        if impacts.is_empty() {
            let share = round2(100.0 / present.len() as f64);
            for condition in &present {
                impacts.insert(condition.display_name(), share);
            }
        }

        impacts
    }
}
