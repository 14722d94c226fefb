use std::path::PathBuf;

use carestrat_model::{Classifier as _, ModelBundle, RiskTarget, resolve_importances};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{model, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InspectModelArg {
    /// Path to the fitted feature transform JSON
    #[arg(long)]
    transform: PathBuf,
    /// Path to the risk model bundle JSON
    #[arg(long)]
    models: PathBuf,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct ModelInfo {
    name: String,
    trained_at: DateTime<Utc>,
    feature_count: usize,
    targets: Vec<TargetInfo>,
}

#[derive(Debug, Clone, Serialize)]
struct TargetInfo {
    target: RiskTarget,
    score_field: &'static str,
    classifier_kind: &'static str,
    importances_available: bool,
}

pub(crate) fn run(arg: &InspectModelArg) -> anyhow::Result<()> {
    let bundle = model::open_bundle(&arg.transform, &arg.models)?;
    let info = model_info(&bundle);
    Output::save_json(&info, arg.output.clone())
}

fn model_info(bundle: &ModelBundle) -> ModelInfo {
    let targets = RiskTarget::ALL
        .into_iter()
        .map(|target| {
            let classifier = bundle.classifier(target);
            TargetInfo {
                target,
                score_field: target.score_field(),
                classifier_kind: classifier.kind(),
                importances_available: resolve_importances(classifier).is_some(),
            }
        })
        .collect();

    ModelInfo {
        name: bundle.name().to_owned(),
        trained_at: bundle.trained_at(),
        feature_count: bundle.feature_columns().len(),
        targets,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use carestrat_model::{ClassifierArtifact, ModelSetArtifact, TransformArtifact};

    use super::*;

    #[test]
    fn test_model_info_reports_capabilities() {
        let transform = TransformArtifact {
            means: vec![0.0],
            scales: vec![1.0],
        };
        let logistic = ClassifierArtifact::Logistic {
            coefficients: vec![0.5],
            intercept: 0.0,
        };
        let models: BTreeMap<_, _> = RiskTarget::ALL
            .into_iter()
            .map(|target| (target, logistic.clone()))
            .collect();
        let bundle = ModelBundle::from_artifacts(
            transform,
            ModelSetArtifact {
                name: "demo".to_owned(),
                trained_at: "2026-03-01T00:00:00Z".parse().unwrap(),
                feature_columns: vec!["age".to_owned()],
                models,
            },
        )
        .unwrap();

        let info = model_info(&bundle);
        assert_eq!(info.feature_count, 1);
        assert_eq!(info.targets.len(), 4);
        for target in &info.targets {
            assert_eq!(target.classifier_kind, "logistic");
            assert!(target.importances_available);
        }
    }
}
