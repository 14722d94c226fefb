use std::path::Path;

use anyhow::Context;
use carestrat_model::{ModelBundle, ModelSetArtifact, TransformArtifact};

use crate::util;

/// Opens the two persisted model blobs and builds the validated bundle.
///
/// This is the process's single load point: it runs before any scoring and a
/// failure here is fatal, never served around.
pub fn open_bundle<P, Q>(transform_path: P, models_path: Q) -> anyhow::Result<ModelBundle>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let transform: TransformArtifact =
        util::read_json_file("feature transform", &transform_path)?;
    let models: ModelSetArtifact = util::read_json_file("risk model bundle", &models_path)?;

    ModelBundle::from_artifacts(transform, models).with_context(|| {
        format!(
            "Model bundle {} failed validation against transform {}",
            models_path.as_ref().display(),
            transform_path.as_ref().display()
        )
    })
}

#[cfg(test)]
mod tests {
    use carestrat_model::{Classifier as _, RiskTarget};

    use super::*;

    #[test]
    fn test_open_bundle_from_files() {
        let dir = std::env::temp_dir().join("carestrat-open-bundle-test");
        std::fs::create_dir_all(&dir).unwrap();
        let transform_path = dir.join("transform.json");
        let models_path = dir.join("risk_models.json");

        std::fs::write(
            &transform_path,
            r#"{"means": [70.0], "scales": [10.0]}"#,
        )
        .unwrap();
        let classifier = r#"{"kind": "logistic", "coefficients": [0.5], "intercept": 0.0}"#;
        std::fs::write(
            &models_path,
            format!(
                r#"{{
                    "name": "demo",
                    "trained_at": "2026-03-01T00:00:00Z",
                    "feature_columns": ["age"],
                    "models": {{
                        "30d_hospitalization": {classifier},
                        "60d_hospitalization": {classifier},
                        "90d_hospitalization": {classifier},
                        "mortality": {classifier}
                    }}
                }}"#
            ),
        )
        .unwrap();

        let bundle = open_bundle(&transform_path, &models_path).unwrap();
        assert_eq!(bundle.name(), "demo");
        assert_eq!(bundle.feature_columns(), ["age".to_owned()]);
        assert_eq!(bundle.classifier(RiskTarget::Mortality).kind(), "logistic");
    }

    #[test]
    fn test_missing_file_reports_kind_and_path() {
        let err = open_bundle("/nonexistent/t.json", "/nonexistent/m.json").unwrap_err();
        assert!(err.to_string().contains("feature transform"));
    }
}
