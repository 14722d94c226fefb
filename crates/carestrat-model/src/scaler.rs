//! Fitted z-score feature transform.

use crate::{ConfigError, SchemaError};

/// Standard scaler fitted at training time: per-column mean and scale.
///
/// Applied to every feature vector before classification so that fitted
/// coefficients and split thresholds see the distribution they were trained
/// on.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    means: Vec<f64>,
    scales: Vec<f64>,
}

impl StandardScaler {
    pub fn new(means: Vec<f64>, scales: Vec<f64>) -> Result<Self, ConfigError> {
        if means.len() != scales.len() {
            return Err(ConfigError::ScalerShapeMismatch {
                means: means.len(),
                scales: scales.len(),
            });
        }
        Ok(Self { means, scales })
    }

    /// Number of feature columns the scaler was fitted on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// Applies `(x - mean) / scale` per column. A zero scale (constant
    /// training column) centers without dividing.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, SchemaError> {
        if features.len() != self.n_features() {
            return Err(SchemaError {
                expected: self.n_features(),
                actual: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(std::iter::zip(&self.means, &self.scales))
            .map(|(x, (mean, scale))| {
                let centered = x - mean;
                if scale.abs() < f64::EPSILON {
                    centered
                } else {
                    centered / scale
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_applies_per_column() {
        let scaler = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 1.0]).unwrap();
        let scaled = scaler.transform(&[14.0, -3.0]).unwrap();
        assert_eq!(scaled, vec![2.0, -3.0]);
    }

    #[test]
    fn test_zero_scale_centers_only() {
        let scaler = StandardScaler::new(vec![5.0], vec![0.0]).unwrap();
        assert_eq!(scaler.transform(&[7.0]).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_width_mismatch_is_schema_error() {
        let scaler = StandardScaler::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
        let err = scaler.transform(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            SchemaError {
                expected: 2,
                actual: 1,
            },
        );
    }

    #[test]
    fn test_shape_mismatch_rejected_at_construction() {
        assert!(StandardScaler::new(vec![0.0], vec![1.0, 1.0]).is_err());
    }
}
