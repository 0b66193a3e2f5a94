//! Feature scalers fitted during training

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, InferenceError};
use super::features::FEATURE_COUNT;

/// Maps raw features onto the range the model was trained on
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;
}

/// Scaler parameters as persisted in the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerParams {
    /// `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl ScalerParams {
    /// Check widths and values against the model's feature layout
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let (offset, scale) = match self {
            ScalerParams::Standard { mean, scale } => (mean, scale),
            ScalerParams::MinMax { min, scale } => (min, scale),
        };

        for values in [offset, scale] {
            check_width("scaler", values)?;
            check_finite("scaler", values)?;
        }

        if let ScalerParams::Standard { scale, .. } = self {
            if scale.iter().any(|s| *s == 0.0) {
                return Err(ArtifactError::InvalidValue(
                    "standard scaler has a zero scale".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl FeatureScaler for ScalerParams {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        let scaled: Vec<f64> = match self {
            ScalerParams::Standard { mean, scale } => {
                expect_width(mean.len(), features.len())?;
                features
                    .iter()
                    .zip(mean.iter().zip(scale))
                    .map(|(x, (m, s))| (x - m) / s)
                    .collect()
            }
            ScalerParams::MinMax { min, scale } => {
                expect_width(min.len(), features.len())?;
                features
                    .iter()
                    .zip(min.iter().zip(scale))
                    .map(|(x, (lo, s))| x * s + lo)
                    .collect()
            }
        };

        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite("scaler"));
        }
        Ok(scaled)
    }
}

pub(crate) fn expect_width(expected: usize, actual: usize) -> Result<(), InferenceError> {
    if expected != actual {
        return Err(InferenceError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

pub(crate) fn check_width(component: &'static str, values: &[f64]) -> Result<(), ArtifactError> {
    if values.len() != FEATURE_COUNT {
        return Err(ArtifactError::InvalidShape {
            component,
            expected: FEATURE_COUNT,
            actual: values.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_finite(component: &'static str, values: &[f64]) -> Result<(), ArtifactError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ArtifactError::InvalidValue(format!(
            "{} parameters must be finite",
            component
        )));
    }
    Ok(())
}
