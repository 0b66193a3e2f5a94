//! Regression models mapping scaled features to log-price

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, InferenceError};
use super::scaler::{check_finite, check_width, expect_width};

/// Fitted model producing a single log-space prediction
pub trait PriceRegressor: Send + Sync {
    fn predict(&self, scaled: &[f64]) -> Result<f64, InferenceError>;
}

/// Model parameters as persisted in the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelParams {
    /// `intercept + coef · x`
    Linear { coef: Vec<f64>, intercept: f64 },
}

impl ModelParams {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            ModelParams::Linear { coef, intercept } => {
                check_width("model", coef)?;
                check_finite("model", coef)?;
                check_finite("model", &[*intercept])
            }
        }
    }
}

impl PriceRegressor for ModelParams {
    fn predict(&self, scaled: &[f64]) -> Result<f64, InferenceError> {
        match self {
            ModelParams::Linear { coef, intercept } => {
                expect_width(coef.len(), scaled.len())?;
                let log_price = intercept
                    + coef.iter().zip(scaled).map(|(w, x)| w * x).sum::<f64>();
                Ok(log_price)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_predict() {
        let model = ModelParams::Linear {
            coef: vec![0.5, -0.25, 2.0],
            intercept: 13.0,
        };
        let out = model.predict(&[2.0, 4.0, 0.5]).unwrap();
        assert_eq!(out, 14.0);
    }

    #[test]
    fn test_linear_width_mismatch() {
        let model = ModelParams::Linear {
            coef: vec![1.0; 3],
            intercept: 0.0,
        };
        let err = model.predict(&[1.0; 4]).unwrap_err();
        assert_eq!(err, InferenceError::DimensionMismatch { expected: 3, actual: 4 });
    }

    #[test]
    fn test_validate_rejects_nan_intercept() {
        let model = ModelParams::Linear {
            coef: vec![1.0; 3],
            intercept: f64::NAN,
        };
        assert!(matches!(model.validate(), Err(ArtifactError::InvalidValue(_))));
    }
}
