//! Inference engine
//!
//! scale → predict → exp. The model was fitted on log-price, so the raw
//! prediction is exponentiated back into currency units.

use crate::error::InferenceError;
use crate::models::{FeatureVector, ModelArtifact};

/// Predict the selling price for an assembled feature vector
pub fn predict(vector: &FeatureVector, artifact: &ModelArtifact) -> Result<f64, InferenceError> {
    let scaled = artifact.scaler.transform(&vector.to_array())?;
    let log_price = artifact.model.predict(&scaled)?;

    let price = log_price.exp();
    if !price.is_finite() {
        return Err(InferenceError::NonFinite("regression model"));
    }
    Ok(price)
}
