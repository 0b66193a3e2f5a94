//! Feature model
//!
//! Turns a (possibly partial) form submission into the fixed-width vector
//! the scaler and regression model were fitted on.

use crate::error::ValidationError;

/// Number of model inputs
pub const FEATURE_COUNT: usize = 3;

/// Raw user inputs for one predict action
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictionRequest {
    pub year: Option<f64>,
    pub mileage: Option<f64>,
    pub max_power: Option<f64>,
}

/// Fallback values for the optional inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureDefaults {
    pub mileage: f64,
    pub max_power: f64,
}

/// Complete model input after default substitution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub year: f64,
    pub mileage: f64,
    pub max_power: f64,
}

impl FeatureVector {
    /// Values in training column order: year, mileage, max_power
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [self.year, self.mileage, self.max_power]
    }
}

/// Fill absent optional fields from `defaults`. Year has no default.
///
/// Only presence is checked; negative or implausible values pass through
/// to the model unchanged.
pub fn assemble(
    request: &PredictionRequest,
    defaults: &FeatureDefaults,
) -> Result<FeatureVector, ValidationError> {
    let year = request.year.ok_or(ValidationError::YearRequired)?;

    Ok(FeatureVector {
        year,
        mileage: request.mileage.unwrap_or(defaults.mileage),
        max_power: request.max_power.unwrap_or(defaults.max_power),
    })
}
