//! Model artifact store
//!
//! The bundle is a JSON object with the keys `model`, `scaler`,
//! `mileage_default` and `max_power_default`. It is read once at startup
//! and shared read-only by every request afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ArtifactError;
use super::features::FeatureDefaults;
use super::regressor::{ModelParams, PriceRegressor};
use super::scaler::{FeatureScaler, ScalerParams};

/// Persisted layout of the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub model: ModelParams,
    pub scaler: ScalerParams,
    pub max_power_default: f64,
    pub mileage_default: f64,
}

impl ArtifactBundle {
    fn validate(&self) -> Result<(), ArtifactError> {
        self.model.validate()?;
        self.scaler.validate()?;

        for (name, value) in [
            ("mileage_default", self.mileage_default),
            ("max_power_default", self.max_power_default),
        ] {
            if !value.is_finite() {
                return Err(ArtifactError::InvalidValue(format!("{} must be finite", name)));
            }
        }
        Ok(())
    }
}

/// Fitted model, fitted scaler and defaults for the optional inputs
pub struct ModelArtifact {
    pub model: Box<dyn PriceRegressor>,
    pub scaler: Box<dyn FeatureScaler>,
    pub defaults: FeatureDefaults,
    /// SHA-256 of the bundle bytes, when loaded from disk
    pub fingerprint: Option<String>,
}

impl std::fmt::Debug for ModelArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifact")
            .field("defaults", &self.defaults)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}

impl ModelArtifact {
    pub fn new(
        model: Box<dyn PriceRegressor>,
        scaler: Box<dyn FeatureScaler>,
        defaults: FeatureDefaults,
    ) -> Self {
        Self {
            model,
            scaler,
            defaults,
            fingerprint: None,
        }
    }

    /// Load the bundle from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        tracing::info!("Loading model bundle from: {}", path.display());

        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// Parse and validate bundle bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let bundle: ArtifactBundle = serde_json::from_slice(bytes)?;
        bundle.validate()?;

        let defaults = FeatureDefaults {
            mileage: bundle.mileage_default,
            max_power: bundle.max_power_default,
        };

        let mut artifact = Self::new(Box::new(bundle.model), Box::new(bundle.scaler), defaults);
        artifact.fingerprint = Some(format!("{:x}", Sha256::digest(bytes)));
        Ok(artifact)
    }
}
