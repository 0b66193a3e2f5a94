//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Failures while loading the model bundle. Fatal at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read model bundle: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed model bundle: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{component} expects {expected} features, bundle has {actual}")]
    InvalidShape {
        component: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value in model bundle: {0}")]
    InvalidValue(String),
}

/// User-visible input problems
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide the year of manufacture to calculate the price.")]
    YearRequired,
}

/// Failures inside the scaler or regression step
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Feature width mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Non-finite value produced by {0}")]
    NonFinite(&'static str),
}

#[derive(Debug)]
pub enum AppError {
    Inference(InferenceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Inference(err) => {
                tracing::error!("Inference error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed")
            }
        };

        (status, error_message).into_response()
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Inference(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_required_message() {
        assert_eq!(
            ValidationError::YearRequired.to_string(),
            "Please provide the year of manufacture to calculate the price."
        );
    }

    #[test]
    fn test_inference_error_is_500() {
        let err: AppError = InferenceError::NonFinite("regression model").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
