//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use data_validator::ValidationError;
use inference_engine::InferenceError;
use serde::Serialize;
use thiserror::Error;

/// Message returned when the model failed to load at startup
pub const MODEL_NOT_LOADED: &str = "Model not loaded on server.";

/// Message returned when the model fails on a request
pub const PREDICTION_FAILED: &str = "Prediction failed on server. Check logs.";

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request
    #[error(transparent)]
    BadRequest(#[from] ValidationError),
    /// Body exceeded the configured size limit
    #[error("request body too large")]
    PayloadTooLarge,
    /// Body could not be read from the connection
    #[error("request body could not be read")]
    UnreadableBody,
    /// No model available
    #[error("model not loaded")]
    ModelNotLoaded,
    /// Model raised during prediction; detail stays server-side
    #[error("prediction failed: {0}")]
    PredictionFailed(InferenceError),
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::ModelUnavailable => ApiError::ModelNotLoaded,
            other => ApiError::PredictionFailed(other),
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::UnreadableBody => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ModelNotLoaded | ApiError::PredictionFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to clients
    pub fn client_message(&self) -> String {
        match self {
            ApiError::BadRequest(e) => e.to_string(),
            ApiError::PayloadTooLarge | ApiError::UnreadableBody => self.to_string(),
            ApiError::ModelNotLoaded => MODEL_NOT_LOADED.to_string(),
            ApiError::PredictionFailed(_) => PREDICTION_FAILED.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.client_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(ValidationError::MissingField("seats"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "missing or empty field: seats");
    }

    #[test]
    fn test_unavailable_maps_to_not_loaded() {
        let err = ApiError::from(InferenceError::ModelUnavailable);
        assert!(matches!(err, ApiError::ModelNotLoaded));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_oversized_body_status() {
        let err = ApiError::PayloadTooLarge;
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.client_message(), "request body too large");
    }

    #[test]
    fn test_model_error_hides_detail() {
        let err = ApiError::from(InferenceError::NonFinite);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), PREDICTION_FAILED);
    }
}
