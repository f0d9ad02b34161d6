//! Prediction Route

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use inference_engine::InferenceError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::error::ApiError;
use crate::telemetry::{record_latency, record_outcome, Outcome};
use crate::AppState;

/// Largest request body accepted by `/predict`
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Response for the predict endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
}

/// Round a price to two decimal places.
///
/// Returns `None` when the rounded value is not finite.
pub fn round_price(price: f64) -> Option<f64> {
    let rounded = (price * 100.0).round() / 100.0;
    rounded.is_finite().then_some(rounded)
}

/// Predict a car's price from its attributes
pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    if !state.model.is_loaded() {
        record_outcome(Outcome::ModelUnavailable);
        return Err(ApiError::ModelNotLoaded);
    }

    let body = body.map_err(|rejection| {
        debug!("Unreadable request body: {}", rejection);
        record_outcome(Outcome::BadRequest);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::UnreadableBody
        }
    })?;

    let record = data_validator::validate_body(&body).map_err(|e| {
        if e.is_shape_error() {
            debug!("Rejected request body shape: {}", e);
        } else {
            debug!("Rejected request fields: {}", e);
        }
        record_outcome(Outcome::BadRequest);
        ApiError::BadRequest(e)
    })?;

    let start = Instant::now();
    let predicted_price = state
        .model
        .predict(&record)
        .and_then(|price| round_price(price).ok_or(InferenceError::NonFinite))
        .map_err(|e| {
            match &e {
                InferenceError::ModelUnavailable => record_outcome(Outcome::ModelUnavailable),
                _ => {
                    error!("Prediction failed due to: {} (record: {:?})", e, record);
                    record_outcome(Outcome::ModelError);
                }
            }
            ApiError::from(e)
        })?;
    record_latency(start.elapsed().as_secs_f64());
    record_outcome(Outcome::Ok);

    info!(
        "Predicted {} for {} {} ({} km)",
        predicted_price, record.company, record.year, record.km_driven
    );

    Ok(Json(PredictionResponse { predicted_price }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_price() {
        assert_eq!(round_price(123456.789), Some(123456.79));
        assert_eq!(round_price(99.994), Some(99.99));
        assert_eq!(round_price(-10.456), Some(-10.46));
        assert_eq!(round_price(500000.0), Some(500000.0));
    }

    #[test]
    fn test_round_price_rejects_non_finite() {
        assert_eq!(round_price(f64::NAN), None);
        assert_eq!(round_price(f64::INFINITY), None);
        assert_eq!(round_price(1e307), None);
    }
}
