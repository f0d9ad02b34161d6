//! Prediction metrics (Prometheus)

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::warn;

const PREDICT_REQUESTS: &str = "predict_requests_total";
const PREDICT_LATENCY: &str = "predict_latency_seconds";

/// Terminal outcome of a prediction request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    BadRequest,
    ModelUnavailable,
    ModelError,
}

impl Outcome {
    /// Label value
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::BadRequest => "bad_request",
            Outcome::ModelUnavailable => "model_unavailable",
            Outcome::ModelError => "model_error",
        }
    }
}

/// Install the global Prometheus recorder.
///
/// Returns `None` if a recorder is already installed.
pub fn install_recorder() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            describe_counter!(PREDICT_REQUESTS, "Prediction requests by outcome");
            describe_histogram!(PREDICT_LATENCY, "Model inference latency");
            Some(handle)
        }
        Err(e) => {
            warn!("Metrics recorder not installed: {}", e);
            None
        }
    }
}

/// Count a finished prediction request
pub fn record_outcome(outcome: Outcome) {
    counter!(PREDICT_REQUESTS, "outcome" => outcome.as_str()).increment(1);
}

/// Record inference latency
pub fn record_latency(seconds: f64) {
    histogram!(PREDICT_LATENCY).record(seconds);
}
