//! Model Adapter
//!
//! Wraps the loaded price model behind a read-only handle that is shared by
//! every request. A failed load leaves the adapter unavailable instead of
//! stopping the process.

use data_validator::CarRecord;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::artifact::load_artifact;
use crate::pipeline::PricePipeline;
use crate::InferenceError;

/// Anything that can price a validated car record
pub trait PriceModel: Send + Sync {
    /// Predict the price for one record
    fn predict(&self, record: &CarRecord) -> Result<f64, InferenceError>;
}

impl PriceModel for PricePipeline {
    fn predict(&self, record: &CarRecord) -> Result<f64, InferenceError> {
        self.predict_record(record)
    }
}

/// Shared, immutable handle to the loaded model
#[derive(Clone)]
pub struct ModelAdapter {
    /// Loaded model, `None` if loading failed
    model: Option<Arc<dyn PriceModel>>,
    /// Where the model came from
    source: String,
}

impl ModelAdapter {
    /// Load the model artifact, logging and swallowing any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        info!("Loading price model from {}", path.display());

        match load_artifact(path) {
            Ok(pipeline) => {
                info!("Model loaded successfully");
                Self::from_model(pipeline, path.display().to_string())
            }
            Err(e) => {
                error!("Error loading model: {}", e);
                Self::unavailable(path.display().to_string())
            }
        }
    }

    /// Wrap an already constructed model
    pub fn from_model(model: impl PriceModel + 'static, source: impl Into<String>) -> Self {
        Self {
            model: Some(Arc::new(model)),
            source: source.into(),
        }
    }

    /// Adapter with no model behind it
    pub fn unavailable(source: impl Into<String>) -> Self {
        Self {
            model: None,
            source: source.into(),
        }
    }

    /// Run a single prediction
    pub fn predict(&self, record: &CarRecord) -> Result<f64, InferenceError> {
        let model = self.model.as_ref().ok_or(InferenceError::ModelUnavailable)?;

        let start = Instant::now();
        let price = model.predict(record)?;
        debug!("Inference completed in {}us", start.elapsed().as_micros());

        if !price.is_finite() {
            return Err(InferenceError::NonFinite);
        }
        Ok(price)
    }

    /// Check if a model is loaded
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Get model source (artifact path)
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("loaded", &self.is_loaded())
            .field("source", &self.source)
            .finish()
    }
}
