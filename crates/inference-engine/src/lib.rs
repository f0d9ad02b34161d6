//! Car Price Inference Engine
//!
//! Loads the pre-trained price regression model from its binary artifact and
//! serves single-record predictions.

mod artifact;
mod engine;
mod pipeline;

pub use artifact::{load_artifact, save_artifact, ARTIFACT_MAGIC, ARTIFACT_VERSION};
pub use engine::{ModelAdapter, PriceModel};
pub use pipeline::{CategoricalEncoder, NumericTerm, PricePipeline};

use data_validator::Field;
use thiserror::Error;

/// Errors during model loading or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model not loaded")]
    ModelUnavailable,
    #[error("Failed to access model artifact {path}: {source}")]
    ArtifactIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Model artifact has an unrecognized header")]
    BadMagic,
    #[error("Unsupported model artifact version {found} (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },
    #[error("Model artifact could not be decoded: {0}")]
    Decode(String),
    #[error("Model could not be encoded: {0}")]
    Encode(String),
    #[error("Inconsistent model: {0}")]
    InconsistentModel(String),
    #[error("Unknown category {value:?} for column {field}")]
    UnknownCategory { field: Field, value: String },
    #[error("Model produced a non-finite prediction")]
    NonFinite,
}
