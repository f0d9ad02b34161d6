//! Binary Model Artifact
//!
//! Layout: 4-byte magic, little-endian u16 format version, then the
//! postcard-encoded [`PricePipeline`].

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::pipeline::PricePipeline;
use crate::InferenceError;

/// Leading bytes of every artifact
pub const ARTIFACT_MAGIC: [u8; 4] = *b"CPPM";

/// Current artifact format version
pub const ARTIFACT_VERSION: u16 = 1;

const HEADER_LEN: usize = ARTIFACT_MAGIC.len() + 2;

/// Encode a pipeline into artifact bytes
pub fn encode(pipeline: &PricePipeline) -> Result<Vec<u8>, InferenceError> {
    pipeline.validate()?;
    let payload =
        postcard::to_allocvec(pipeline).map_err(|e| InferenceError::Encode(e.to_string()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&ARTIFACT_MAGIC);
    bytes.extend_from_slice(&ARTIFACT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode artifact bytes into a checked pipeline
pub fn decode(bytes: &[u8]) -> Result<PricePipeline, InferenceError> {
    if bytes.len() < HEADER_LEN || bytes[..ARTIFACT_MAGIC.len()] != ARTIFACT_MAGIC {
        return Err(InferenceError::BadMagic);
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != ARTIFACT_VERSION {
        return Err(InferenceError::UnsupportedVersion {
            found: version,
            expected: ARTIFACT_VERSION,
        });
    }

    let pipeline: PricePipeline = postcard::from_bytes(&bytes[HEADER_LEN..])
        .map_err(|e| InferenceError::Decode(e.to_string()))?;
    pipeline.validate()?;
    Ok(pipeline)
}

/// Read a pipeline from an artifact file
pub fn load_artifact(path: impl AsRef<Path>) -> Result<PricePipeline, InferenceError> {
    let path = path.as_ref();
    debug!("Reading model artifact {}", path.display());

    let bytes = fs::read(path).map_err(|source| InferenceError::ArtifactIo {
        path: path.display().to_string(),
        source,
    })?;
    let pipeline = decode(&bytes)?;

    info!(
        "Loaded model artifact {} ({} bytes, {} categorical columns)",
        path.display(),
        bytes.len(),
        pipeline.categorical.len()
    );
    Ok(pipeline)
}

/// Write a pipeline to an artifact file
pub fn save_artifact(pipeline: &PricePipeline, path: impl AsRef<Path>) -> Result<(), InferenceError> {
    let path = path.as_ref();
    let bytes = encode(pipeline)?;
    fs::write(path, &bytes).map_err(|source| InferenceError::ArtifactIo {
        path: path.display().to_string(),
        source,
    })?;
    info!("Wrote model artifact {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
