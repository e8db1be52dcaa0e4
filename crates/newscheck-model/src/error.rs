use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("scoring artifact unavailable: {0}")]
    ArtifactUnavailable(String),

    #[error("artifact file not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("malformed artifact: {0}")]
    MalformedArtifact(String),

    #[error("malformed scoring output: {0}")]
    MalformedOutput(String),

    #[error("label map error: {0}")]
    LabelMap(#[from] newscheck_core::LabelMapError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
