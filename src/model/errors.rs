use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a serialized artifact. Always fatal at startup.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("failed to read {artifact} artifact {path}: {source}")]
    Read {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {artifact} artifact {path}: {source}")]
    Parse {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {artifact} artifact: {reason}")]
    Invalid {
        artifact: &'static str,
        reason: String,
    },
}

/// Problems surfacing while running inference on a single request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("classifier produced no class probabilities")]
    EmptyProbabilities,

    #[error("non-finite decision value")]
    NonFinite,
}
