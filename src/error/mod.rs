//! Error handling for the prediction pipeline.

use std::io;
use std::path::PathBuf;

use itertools::Itertools;

/// Specialized error type for generation, training and prediction
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing an artifact
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error moving a temporary file into place
    #[error("Failed to persist file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// One or more trained artifacts are not available
    #[error("Required model files not found: {}", .missing.iter().map(|p| p.display()).join(", "))]
    ConfigurationMissing {
        /// Every artifact path that could not be found
        missing: Vec<PathBuf>,
    },

    /// A feature row or probability vector does not match the frozen layout
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A persisted dataset could not be parsed
    #[error("Invalid dataset (line {line}): {message}")]
    InvalidDataset {
        /// 1-based line number in the dataset file
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// A loaded artifact is internally inconsistent
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// A model could not be fitted on the given data
    #[error("Training error: {0}")]
    Training(String),

    /// A disease label that is not part of the vocabulary
    #[error("Unknown disease label: {0}")]
    UnknownDisease(String),
}

impl PredictError {
    /// Create a dataset error for the given line
    pub fn invalid_dataset(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidDataset {
            line,
            message: message.into(),
        }
    }

    /// Whether this error means the model has simply not been trained yet
    #[must_use]
    pub const fn is_configuration_missing(&self) -> bool {
        matches!(self, Self::ConfigurationMissing { .. })
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PredictError>;
