//! Error types for U-Matrix rendering.

use thiserror::Error;

/// The main error type for U-Matrix operations.
#[derive(Error, Debug)]
pub enum UMatrixError {
    /// Distance metric name not recognized.
    #[error("Unknown distance metric: {0}")]
    UnknownMetric(String),

    /// Grid unit shape not recognized.
    #[error("Unsupported grid topology: {0}")]
    UnsupportedTopology(String),

    /// Input for which the dissimilarity field is undefined.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// The output sink rejected a write.
    #[error("Failed to write document: {0}")]
    WriteFailure(#[source] std::io::Error),

    /// Malformed input (shape mismatch, empty codebook, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading inputs.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for U-Matrix operations.
pub type Result<T> = std::result::Result<T, UMatrixError>;

impl From<serde_json::Error> for UMatrixError {
    fn from(err: serde_json::Error) -> Self {
        UMatrixError::Serialization(err.to_string())
    }
}
