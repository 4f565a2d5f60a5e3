// crates/tripmap-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TripError>;

/// Errors produced by loading, annotating, or looking up trip data.
#[derive(Debug, Error)]
pub enum TripError {
    /// A dataset file could not be located.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The `.google` credentials file is absent or still holds placeholders.
    #[error("credentials not configured: {0}")]
    MissingCredentials(String),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
