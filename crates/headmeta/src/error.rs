//! Error types for scan operations.
//!
//! Per-file parse failures are deliberately *not* errors at this level: the
//! scanner records them in [`crate::scanner::ScanReport::failures`] and keeps
//! going, so one broken header cannot corrupt or omit other files' results.
//! [`ScanError`] covers the failures that stop a scan outright.

use headmeta_frontend_api::FrontendError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that abort a scan
#[derive(Error, Debug)]
pub enum ScanError {
    /// The front-end could not be constructed or is misconfigured
    #[error(transparent)]
    Frontend(#[from] FrontendError),

    /// I/O error enumerating the input tree
    #[error("Failed to read directory entry under {path}: {source}")]
    Discovery { path: PathBuf, source: io::Error },

    /// I/O error writing the output document
    #[error("Failed to write output {path}: {source}")]
    Output { path: PathBuf, source: io::Error },

    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid scan configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScanError {
    /// Create a discovery error from a path and io::Error
    pub fn discovery(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Discovery {
            path: path.into(),
            source,
        }
    }

    /// Create an output error from a path and io::Error
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Output {
            path: path.into(),
            source,
        }
    }
}
