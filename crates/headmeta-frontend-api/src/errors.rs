use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for front-end operations
pub type FrontendResult<T> = std::result::Result<T, FrontendError>;

/// Errors that can occur inside a front-end adapter
#[derive(Error, Debug)]
pub enum FrontendError {
    /// The front-end itself could not be constructed (grammar missing,
    /// incompatible library version). Fatal at startup: nothing can be
    /// parsed without a working front-end.
    #[error("Front-end configuration error: {0}")]
    Configuration(String),

    /// A single file failed to parse. Other files are unaffected.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// I/O error reading a source file
    #[error("Failed to read file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl FrontendError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        FrontendError::Configuration(message.into())
    }

    /// Create a parse error for a single file
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        FrontendError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error from a path and io::Error
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FrontendError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = FrontendError::configuration("grammar unavailable");
        assert_eq!(
            err.to_string(),
            "Front-end configuration error: grammar unavailable"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = FrontendError::parse("include/node.hpp", "unexpected end of input");
        assert_eq!(
            err.to_string(),
            "Failed to parse include/node.hpp: unexpected end of input"
        );
    }
}
