use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for JSON/TOON conversion.
///
/// Every variant is terminal for a single conversion attempt; nothing here
/// is retried and no partial result is produced alongside an error.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source text is not well-formed JSON; raised before any encoding.
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// The TOON decoding process itself failed. Most malformed TOON input
    /// is tolerated by omission instead of raising this.
    #[error("Invalid TOON format: {message}")]
    InvalidToon { message: String },

    /// File extension does not match the requested conversion direction.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// I/O error with operation context.
    #[error("{operation}{}: {source}", path.as_ref().map(|p| format!(" '{}'", p.display())).unwrap_or_default())]
    Io {
        operation: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Create an invalid-JSON error from a parse diagnostic.
    #[must_use]
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }

    /// Create an invalid-TOON error from an internal fault diagnostic.
    #[must_use]
    pub fn invalid_toon(message: impl Into<String>) -> Self {
        Self::InvalidToon {
            message: message.into(),
        }
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a validation error for an extension/direction mismatch.
    #[must_use]
    pub fn extension_mismatch(name: &str, expected: &str) -> Self {
        Self::validation(format!(
            "'{name}' does not have the expected {expected} extension"
        ))
    }

    /// Create an I/O error with path context.
    #[must_use]
    pub fn io(operation: impl Into<String>, path: Option<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path,
            source,
        }
    }

    /// Create an error for file read failure.
    #[must_use]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::io("Failed to read file", Some(path), source)
    }

    /// Create an error for file write failure.
    #[must_use]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::io("Failed to write to file", Some(path), source)
    }

    /// Create an error for file creation failure.
    #[must_use]
    pub fn file_create(path: PathBuf, source: std::io::Error) -> Self {
        Self::io("Failed to create file", Some(path), source)
    }

    /// Create an error for stdin read failure.
    #[must_use]
    pub fn stdin_read(source: std::io::Error) -> Self {
        Self::io("Failed to read stdin", None, source)
    }

    /// Create an error for stdout write failure.
    #[must_use]
    pub fn stdout_write(source: std::io::Error) -> Self {
        Self::io("Failed to write to stdout", None, source)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::io("I/O error", None, err)
    }
}
