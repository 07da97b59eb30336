//! Error types for the Stride client library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all client operations.
#[derive(Error, Debug)]
pub enum StrideError {
    /// A write to the coach service failed. Local state is left untouched.
    #[error("Failed to {operation}: {message}")]
    Persistence { operation: String, message: String },
    /// Plan generation produced neither a plan nor a usable message, or the
    /// call itself failed.
    #[error("{message}")]
    Generation { message: String },
    /// Read requests that failed at the transport boundary
    #[error("Request to coach service failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    /// Goal or day slot not present in the local state
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating persistence errors for a named write operation.
pub struct PersistenceErrorBuilder {
    operation: String,
}

impl PersistenceErrorBuilder {
    /// Create a new persistence error builder for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }

    /// Build the error with the given cause.
    pub fn with_cause(self, cause: impl fmt::Display) -> StrideError {
        StrideError::Persistence {
            operation: self.operation,
            message: cause.to_string(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StrideError {
        StrideError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StrideError {
    /// Message shown when generation fails without a service explanation.
    pub const GENERIC_GENERATION_FAILURE: &'static str =
        "Failed to generate plan. Please try again.";

    /// Creates a builder for persistence errors.
    pub fn persistence(operation: impl Into<String>) -> PersistenceErrorBuilder {
        PersistenceErrorBuilder::new(operation)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation failure carrying a human-readable message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Returns true for failures that leave local state intact and can be
    /// retried by repeating the user action.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Persistence { .. } | Self::Generation { .. } | Self::Transport { .. }
        )
    }
}

/// Extension trait mapping transport results of write calls into
/// [`StrideError::Persistence`].
pub trait PersistenceResultExt<T> {
    /// Map any error into a persistence failure for `operation`.
    fn persist_context(self, operation: &str) -> Result<T>;
}

impl<T, E> PersistenceResultExt<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn persist_context(self, operation: &str) -> Result<T> {
        self.map_err(|e| StrideError::persistence(operation).with_cause(e))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, StrideError>;
