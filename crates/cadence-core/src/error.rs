//! Error types for the scheduler library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::wizard::WizardStep;

/// Comprehensive error type for all scheduler operations.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Local validation errors for user-supplied wizard input
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// An operation was invoked in a step that does not accept it
    #[error("Cannot {action} while at step '{step}'")]
    InvalidTransition {
        step: WizardStep,
        action: &'static str,
    },
    /// Transport failure or rejected request while talking to the backend
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status code
    #[error("Scheduling service responded with status {status}")]
    UnexpectedStatus { status: u16 },
    /// Encoding the request payload failed
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
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating network errors with optional context.
pub struct NetworkErrorBuilder {
    message: String,
}

impl NetworkErrorBuilder {
    /// Create a new network error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> SchedulerError {
        SchedulerError::Network {
            message: self.message,
            source,
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
    pub fn with_reason(self, reason: impl Into<String>) -> SchedulerError {
        SchedulerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SchedulerError {
    /// Creates a builder for network errors.
    pub fn network(message: impl Into<String>) -> NetworkErrorBuilder {
        NetworkErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// True for failures of the single backend call, as opposed to local
    /// validation or state machine errors.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SchedulerError::Network { .. } | SchedulerError::UnexpectedStatus { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to SchedulerError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for reqwest Results.
pub trait NetworkResultExt<T> {
    /// Map transport errors with a message.
    fn network_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| SchedulerError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> NetworkResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn network_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SchedulerError::network(message).with_source(e))
    }
}

/// Result type alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;
