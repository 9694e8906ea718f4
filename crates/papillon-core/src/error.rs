//! Error types for the Papillon core library.

use std::path::PathBuf;

use thiserror::Error;

use crate::{grades::ProviderKind, models::AccountService};

/// Error type shared by every store, the classifier and the grades dispatcher.
#[derive(Error, Debug)]
pub enum PapillonError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
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
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A service name that does not match any known backend
    #[error("Unknown service '{name}'")]
    UnknownService { name: String },
    /// The service exists but has no grades capability
    #[error("Service ({service}) not implemented for this request")]
    UnsupportedService { service: AccountService },
    /// No account stored under the given local id
    #[error("Account with ID {local_id} not found")]
    AccountNotFound { local_id: String },
    /// No client was registered for the provider
    #[error("No {provider} client configured")]
    ProviderUnavailable { provider: ProviderKind },
    /// A client call failed
    #[error("Provider error: {message}")]
    Provider { message: String },
    /// A QR image that cannot be read or a payload that cannot be encoded
    #[error("QR image error: {message}")]
    QrImage { message: String },
    /// Multi-service spaces pointing at each other
    #[error("Multi-service space {local_id} resolves to itself")]
    MultiServiceCycle { local_id: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PapillonError {
        PapillonError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> PapillonError {
        PapillonError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PapillonError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a failed vendor call.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Wraps a QR symbol that could not be read or drawn.
    pub fn qr_image(message: impl Into<String>) -> Self {
        Self::QrImage {
            message: message.into(),
        }
    }

    /// Error for a `spawn_blocking` task that panicked or was cancelled.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PapillonError::database(message).with_source(e))
    }
}

/// Result type alias for Papillon operations
pub type Result<T> = std::result::Result<T, PapillonError>;
