//! Error types for the causelist service.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the causelist service.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more required request fields were absent or blank.
    #[error("Missing required fields: {fields}")]
    MissingFields {
        /// Comma-separated field names, in form order.
        fields: String,
    },

    /// Case number contained something other than ASCII digits.
    #[error("Case number must contain only digits")]
    InvalidCaseNumber {
        /// The rejected input.
        value: String,
    },

    /// Filing year was not a number or fell outside the accepted range.
    #[error("Filing year must be between {min} and {max}")]
    InvalidFilingYear {
        /// The rejected input.
        value: String,
        /// Earliest accepted year.
        min: u16,
        /// Latest accepted year.
        max: u16,
    },

    /// The court website could not be reached or did not answer.
    #[error("Failed to fetch case data from court website: {message}")]
    CourtUnavailable {
        /// Description of the failure.
        message: String,
    },

    /// A requested order document could not be retrieved.
    #[error("Failed to fetch order document: {message}")]
    DocumentUnavailable {
        /// Description of the failure.
        message: String,
    },

    /// Audit store operation failed. Callers treat these as advisory.
    #[error("Audit store error: {message}")]
    AuditStore {
        /// Description of the failure.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Returns `true` if this error is the caller's fault and should map
    /// to an HTTP 400 rather than a 500.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFields { .. }
                | Self::InvalidCaseNumber { .. }
                | Self::InvalidFilingYear { .. }
        )
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates a court-unavailable error with the given message.
    #[must_use]
    pub fn court_unavailable(message: impl Into<String>) -> Self {
        Self::CourtUnavailable {
            message: message.into(),
        }
    }

    /// Creates a document-unavailable error with the given message.
    #[must_use]
    pub fn document_unavailable(message: impl Into<String>) -> Self {
        Self::DocumentUnavailable {
            message: message.into(),
        }
    }

    /// Creates an audit store error with the given message.
    #[must_use]
    pub fn audit_store(message: impl Into<String>) -> Self {
        Self::AuditStore {
            message: message.into(),
        }
    }
}
