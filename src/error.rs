//! Error types shared by the dashboard's boundaries.

use thiserror::Error;

/// Errors surfaced while loading, filtering configuration, or exporting
/// records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The document store rejected the credentials.
    #[error("document store rejected the credentials: {message}")]
    Authentication {
        /// Response body returned with the 401/403 response.
        message: String,
    },

    /// The document store returned a non-authentication error.
    #[error("document store API error: {message}")]
    Api {
        /// Status and body describing the failure.
        message: String,
    },

    /// Networking failed while calling the document store.
    #[error("network error talking to the document store: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response or input file could not be decoded into records.
    #[error("could not decode records: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The spreadsheet writer failed.
    #[error("export failed: {message}")]
    Export {
        /// Error detail from the workbook writer.
        message: String,
    },

    /// A command-line filter expression was malformed.
    #[error("invalid filter expression '{expression}': {message}")]
    InvalidFilter {
        /// The offending expression fragment.
        expression: String,
        /// Why it was rejected.
        message: String,
    },

    /// The terminal UI could not start or crashed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from the TUI runtime.
        message: String,
    },
}

impl DashboardError {
    /// Builds an [`Self::Io`] error from a standard I/O error with context.
    #[must_use]
    pub fn io(context: &str, error: &std::io::Error) -> Self {
        Self::Io {
            message: format!("{context}: {error}"),
        }
    }
}
