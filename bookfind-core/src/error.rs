//! Error types for Bookfind Core

use crate::types::FilterKind;
use thiserror::Error;

/// The only failure message ever shown to a user for a catalog request
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch books.";

/// Result type alias using BookfindError
pub type Result<T> = std::result::Result<T, BookfindError>;

/// Top-level error type for all Bookfind operations
#[derive(Debug, Error)]
pub enum BookfindError {
    #[error("Browsing session has shut down")]
    SessionClosed,
}

/// Failures of a single catalog request
///
/// The variants exist for logging. Every one of them is shown to the user
/// as [`FETCH_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog responded with HTTP {0}")]
    Status(u16),

    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// User-facing message for this failure
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Errors that occur when parsing user-supplied selections
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown {kind} value: {value}")]
    UnknownValue { kind: FilterKind, value: String },

    #[error("Unknown filter kind: {0}")]
    UnknownKind(String),

    #[error("Invalid page number: {0}")]
    InvalidPage(String),
}

/// Errors in catalog configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Base URL must start with http:// or https://, got {0}")]
    InvalidBaseUrl(String),

    #[error("Debounce must be a whole number of milliseconds, got {0}")]
    InvalidDebounce(String),
}
