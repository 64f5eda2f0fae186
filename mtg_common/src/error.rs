//! Error types for card lookups

use thiserror::Error;

/// Errors raised while resolving a card name to a card record
#[derive(Debug, Error)]
pub enum LookupError {
    /// The card data service has no card with this name
    #[error("Card not found: {0}")]
    NotFound(String),
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code other than 404
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Failed to parse a card record
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Failed to read a local card data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for card lookups
pub type Result<T> = std::result::Result<T, LookupError>;
