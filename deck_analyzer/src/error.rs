//! Error types for deck_analyzer

use mtg_common::LookupError;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for deck analysis runs
#[derive(Debug, Error)]
pub enum DeckError {
    /// Decklist file missing or unreadable
    #[error("Failed to read decklist {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The card data service does not know this card
    #[error("Card not found: {0}")]
    CardNotFound(String),
    /// Any other card lookup failure (network, HTTP status, bad payload)
    #[error("Card lookup failed: {0}")]
    Lookup(LookupError),
    /// No nonland card in the deck has a colored mana symbol
    #[error("No colored mana symbols found in the deck's nonland cards")]
    NoManaData,
    /// Failed to write a report file
    #[error("Failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to serialize a result as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<LookupError> for DeckError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(name) => DeckError::CardNotFound(name),
            other => DeckError::Lookup(other),
        }
    }
}

/// Result alias for deck_analyzer operations
pub type Result<T> = std::result::Result<T, DeckError>;
