//! Card lookup capability and the in-memory implementation

use crate::card::CardRecord;
use crate::error::{LookupError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Resolves a card name to its card record.
///
/// Implementations must return [`LookupError::NotFound`] when the name is
/// unknown so callers can tell a missing card apart from a transport failure.
pub trait CardLookup {
    fn lookup(&self, name: &str) -> Result<CardRecord>;
}

impl<T: CardLookup + ?Sized> CardLookup for &T {
    fn lookup(&self, name: &str) -> Result<CardRecord> {
        (**self).lookup(name)
    }
}

/// Card lookup over a fixed set of records, matched by exact name.
///
/// Multi-faced cards are reachable by their full name and by each face name.
#[derive(Debug, Default, Clone)]
pub struct MemoryLookup {
    cards: HashMap<String, CardRecord>,
}

impl MemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = CardRecord>) -> Self {
        let mut lookup = Self::new();
        for card in cards {
            lookup.insert(card);
        }
        lookup
    }

    /// Parse a JSON array of card records
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<CardRecord> = serde_json::from_str(json)?;
        Ok(Self::from_cards(cards))
    }

    /// Load a JSON array of card records from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading card data from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let lookup = Self::from_json(&json)?;
        log::info!("Loaded {} card records from {}", lookup.len(), path.display());
        Ok(lookup)
    }

    pub fn insert(&mut self, card: CardRecord) {
        for face in card.face_names() {
            if face != card.name {
                self.cards
                    .entry(face.to_string())
                    .or_insert_with(|| card.clone());
            }
        }
        self.cards.insert(card.name.clone(), card);
    }

    /// Number of names that resolve to a record
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardLookup for MemoryLookup {
    fn lookup(&self, name: &str) -> Result<CardRecord> {
        self.cards
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }
}
