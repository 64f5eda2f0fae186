//! Decklist parsing
//!
//! A decklist file holds one entry per line, either `"<quantity> <card name>"`
//! or a bare `"<card name>"` meaning one copy. The parsed [`Decklist`] is
//! always ordered alphabetically by card name; diffs and reports rely on it.

use crate::error::{DeckError, Result};
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::Path;

/// What to do when the same card name appears on more than one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later line replaces the earlier quantity
    #[default]
    Overwrite,
    /// Quantities of all lines are summed
    Accumulate,
}

/// Card name to quantity mapping, iterated in ascending name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Decklist {
    cards: BTreeMap<String, u32>,
}

impl Decklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, resolving a repeated name with `policy`
    pub fn insert(&mut self, name: impl Into<String>, quantity: u32, policy: DuplicatePolicy) {
        let name = name.into();
        match self.cards.entry(name) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(quantity);
            }
            btree_map::Entry::Occupied(mut entry) => {
                let previous = *entry.get();
                let updated = match policy {
                    DuplicatePolicy::Overwrite => quantity,
                    DuplicatePolicy::Accumulate => previous.saturating_add(quantity),
                };
                log::warn!(
                    "Duplicate decklist entry '{}' ({} then {}), using {}",
                    entry.key(),
                    previous,
                    quantity,
                    updated
                );
                entry.insert(updated);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.cards.get(name).copied()
    }

    /// Number of distinct card names
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of physical cards (sum of all quantities, saturating at `u32::MAX`)
    pub fn total_cards(&self) -> u32 {
        self.cards
            .values()
            .fold(0u32, |total, quantity| total.saturating_add(*quantity))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.cards.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Decklist {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut deck = Decklist::new();
        for (name, quantity) in iter {
            deck.insert(name, quantity, DuplicatePolicy::Overwrite);
        }
        deck
    }
}

/// Parse one non-blank line into a card name and quantity.
///
/// Returns `None` for an explicit quantity of zero.
fn parse_line(line: &str) -> Option<(String, u32)> {
    if line.starts_with(|c: char| c.is_ascii_digit()) {
        if let Some((quantity, name)) = line.split_once(char::is_whitespace) {
            let name = name.trim_start();
            match quantity.parse::<u32>() {
                Ok(0) if !name.is_empty() => {
                    log::debug!("Skipping zero-quantity entry '{}'", name);
                    return None;
                }
                Ok(quantity) if !name.is_empty() => return Some((name.to_string(), quantity)),
                _ => {}
            }
        }
        log::debug!("No valid quantity in '{}', reading it as a card name", line);
    }
    Some((line.to_string(), 1))
}

/// Parse decklist text
pub fn parse_decklist(text: &str, policy: DuplicatePolicy) -> Decklist {
    let mut deck = Decklist::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, quantity)) = parse_line(line) {
            deck.insert(name, quantity, policy);
        }
    }
    deck
}

/// Read and parse a decklist file
pub fn load_decklist<P: AsRef<Path>>(path: P, policy: DuplicatePolicy) -> Result<Decklist> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DeckError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let deck = parse_decklist(&text, policy);
    log::info!(
        "Loaded {} ({} entries, {} cards)",
        path.display(),
        deck.len(),
        deck.total_cards()
    );
    Ok(deck)
}

#[cfg(test)]
#[path = "decklist_tests.rs"]
mod tests;
