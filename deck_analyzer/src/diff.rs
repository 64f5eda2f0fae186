//! Deck comparison

use crate::decklist::Decklist;
use crate::instances::{expand, CardInstance};
use serde::Serialize;
use std::collections::HashSet;

/// Card instances entering and leaving a deck between two versions.
///
/// The lists are independent: `incoming[i]` is not a replacement for
/// `outgoing[i]`, and they may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckDiff {
    pub incoming: Vec<CardInstance>,
    pub outgoing: Vec<CardInstance>,
}

impl DeckDiff {
    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }
}

/// Instances of `from` that are missing in `to`, in `from`'s order
fn missing_from(from: &[CardInstance], to: &[CardInstance]) -> Vec<CardInstance> {
    let present: HashSet<&CardInstance> = to.iter().collect();
    from.iter()
        .filter(|instance| !present.contains(instance))
        .cloned()
        .collect()
}

/// Compare an old and a new version of a deck
pub fn diff_decks(old: &Decklist, new: &Decklist) -> DeckDiff {
    let old_instances = expand(old);
    let new_instances = expand(new);

    let diff = DeckDiff {
        incoming: missing_from(&new_instances, &old_instances),
        outgoing: missing_from(&old_instances, &new_instances),
    };

    log::info!(
        "Deck diff: {} incoming, {} outgoing",
        diff.incoming.len(),
        diff.outgoing.len()
    );
    diff
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
