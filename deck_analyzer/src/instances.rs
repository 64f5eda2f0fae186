//! Card instance expansion
//!
//! Turns a decklist into one identifier per physical card so that decks can
//! be compared with plain set membership.

use crate::decklist::Decklist;
use serde::{Serialize, Serializer};
use std::fmt;

/// Names of the five basic land types
pub const BASIC_LANDS: [&str; 5] = ["Plains", "Island", "Swamp", "Mountain", "Forest"];

/// True if `name` is a basic land type (case-insensitive exact match)
pub fn is_basic_land(name: &str) -> bool {
    BASIC_LANDS
        .iter()
        .any(|basic| basic.eq_ignore_ascii_case(name))
}

/// One physical card of a deck.
///
/// Displayed as `name` for a single nonbasic card and `name_<copy>` for
/// numbered copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardInstance {
    name: String,
    copy: Option<u32>,
}

impl CardInstance {
    /// The only copy of a nonbasic card
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            copy: None,
        }
    }

    /// The `index`-th copy of a card
    pub fn copy(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            copy: Some(index),
        }
    }

    /// Underlying card name without the copy suffix
    pub fn card_name(&self) -> &str {
        &self.name
    }

    pub fn copy_index(&self) -> Option<u32> {
        self.copy
    }
}

impl fmt::Display for CardInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.copy {
            Some(index) => write!(f, "{}_{}", self.name, index),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Serialize for CardInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Expand a decklist into uniquely identified card instances.
///
/// Cards with more than one copy are numbered `0..qty`. Basic lands are
/// numbered even as a single copy. Order follows the decklist.
pub fn expand(deck: &Decklist) -> Vec<CardInstance> {
    let mut instances = Vec::with_capacity(deck.total_cards() as usize);
    for (name, quantity) in deck.iter() {
        if quantity > 1 {
            instances.extend((0..quantity).map(|index| CardInstance::copy(name, index)));
        } else if is_basic_land(name) {
            instances.push(CardInstance::copy(name, 0));
        } else {
            instances.push(CardInstance::single(name));
        }
    }
    instances
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(instances: &[CardInstance]) -> Vec<String> {
        instances.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn single_nonbasic_card_keeps_its_name() {
        let deck: Decklist = [("Sol Ring", 1)].into_iter().collect();
        assert_eq!(ids(&expand(&deck)), vec!["Sol Ring"]);
    }

    #[test]
    fn single_basic_land_is_numbered() {
        let deck: Decklist = [("Plains", 1)].into_iter().collect();
        assert_eq!(ids(&expand(&deck)), vec!["Plains_0"]);
    }

    #[test]
    fn basic_land_match_ignores_case() {
        let deck: Decklist = [("forest", 1)].into_iter().collect();
        assert_eq!(ids(&expand(&deck)), vec!["forest_0"]);
        assert!(!is_basic_land("Snow-Covered Forest"));
    }

    #[test]
    fn multiple_copies_are_numbered_in_order() {
        let deck: Decklist = [("Island", 3), ("Arcane Signet", 1), ("Rat Colony", 2)]
            .into_iter()
            .collect();
        assert_eq!(
            ids(&expand(&deck)),
            vec![
                "Arcane Signet",
                "Island_0",
                "Island_1",
                "Island_2",
                "Rat Colony_0",
                "Rat Colony_1"
            ]
        );
    }

    #[test]
    fn expansion_size_matches_total_cards_and_is_unique() {
        let deck: Decklist = [("Island", 12), ("Sol Ring", 1), ("Swamp", 1), ("Rat Colony", 7)]
            .into_iter()
            .collect();
        let instances = expand(&deck);
        assert_eq!(instances.len(), deck.total_cards() as usize);
        let unique: HashSet<&CardInstance> = instances.iter().collect();
        assert_eq!(unique.len(), instances.len());
    }

    #[test]
    fn instance_accessors() {
        let instance = CardInstance::copy("Island", 4);
        assert_eq!(instance.card_name(), "Island");
        assert_eq!(instance.copy_index(), Some(4));
        assert_eq!(CardInstance::single("Sol Ring").copy_index(), None);
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&CardInstance::copy("Plains", 0)).unwrap();
        assert_eq!(json, r#""Plains_0""#);
    }
}
