//! Mana symbol counting and basic land recommendations

use crate::error::{DeckError, Result};
use mtg_common::CardRecord;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Deck size the land recommendation fills up to unless configured otherwise
pub const DEFAULT_TARGET_DECK_SIZE: u32 = 100;

/// The five colors of mana
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All colors in WUBRG order
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Mana symbol letter (e.g. 'W', 'U')
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Parse a single mana symbol letter
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "W" => Some(Color::White),
            "U" => Some(Color::Blue),
            "B" => Some(Color::Black),
            "R" => Some(Color::Red),
            "G" => Some(Color::Green),
            _ => None,
        }
    }

    /// Basic land type producing this color
    pub fn basic_land(self) -> &'static str {
        match self {
            Color::White => "Plains",
            Color::Blue => "Island",
            Color::Black => "Swamp",
            Color::Red => "Mountain",
            Color::Green => "Forest",
        }
    }

    /// Plural of [`Color::basic_land`] as printed in land reports
    pub fn basic_land_plural(self) -> &'static str {
        match self {
            Color::White => "Plains",
            Color::Blue => "Islands",
            Color::Black => "Swamps",
            Color::Red => "Mountains",
            Color::Green => "Forests",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A non-negative count per color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCounts {
    counts: [u32; 5],
}

/// Colored mana symbols in a card's (or a whole deck's) mana costs
pub type ManaProfile = ColorCounts;

impl ColorCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    pub fn set(&mut self, color: Color, count: u32) {
        self.counts[color.index()] = count;
    }

    pub fn increment(&mut self, color: Color) {
        let count = &mut self.counts[color.index()];
        *count = count.saturating_add(1);
    }

    /// Add another set of counts to this one. Counts saturate at `u32::MAX`.
    pub fn add(&mut self, other: &ColorCounts) {
        for color in Color::ALL {
            let count = &mut self.counts[color.index()];
            *count = count.saturating_add(other.get(color));
        }
    }

    /// Counts multiplied by `factor` (e.g. a card's quantity), saturating
    pub fn scaled(&self, factor: u32) -> ColorCounts {
        let mut scaled = *self;
        for count in scaled.counts.iter_mut() {
            *count = count.saturating_mul(factor);
        }
        scaled
    }

    pub fn total(&self) -> u32 {
        self.counts
            .iter()
            .fold(0u32, |total, count| total.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL.into_iter().map(move |color| (color, self.get(color)))
    }
}

impl Serialize for ColorCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Color::ALL.len()))?;
        for (color, count) in self.iter() {
            map.serialize_entry(&color.symbol(), &count)?;
        }
        map.end()
    }
}

/// Count the colored symbols of a mana cost string such as `"{4}{W}{U/P}"`.
///
/// Braces and the Phyrexian marker `/P` are stripped; what remains is split
/// into tokens and only single color letters are counted. Generic costs,
/// hybrids with a number (`2/W`), two-color hybrids, `X` and `C` are ignored.
pub fn count_mana_symbols(mana_cost: &str) -> ManaProfile {
    let stripped = mana_cost
        .replace(|c: char| c == '{' || c == '}', " ")
        .replace("/P", " ");

    let mut profile = ManaProfile::new();
    for token in stripped.split_whitespace() {
        if !token.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        if let Some(color) = Color::from_symbol(token) {
            profile.increment(color);
        }
    }
    profile
}

/// Colored mana symbols of a single card.
///
/// Lands and cards with a converted mana cost of zero contribute nothing and
/// return `None`, which is different from a profile of all zeros.
pub fn mana_profile(card: &CardRecord) -> Option<ManaProfile> {
    if card.type_line.to_lowercase().contains("land") || card.cmc <= 0.0 {
        return None;
    }
    Some(count_mana_symbols(card.mana_cost().unwrap_or_default()))
}

/// Basic land counts derived from a deck's colored mana symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandRecommendation {
    /// Colored symbols counted across the deck
    pub symbols: ColorCounts,
    /// Share of each color in percent, rounded per color
    pub percentages: ColorCounts,
    /// Recommended number of each basic land
    pub lands: ColorCounts,
    /// Deck slots left for basic lands; negative if the deck is already over size
    pub open_slots: i64,
}

impl LandRecommendation {
    /// Colors with at least one recommended land, in WUBRG order
    pub fn recommended(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        self.lands.iter().filter(|(_, count)| *count > 0)
    }

    pub fn total_lands(&self) -> u32 {
        self.lands.total()
    }
}

/// Recommend basic lands for the open slots of a deck.
///
/// Each color gets `round(count / total * 100)` percent of the
/// `target_deck_size - cards_in_deck` open slots, rounded again per color.
/// Rounding is half-to-even, so percentages need not sum to 100. Negative
/// land counts (deck already over `target_deck_size`) are clamped to zero.
pub fn recommend_lands(
    symbols: &ManaProfile,
    cards_in_deck: u32,
    target_deck_size: u32,
) -> Result<LandRecommendation> {
    let total = symbols.total();
    if total == 0 {
        return Err(DeckError::NoManaData);
    }

    let open_slots = i64::from(target_deck_size) - i64::from(cards_in_deck);
    if open_slots < 0 {
        log::warn!(
            "Deck has {} cards, {} more than the target size of {}; no lands recommended",
            cards_in_deck,
            -open_slots,
            target_deck_size
        );
    }

    let mut percentages = ColorCounts::new();
    let mut lands = ColorCounts::new();
    for (color, count) in symbols.iter() {
        let percent = (f64::from(count) / f64::from(total) * 100.0).round_ties_even();
        let land_count = (percent / 100.0 * open_slots as f64).round_ties_even();
        percentages.set(color, percent as u32);
        lands.set(color, land_count.max(0.0) as u32);
    }

    log::debug!(
        "Mana symbols {:?} over {} open slots -> lands {:?}",
        symbols,
        open_slots,
        lands
    );

    Ok(LandRecommendation {
        symbols: *symbols,
        percentages,
        lands,
        open_slots,
    })
}

#[cfg(test)]
#[path = "mana_tests.rs"]
mod tests;
