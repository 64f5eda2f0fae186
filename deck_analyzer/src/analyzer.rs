//! Deck analysis orchestration
//!
//! [`DeckAnalyzer`] runs the per-card analyses over a decklist, looking each
//! card up exactly once per pass. [`DeckAnalyzer::analyze`] does the token
//! scan and the land recommendation in a single pass so a full analysis
//! costs one lookup per card instead of two.

use crate::decklist::Decklist;
use crate::diff::{diff_decks, DeckDiff};
use crate::error::Result;
use crate::mana::{
    mana_profile, recommend_lands, LandRecommendation, ManaProfile, DEFAULT_TARGET_DECK_SIZE,
};
use crate::tokens::{or_no_tokens, PatternTokenExtractor, TokenExtractor, TokenMatch};
use mtg_common::{CardLookup, CardRecord};
use serde::Serialize;

/// How card quantities enter the land recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandCounting {
    /// Every distinct card counts once: its symbols are counted once and it
    /// takes one deck slot, whatever its quantity
    #[default]
    PerName,
    /// Symbols are multiplied by the quantity and every copy takes a slot
    PerCopy,
}

impl LandCounting {
    /// Deck slots already taken by the deck's cards
    fn cards_in_deck(self, deck: &Decklist) -> u32 {
        match self {
            LandCounting::PerName => u32::try_from(deck.len()).unwrap_or(u32::MAX),
            LandCounting::PerCopy => deck.total_cards(),
        }
    }

    fn weight(self, quantity: u32) -> u32 {
        match self {
            LandCounting::PerName => 1,
            LandCounting::PerCopy => quantity,
        }
    }
}

/// Tunables for a deck analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Deck size the basic land recommendation fills up to
    pub target_deck_size: u32,
    pub land_counting: LandCounting,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            target_deck_size: DEFAULT_TARGET_DECK_SIZE,
            land_counting: LandCounting::default(),
        }
    }
}

/// Result of a combined token and land analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckAnalysis {
    pub tokens: Vec<TokenMatch>,
    pub lands: LandRecommendation,
}

pub struct DeckAnalyzer<L, E = PatternTokenExtractor> {
    lookup: L,
    extractor: E,
    config: AnalyzerConfig,
}

impl<L: CardLookup> DeckAnalyzer<L> {
    /// Analyzer using the default rules-text patterns
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            extractor: PatternTokenExtractor,
            config: AnalyzerConfig::default(),
        }
    }
}

impl<L: CardLookup, E: TokenExtractor> DeckAnalyzer<L, E> {
    /// Replace the token extractor
    pub fn with_extractor<T: TokenExtractor>(self, extractor: T) -> DeckAnalyzer<L, T> {
        DeckAnalyzer {
            lookup: self.lookup,
            extractor,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Compare two versions of a deck. Needs no card lookups.
    pub fn compare(&self, old: &Decklist, new: &Decklist) -> DeckDiff {
        diff_decks(old, new)
    }

    /// Tokens and emblems the deck's cards create.
    ///
    /// Returns the single "None" placeholder when no card references any.
    pub fn scan_tokens(&self, deck: &Decklist) -> Result<Vec<TokenMatch>> {
        let mut tokens = Vec::new();
        self.for_each_card(deck, |card, _| {
            tokens.extend(self.card_tokens(card));
        })?;
        log::info!("Found {} token references", tokens.len());
        Ok(or_no_tokens(tokens))
    }

    /// Basic lands to fill the deck up to the target size
    pub fn recommend_lands(&self, deck: &Decklist) -> Result<LandRecommendation> {
        let mut symbols = ManaProfile::new();
        self.for_each_card(deck, |card, quantity| {
            self.accumulate_mana(&mut symbols, card, quantity);
        })?;
        self.lands_for(deck, &symbols)
    }

    /// Token scan and land recommendation in one pass over the deck
    pub fn analyze(&self, deck: &Decklist) -> Result<DeckAnalysis> {
        let mut tokens = Vec::new();
        let mut symbols = ManaProfile::new();
        self.for_each_card(deck, |card, quantity| {
            tokens.extend(self.card_tokens(card));
            self.accumulate_mana(&mut symbols, card, quantity);
        })?;

        let lands = self.lands_for(deck, &symbols)?;
        Ok(DeckAnalysis {
            tokens: or_no_tokens(tokens),
            lands,
        })
    }

    fn accumulate_mana(&self, symbols: &mut ManaProfile, card: &CardRecord, quantity: u32) {
        if let Some(profile) = mana_profile(card) {
            symbols.add(&profile.scaled(self.config.land_counting.weight(quantity)));
        }
    }

    fn lands_for(&self, deck: &Decklist, symbols: &ManaProfile) -> Result<LandRecommendation> {
        let counting = self.config.land_counting;
        recommend_lands(
            symbols,
            counting.cards_in_deck(deck),
            self.config.target_deck_size,
        )
    }

    fn card_tokens(&self, card: &CardRecord) -> Vec<TokenMatch> {
        self.extractor.extract(&card.name, card.rules_text().as_deref())
    }

    /// Look up every card of the deck in order and hand it to `visit`.
    ///
    /// The first failed lookup aborts the pass.
    fn for_each_card<F>(&self, deck: &Decklist, mut visit: F) -> Result<()>
    where
        F: FnMut(&CardRecord, u32),
    {
        let total = deck.len();
        for (index, (name, quantity)) in deck.iter().enumerate() {
            log::info!("Checking card {}/{}: {}", index + 1, total, name);
            let card = self.lookup.lookup(name).map_err(|e| {
                log::error!("Lookup of '{}' failed: {}", name, e);
                e
            })?;
            visit(&card, quantity);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
