//! Deck Analyzer - MTG decklist analysis
//!
//! Compares two versions of a decklist, lists the tokens and emblems a deck
//! needs, and recommends basic lands from the colored mana costs of its
//! spells. Card data comes from any [`mtg_common::CardLookup`].

pub mod analyzer;
pub mod decklist;
pub mod diff;
pub mod error;
pub mod instances;
pub mod mana;
pub mod report;
pub mod tokens;

pub use analyzer::{AnalyzerConfig, DeckAnalysis, DeckAnalyzer, LandCounting};
pub use decklist::{load_decklist, parse_decklist, Decklist, DuplicatePolicy};
pub use diff::{diff_decks, DeckDiff};
pub use error::{DeckError, Result};
pub use instances::{expand, is_basic_land, CardInstance};
pub use mana::{
    count_mana_symbols, mana_profile, recommend_lands, Color, ColorCounts, LandRecommendation,
    ManaProfile, DEFAULT_TARGET_DECK_SIZE,
};
pub use report::{
    format_analysis, format_diff_table, format_land_recommendation, format_token_table,
    write_report, DiffLayout,
};
pub use tokens::{PatternTokenExtractor, TokenExtractor, TokenKind, TokenMatch};
