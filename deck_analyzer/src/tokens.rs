//! Token and emblem detection in card rules text
//!
//! Rules text is free-form, so detection is pattern based. Three categories
//! are checked in a fixed order (creature token, other token, emblem) and
//! each contributes at most its first match.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// `<power>/<toughness> <words...> token` through the end of the line
    static ref CREATURE_TOKEN: Regex =
        Regex::new(r"\d+/\d+\s+(?:[a-zA-Z]+\s+)+token.*").expect("valid creature token pattern");
    /// A single word directly before `token`
    static ref OTHER_TOKEN: Regex =
        Regex::new(r"\b([a-zA-Z]+) token").expect("valid token pattern");
    static ref EMBLEM: Regex = Regex::new(r"emblem [a-z]+.*").expect("valid emblem pattern");
}

/// Lead words that do not name a token type. `creature` belongs to the
/// creature-token category; the rest only refer to a token already named.
const NON_TOKEN_WORDS: [&str; 11] = [
    "creature", "a", "an", "another", "each", "that", "the", "this", "those", "target", "copy",
];

/// Text shown for both columns when a deck needs no tokens
pub const NO_TOKENS: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Creature,
    Other,
    Emblem,
}

/// A token or emblem referenced by a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenMatch {
    pub card_name: String,
    pub excerpt: String,
    /// `None` only for the "no tokens" placeholder row
    pub kind: Option<TokenKind>,
}

impl TokenMatch {
    pub fn new(card_name: impl Into<String>, excerpt: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            card_name: card_name.into(),
            excerpt: excerpt.into(),
            kind: Some(kind),
        }
    }

    /// Placeholder reported when a whole deck references no tokens
    pub fn none() -> Self {
        Self {
            card_name: NO_TOKENS.to_string(),
            excerpt: NO_TOKENS.to_string(),
            kind: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }
}

/// Replace an empty deck-wide result with the single placeholder row
pub fn or_no_tokens(matches: Vec<TokenMatch>) -> Vec<TokenMatch> {
    if matches.is_empty() {
        vec![TokenMatch::none()]
    } else {
        matches
    }
}

/// Finds token and emblem references in a card's rules text
pub trait TokenExtractor {
    /// Matches for one card, in category order. Absent text yields nothing.
    fn extract(&self, card_name: &str, rules_text: Option<&str>) -> Vec<TokenMatch>;
}

impl<T: TokenExtractor + ?Sized> TokenExtractor for &T {
    fn extract(&self, card_name: &str, rules_text: Option<&str>) -> Vec<TokenMatch> {
        (**self).extract(card_name, rules_text)
    }
}

/// Regex based extractor for Magic rules text
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternTokenExtractor;

impl PatternTokenExtractor {
    fn creature_token(text: &str) -> Option<&str> {
        CREATURE_TOKEN.find(text).map(|m| m.as_str())
    }

    fn other_token(text: &str) -> Option<&str> {
        OTHER_TOKEN
            .captures_iter(text)
            .find(|caps| {
                let lead = caps[1].to_lowercase();
                !NON_TOKEN_WORDS.contains(&lead.as_str())
            })
            .and_then(|caps| caps.get(0))
            .map(|m| m.as_str())
    }

    fn emblem(text: &str) -> Option<&str> {
        EMBLEM.find(text).map(|m| m.as_str())
    }
}

impl TokenExtractor for PatternTokenExtractor {
    fn extract(&self, card_name: &str, rules_text: Option<&str>) -> Vec<TokenMatch> {
        let text = match rules_text {
            Some(text) if !text.is_empty() => text,
            _ => return Vec::new(),
        };

        let checks: [(TokenKind, fn(&str) -> Option<&str>); 3] = [
            (TokenKind::Creature, Self::creature_token),
            (TokenKind::Other, Self::other_token),
            (TokenKind::Emblem, Self::emblem),
        ];

        checks
            .iter()
            .filter_map(|(kind, check)| {
                check(text).map(|excerpt| TokenMatch::new(card_name, excerpt, *kind))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
