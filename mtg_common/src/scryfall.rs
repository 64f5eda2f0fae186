//! Scryfall API client for resolving card names
//!
//! Uses blocking reqwest; the deck analysis looks cards up one at a time.

use crate::card::CardRecord;
use crate::error::{LookupError, Result};
use crate::lookup::CardLookup;

/// Base URL of the public Scryfall API
pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";

const USER_AGENT: &str = "D2D-Automations-DeckAnalyzer/1.0";

/// Card lookup against Scryfall's exact-name endpoint
pub struct ScryfallClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ScryfallClient {
    pub fn new() -> Self {
        Self::with_base_url(SCRYFALL_API_URL)
    }

    /// Client against a different API root (mirrors, test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a card from Scryfall by its exact name
    pub fn fetch_card_by_name(&self, name: &str) -> Result<CardRecord> {
        let url = format!(
            "{}/cards/named?exact={}",
            self.base_url,
            urlencoding::encode(name)
        );

        log::debug!("Fetching card from Scryfall: {}", name);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(LookupError::HttpStatus(status));
        }

        let body = response.text()?;
        Ok(serde_json::from_str::<CardRecord>(&body)?)
    }
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CardLookup for ScryfallClient {
    fn lookup(&self, name: &str) -> Result<CardRecord> {
        self.fetch_card_by_name(name)
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
