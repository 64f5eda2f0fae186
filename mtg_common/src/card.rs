//! Card record as returned by the card data service

use serde::{Deserialize, Serialize};

/// A single card as seen by the deck analysis.
///
/// Field names follow Scryfall's card objects. The aliases accept the
/// magicthegathering.io names (`type`, `text`, `manaCost`) so card dumps from
/// either service can be used as offline data.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(default, alias = "type")]
    pub type_line: String,
    #[serde(default, alias = "text")]
    pub oracle_text: Option<String>,
    #[serde(default, alias = "manaCost")]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: f64,
    /// For multi-faced cards, rules text and costs may only be on the faces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CardFace {
    pub name: String,
    #[serde(default, alias = "manaCost")]
    pub mana_cost: Option<String>,
    #[serde(default, alias = "type")]
    pub type_line: Option<String>,
    #[serde(default, alias = "text")]
    pub oracle_text: Option<String>,
}

impl CardRecord {
    /// Creates a single-faced card record
    pub fn new(name: impl Into<String>, type_line: impl Into<String>, cmc: f64) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            oracle_text: None,
            mana_cost: None,
            cmc,
            card_faces: None,
        }
    }

    pub fn with_mana_cost(mut self, mana_cost: impl Into<String>) -> Self {
        self.mana_cost = Some(mana_cost.into());
        self
    }

    pub fn with_oracle_text(mut self, oracle_text: impl Into<String>) -> Self {
        self.oracle_text = Some(oracle_text.into());
        self
    }

    /// Rules text of the card.
    ///
    /// Falls back to the faces' texts joined by newlines when the card has no
    /// top-level text. Returns `None` when there is no text at all.
    pub fn rules_text(&self) -> Option<String> {
        if let Some(ref text) = self.oracle_text {
            return Some(text.clone());
        }
        let faces = self.card_faces.as_ref()?;
        let texts: Vec<&str> = faces
            .iter()
            .filter_map(|face| face.oracle_text.as_deref())
            .filter(|text| !text.is_empty())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join("\n"))
        }
    }

    /// Mana cost of the card, or of its front face for transforming cards
    pub fn mana_cost(&self) -> Option<&str> {
        if let Some(ref cost) = self.mana_cost {
            return Some(cost);
        }
        self.card_faces
            .as_ref()
            .and_then(|faces| faces.first())
            .and_then(|face| face.mana_cost.as_deref())
    }

    /// Names of the individual faces, if any
    pub fn face_names(&self) -> impl Iterator<Item = &str> {
        self.card_faces
            .iter()
            .flatten()
            .map(|face| face.name.as_str())
    }
}
