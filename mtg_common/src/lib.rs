//! MTG Common - shared card data types for the deck tooling
//!
//! Holds the card record returned by the card data service, the
//! [`CardLookup`] capability the analysis code depends on, and the two
//! lookups shipped with it: the Scryfall HTTP client and an in-memory
//! lookup backed by a JSON card file.

pub mod card;
pub mod error;
pub mod lookup;
pub mod scryfall;

pub use card::{CardFace, CardRecord};
pub use error::{LookupError, Result};
pub use lookup::{CardLookup, MemoryLookup};
pub use scryfall::{ScryfallClient, SCRYFALL_API_URL};
