//! # ptcg-sim
//!
//! Card and deck data model for a Pokemon TCG Pocket style simulator.
//!
//! ## Pipeline
//!
//! 1. Delimited text records are parsed into immutable `Card`s
//! 2. Cards are collected into a `CardCollection`
//! 3. Shared handles (`CardRef`) are inserted into `Deck`s, which enforce
//!    a size cap and a per-name duplicate cap
//! 4. Decks are drawn from (last in, first out) into a `Hand`
//!
//! ## Modules
//!
//! - `core`: Configuration and deterministic RNG
//! - `cards`: Type codes, energy costs, attacks, cards, record assembly, collection
//! - `deck`: Deck limits, drawing, hands and condensed views
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod deck;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    DeckRules, LoaderConfig, NumericPolicy, SeededRng, MAX_CARD_DUPLICATES, MAX_DECK_SIZE,
};

pub use crate::cards::{
    build_card, parse_energy_cost, resolve_type_name, to_energy_string, Attack, Card,
    CardCollection, CardId, CardRecord, CardRef, EffectId, EnergyCost, EnergyRequirement,
    TypeCode,
};

pub use crate::deck::{Condensed, Deck, Hand};

pub use crate::error::{CardError, DeckError, Result};
