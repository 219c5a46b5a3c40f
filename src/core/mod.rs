//! Core support types: configuration and deterministic RNG.

pub mod config;
pub mod rng;

pub use config::{DeckRules, LoaderConfig, NumericPolicy, MAX_CARD_DUPLICATES, MAX_DECK_SIZE};
pub use rng::SeededRng;
