//! Decks and hands.
//!
//! ## Key Types
//!
//! - `Deck`: Size- and duplicate-limited card sequence, drawn from the top
//! - `Hand`: Cards drawn from a deck
//! - `Condensed`: "Nx Name" display of a hand or deck

pub mod hand;
pub mod manager;
pub mod summary;

pub use hand::Hand;
pub use manager::Deck;
pub use summary::{condense, Condensed};
