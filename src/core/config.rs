//! Configuration types.
//!
//! - `DeckRules`: deck size and duplicate limits
//! - `NumericPolicy`: how malformed numeric fields are handled on import
//! - `LoaderConfig`: flat-file import options
//!
//! All three default to the behavior of the standard 20-card format with
//! best-effort numeric parsing.

use serde::{Deserialize, Serialize};

/// Maximum number of cards in a deck.
pub const MAX_DECK_SIZE: usize = 20;

/// Maximum copies of any card (by name) in a deck.
pub const MAX_CARD_DUPLICATES: usize = 2;

/// Deck construction limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRules {
    /// Maximum number of cards in a deck.
    pub max_deck_size: usize,

    /// Maximum copies of a single card name.
    pub max_card_duplicates: usize,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            max_deck_size: MAX_DECK_SIZE,
            max_card_duplicates: MAX_CARD_DUPLICATES,
        }
    }
}

impl DeckRules {
    /// Set the deck size limit.
    #[must_use]
    pub fn with_max_deck_size(mut self, max: usize) -> Self {
        self.max_deck_size = max;
        self
    }

    /// Set the per-name copy limit.
    #[must_use]
    pub fn with_max_card_duplicates(mut self, max: usize) -> Self {
        self.max_card_duplicates = max;
        self
    }
}

/// Policy for numeric fields that fail to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericPolicy {
    /// Substitute `default` and keep the record.
    Lenient { default: u32 },
    /// Reject the record with `CardError::InvalidNumber`.
    Strict,
}

impl Default for NumericPolicy {
    fn default() -> Self {
        NumericPolicy::Lenient { default: 0 }
    }
}

/// Options for importing card records from delimited text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field separator. Escaping is not supported.
    pub delimiter: char,

    /// Skip the first line of input.
    pub skip_header: bool,

    /// Handling of malformed numeric fields.
    pub numeric: NumericPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: true,
            numeric: NumericPolicy::default(),
        }
    }
}

impl LoaderConfig {
    /// Use a different field separator.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Treat the first line as data.
    #[must_use]
    pub fn keep_header(mut self) -> Self {
        self.skip_header = false;
        self
    }

    /// Reject malformed numbers instead of substituting a default.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.numeric = NumericPolicy::Strict;
        self
    }

    /// Substitute `default` for malformed numbers.
    #[must_use]
    pub fn with_default(mut self, default: u32) -> Self {
        self.numeric = NumericPolicy::Lenient { default };
        self
    }
}
