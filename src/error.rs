//! Error types for card loading and deck construction.
//!
//! Two families:
//!
//! - `CardError`: problems turning input records into cards. Unknown type
//!   codes are data-integrity failures and always propagate.
//! - `DeckError`: deck policy violations (size cap, duplicate cap). These
//!   are never fatal; `Deck::insert` reports them as `false`.

use thiserror::Error;

use crate::cards::TypeCode;

/// Errors raised while parsing or assembling cards.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("Unknown type code '{0}'")]
    UnknownTypeCode(char),

    #[error("Field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' must be a single type code, got '{value}'")]
    MalformedTypeField { field: &'static str, value: String },

    #[error("Energy requirement for {0} must have an amount of at least 1")]
    ZeroEnergyAmount(TypeCode),

    #[error("Card {name} already has {max} attacks")]
    TooManyAttacks { name: String, max: usize },

    #[error("Required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("Line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: Box<CardError>,
    },

    #[error("Failed to read card data: {0}")]
    Io(#[from] std::io::Error),
}

impl CardError {
    /// Attach a 1-based input line number to this error.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        CardError::Record {
            line,
            source: Box::new(self),
        }
    }
}

/// Deck rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Cannot add card. Deck size limit of {max} reached")]
    DeckFull { max: usize },

    #[error("Cannot add more than {max} copies of the card: {name}")]
    TooManyCopies { name: String, max: usize },

    #[error("Deck has {size} cards, exceeding the maximum of {max}")]
    Oversized { size: usize, max: usize },

    #[error("Card {name} appears {count} times, exceeding the limit of {max} copies")]
    DuplicateLimitExceeded {
        name: String,
        count: usize,
        max: usize,
    },
}

/// Result alias for card loading.
pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CardError::UnknownTypeCode('X').to_string(),
            "Unknown type code 'X'"
        );
        assert_eq!(
            DeckError::TooManyCopies { name: "Pikachu".into(), max: 2 }.to_string(),
            "Cannot add more than 2 copies of the card: Pikachu"
        );
        assert_eq!(
            CardError::ZeroEnergyAmount(TypeCode::Fire).to_string(),
            "Energy requirement for Fire must have an amount of at least 1"
        );
    }

    #[test]
    fn test_at_line_wraps_source() {
        let err = CardError::UnknownTypeCode('Q').at_line(7);
        assert_eq!(err.to_string(), "Line 7: Unknown type code 'Q'");

        match err {
            CardError::Record { line, source } => {
                assert_eq!(line, 7);
                assert!(matches!(*source, CardError::UnknownTypeCode('Q')));
            }
            other => panic!("expected Record, got {other:?}"),
        }
    }
}
