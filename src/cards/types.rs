//! Type registry: single-character type codes and their names.
//!
//! | Code | Name      |
//! |------|-----------|
//! | G    | Grass     |
//! | F    | Fire      |
//! | W    | Water     |
//! | L    | Lightning |
//! | P    | Psychic   |
//! | I    | Fighting  |
//! | D    | Darkness  |
//! | M    | Metal     |
//! | N    | Normal    |
//! | R    | Dragon    |
//!
//! The set is closed. Anything else is a data-integrity error.

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// Elemental type of a card, attack cost, or weakness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeCode {
    Grass,
    Fire,
    Water,
    Lightning,
    Psychic,
    Fighting,
    Darkness,
    Metal,
    Normal,
    Dragon,
}

impl TypeCode {
    /// Every type, in table order.
    pub const ALL: [TypeCode; 10] = [
        TypeCode::Grass,
        TypeCode::Fire,
        TypeCode::Water,
        TypeCode::Lightning,
        TypeCode::Psychic,
        TypeCode::Fighting,
        TypeCode::Darkness,
        TypeCode::Metal,
        TypeCode::Normal,
        TypeCode::Dragon,
    ];

    /// Look up a type by its one-character code.
    pub fn from_code(code: char) -> Result<Self> {
        match code {
            'G' => Ok(TypeCode::Grass),
            'F' => Ok(TypeCode::Fire),
            'W' => Ok(TypeCode::Water),
            'L' => Ok(TypeCode::Lightning),
            'P' => Ok(TypeCode::Psychic),
            'I' => Ok(TypeCode::Fighting),
            'D' => Ok(TypeCode::Darkness),
            'M' => Ok(TypeCode::Metal),
            'N' => Ok(TypeCode::Normal),
            'R' => Ok(TypeCode::Dragon),
            other => Err(CardError::UnknownTypeCode(other)),
        }
    }

    /// The one-character code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            TypeCode::Grass => 'G',
            TypeCode::Fire => 'F',
            TypeCode::Water => 'W',
            TypeCode::Lightning => 'L',
            TypeCode::Psychic => 'P',
            TypeCode::Fighting => 'I',
            TypeCode::Darkness => 'D',
            TypeCode::Metal => 'M',
            TypeCode::Normal => 'N',
            TypeCode::Dragon => 'R',
        }
    }

    /// Canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TypeCode::Grass => "Grass",
            TypeCode::Fire => "Fire",
            TypeCode::Water => "Water",
            TypeCode::Lightning => "Lightning",
            TypeCode::Psychic => "Psychic",
            TypeCode::Fighting => "Fighting",
            TypeCode::Darkness => "Darkness",
            TypeCode::Metal => "Metal",
            TypeCode::Normal => "Normal",
            TypeCode::Dragon => "Dragon",
        }
    }

    /// Parse a single-code text field, ignoring surrounding whitespace.
    pub(crate) fn from_field(field: &'static str, text: &str) -> Result<Self> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c),
            (None, _) => Err(CardError::MissingField(field)),
            (Some(_), Some(_)) => Err(CardError::MalformedTypeField {
                field,
                value: text.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for TypeCode {
    type Error = CardError;

    fn try_from(code: char) -> Result<Self> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a type code to its canonical name.
///
/// ```
/// use ptcg_sim::cards::resolve_type_name;
///
/// assert_eq!(resolve_type_name('G').unwrap(), "Grass");
/// assert!(resolve_type_name('X').is_err());
/// ```
pub fn resolve_type_name(code: char) -> Result<&'static str> {
    TypeCode::from_code(code).map(TypeCode::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_codes() {
        assert_eq!(resolve_type_name('G').unwrap(), "Grass");
        assert_eq!(resolve_type_name('I').unwrap(), "Fighting");
        assert_eq!(resolve_type_name('N').unwrap(), "Normal");
        assert_eq!(resolve_type_name('R').unwrap(), "Dragon");
    }

    #[test]
    fn test_resolve_unknown_code() {
        let err = resolve_type_name('X').unwrap_err();
        assert!(matches!(err, CardError::UnknownTypeCode('X')));

        // Codes are case-sensitive
        assert!(resolve_type_name('g').is_err());
    }

    #[test]
    fn test_code_roundtrip() {
        for ty in TypeCode::ALL {
            assert_eq!(TypeCode::from_code(ty.code()).unwrap(), ty);
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(format!("{}", TypeCode::Lightning), "Lightning");
        assert_eq!(TypeCode::try_from('M').unwrap(), TypeCode::Metal);
    }

    #[test]
    fn test_from_field() {
        assert_eq!(TypeCode::from_field("type", " W ").unwrap(), TypeCode::Water);
        assert!(matches!(
            TypeCode::from_field("weakness", ""),
            Err(CardError::MissingField("weakness"))
        ));
        assert!(matches!(
            TypeCode::from_field("type", "GF"),
            Err(CardError::MalformedTypeField { field: "type", .. })
        ));
    }
}
