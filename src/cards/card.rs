//! Card definitions.
//!
//! A `Card` is immutable once built. Collections and decks share cards
//! through `CardRef` (`Arc<Card>`), so copying a deck never copies card
//! data.

use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use super::attack::{Attack, EffectId};
use super::types::TypeCode;
use crate::error::{CardError, Result};

/// Most attacks a single card can carry.
pub const MAX_ATTACKS: usize = 2;

/// Shared handle to an immutable card.
pub type CardRef = Arc<Card>;

/// Numeric card identifier. Zero when the source data does not set one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether an ID was assigned.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A Pokemon card.
///
/// ## Example
///
/// ```
/// use ptcg_sim::cards::{Attack, Card, EnergyCost, TypeCode};
///
/// let bulbasaur = Card::new(
///     "Bulbasaur",
///     TypeCode::Grass,
///     70,
///     TypeCode::Fire,
///     Attack::new("Vine Whip", 40, EnergyCost::parse("GN").unwrap()),
/// )
/// .with_retreat_cost(1);
///
/// assert!(bulbasaur.is_basic());
/// assert_eq!(bulbasaur.attacks().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Natural key within a collection.
    pub name: String,

    pub id: CardId,

    pub hp: u32,

    pub card_type: TypeCode,

    /// Evolution stage, 0 = basic.
    pub stage: u32,

    #[serde(deserialize_with = "deserialize_attacks")]
    attacks: SmallVec<[Attack; MAX_ATTACKS]>,

    pub ability: Option<EffectId>,

    pub weakness: TypeCode,

    pub retreat_cost: u32,
}

impl Card {
    /// Create a basic card with a single attack.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        card_type: TypeCode,
        hp: u32,
        weakness: TypeCode,
        attack: Attack,
    ) -> Self {
        let mut attacks = SmallVec::new();
        attacks.push(attack);
        Self {
            name: name.into(),
            id: CardId::default(),
            hp,
            card_type,
            stage: 0,
            attacks,
            ability: None,
            weakness,
            retreat_cost: 0,
        }
    }

    /// Add a second attack.
    ///
    /// Fails with `CardError::TooManyAttacks` if the card already has
    /// `MAX_ATTACKS` attacks.
    pub fn with_attack(mut self, attack: Attack) -> Result<Self> {
        if self.attacks.len() >= MAX_ATTACKS {
            return Err(CardError::TooManyAttacks {
                name: self.name,
                max: MAX_ATTACKS,
            });
        }
        self.attacks.push(attack);
        Ok(self)
    }

    #[must_use]
    pub fn with_id(mut self, id: CardId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_stage(mut self, stage: u32) -> Self {
        self.stage = stage;
        self
    }

    #[must_use]
    pub fn with_retreat_cost(mut self, cost: u32) -> Self {
        self.retreat_cost = cost;
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: EffectId) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Attacks in printed order (one or two).
    #[must_use]
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.stage == 0
    }

    /// Wrap in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> CardRef {
        Arc::new(self)
    }
}

fn deserialize_attacks<'de, D>(
    deserializer: D,
) -> std::result::Result<SmallVec<[Attack; MAX_ATTACKS]>, D::Error>
where
    D: Deserializer<'de>,
{
    let attacks = SmallVec::<[Attack; MAX_ATTACKS]>::deserialize(deserializer)?;
    if attacks.is_empty() || attacks.len() > MAX_ATTACKS {
        return Err(D::Error::invalid_length(attacks.len(), &"1 or 2 attacks"));
    }
    Ok(attacks)
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "HP: {}", self.hp)?;
        writeln!(f, "Type: {}", self.card_type)?;
        writeln!(f, "Stage: {}", self.stage)?;
        writeln!(f, "Weakness: {}", self.weakness)?;
        writeln!(f, "Retreat Cost: {}", self.retreat_cost)?;
        for attack in &self.attacks {
            writeln!(f, "Attack: {attack}")?;
        }
        Ok(())
    }
}
