//! Attacks.

use serde::{Deserialize, Serialize};

use super::energy::EnergyCost;

/// Reference to a special effect (attack effect or ability).
///
/// Effects are resolved by whatever engine consumes the card data; the
/// data model only carries the identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// An attack a card can use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub damage: u32,
    pub energy_cost: EnergyCost,
    /// `None` means the attack only deals its base damage.
    pub effect: Option<EffectId>,
}

impl Attack {
    #[must_use]
    pub fn new(name: impl Into<String>, damage: u32, energy_cost: EnergyCost) -> Self {
        Self {
            name: name.into(),
            damage,
            energy_cost,
            effect: None,
        }
    }

    /// Attach a special effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectId) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }
}

impl std::fmt::Display for Attack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} damage) [{}]", self.name, self.damage, self.energy_cost)?;
        if let Some(effect) = self.effect {
            write!(f, " {effect}")?;
        }
        Ok(())
    }
}
