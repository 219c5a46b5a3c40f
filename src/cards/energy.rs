//! Energy costs and their run-length text encoding.
//!
//! Attack costs are written as a run of type codes, one character per
//! energy: `"GGF"` is two Grass and one Fire. Decoding groups consecutive
//! identical codes into `EnergyRequirement`s; encoding expands them back.
//! For any string of valid codes, `to_energy_string(parse_energy_cost(s)) == s`.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use super::types::TypeCode;
use crate::error::{CardError, Result};

/// One run of a single energy type within a cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergyRequirement {
    energy_type: TypeCode,
    #[serde(deserialize_with = "deserialize_amount")]
    amount: u32,
}

impl EnergyRequirement {
    /// Create a requirement of `amount` energy of one type.
    ///
    /// Fails with `CardError::ZeroEnergyAmount` if `amount` is zero.
    pub fn new(energy_type: TypeCode, amount: u32) -> Result<Self> {
        if amount == 0 {
            return Err(CardError::ZeroEnergyAmount(energy_type));
        }
        Ok(Self { energy_type, amount })
    }

    #[must_use]
    pub fn energy_type(&self) -> TypeCode {
        self.energy_type
    }

    /// Always at least 1.
    #[must_use]
    pub fn amount(&self) -> u32 {
        self.amount
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = u32::deserialize(deserializer)?;
    if amount == 0 {
        return Err(D::Error::invalid_value(
            Unexpected::Unsigned(0),
            &"an energy amount of at least 1",
        ));
    }
    Ok(amount)
}

impl std::fmt::Display for EnergyRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x {}", self.amount, self.energy_type)
    }
}

/// Ordered energy cost of an attack.
///
/// Adjacent requirements never share a type when produced by
/// `parse_energy_cost`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergyCost(SmallVec<[EnergyRequirement; 4]>);

impl EnergyCost {
    /// An empty (free) cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a cost string. See [`parse_energy_cost`].
    pub fn parse(text: &str) -> Result<Self> {
        parse_energy_cost(text)
    }

    /// Encode back to the one-character-per-energy form.
    #[must_use]
    pub fn to_energy_string(&self) -> String {
        to_energy_string(self)
    }

    /// Total number of energy units.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|r| r.amount).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnergyRequirement> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[EnergyRequirement] {
        &self.0
    }
}

impl FromIterator<EnergyRequirement> for EnergyCost {
    fn from_iter<I: IntoIterator<Item = EnergyRequirement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for EnergyCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("Free");
        }
        for (i, req) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{req}")?;
        }
        Ok(())
    }
}

/// Run-length decode a cost string into energy requirements.
///
/// Surrounding whitespace is ignored and an empty string is a free cost.
/// Every character must be a known type code.
///
/// ```
/// use ptcg_sim::cards::{parse_energy_cost, EnergyRequirement, TypeCode};
///
/// let cost = parse_energy_cost("GGFF").unwrap();
/// assert_eq!(
///     cost.as_slice(),
///     &[
///         EnergyRequirement::new(TypeCode::Grass, 2).unwrap(),
///         EnergyRequirement::new(TypeCode::Fire, 2).unwrap(),
///     ]
/// );
/// ```
pub fn parse_energy_cost(text: &str) -> Result<EnergyCost> {
    let mut runs: SmallVec<[EnergyRequirement; 4]> = SmallVec::new();

    for c in text.trim().chars() {
        let energy_type = TypeCode::from_code(c)?;
        match runs.last_mut() {
            Some(run) if run.energy_type == energy_type => run.amount += 1,
            _ => runs.push(EnergyRequirement { energy_type, amount: 1 }),
        }
    }

    Ok(EnergyCost(runs))
}

/// Expand a cost back into its one-character-per-energy string.
#[must_use]
pub fn to_energy_string(cost: &EnergyCost) -> String {
    let mut out = String::with_capacity(cost.total() as usize);
    for req in cost.iter() {
        for _ in 0..req.amount {
            out.push(req.energy_type.code());
        }
    }
    out
}
