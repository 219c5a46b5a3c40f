//! Card data model: types, energy costs, attacks, cards and the collection.
//!
//! ## Key Types
//!
//! - `TypeCode`: One of the ten elemental types
//! - `EnergyCost`: Run-length decoded attack cost
//! - `Attack`: Name, damage, cost and optional effect
//! - `Card`: Immutable card definition, shared as `CardRef`
//! - `CardRecord`: Raw delimited fields before assembly
//! - `CardCollection`: Every known card, in load order

pub mod attack;
pub mod card;
pub mod collection;
pub mod energy;
pub mod record;
pub mod types;

pub use attack::{Attack, EffectId};
pub use card::{Card, CardId, CardRef, MAX_ATTACKS};
pub use collection::CardCollection;
pub use energy::{parse_energy_cost, to_energy_string, EnergyCost, EnergyRequirement};
pub use record::{build_card, AttackFields, CardRecord};
pub use types::{resolve_type_name, TypeCode};
