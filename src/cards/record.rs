//! Raw card records and card assembly.
//!
//! A record is one line of delimited text with a fixed field order:
//!
//! ```text
//! name,hp,type,stage,weakness,retreatCost,
//! attack1Name,attack1Damage,attack1EnergyCost,
//! attack2Name,attack2Damage,attack2EnergyCost
//! ```
//!
//! Delimiters inside fields cannot be escaped. Missing trailing fields read
//! as empty, so a record may stop after the first attack.

use tracing::warn;

use super::attack::Attack;
use super::card::Card;
use super::energy::parse_energy_cost;
use super::types::TypeCode;
use crate::core::config::NumericPolicy;
use crate::error::{CardError, Result};

/// Text fields of one attack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackFields {
    pub name: String,
    pub damage: String,
    pub energy_cost: String,
}

/// Text fields of one card, before any parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardRecord {
    pub name: String,
    pub hp: String,
    pub card_type: String,
    pub stage: String,
    pub weakness: String,
    pub retreat_cost: String,
    pub attack1: AttackFields,
    pub attack2: AttackFields,
}

impl CardRecord {
    /// Split one line into fields.
    pub fn parse_line(line: &str, delimiter: char) -> Self {
        let mut fields = line.split(delimiter).map(|f| f.trim().to_string());
        let mut next = || fields.next().unwrap_or_default();

        Self {
            name: next(),
            hp: next(),
            card_type: next(),
            stage: next(),
            weakness: next(),
            retreat_cost: next(),
            attack1: AttackFields {
                name: next(),
                damage: next(),
                energy_cost: next(),
            },
            attack2: AttackFields {
                name: next(),
                damage: next(),
                energy_cost: next(),
            },
        }
    }

    /// Assemble a card. See [`build_card`].
    pub fn build(&self, policy: &NumericPolicy) -> Result<Card> {
        build_card(self, policy)
    }
}

/// Parse a numeric field under the given policy.
fn parse_number(field: &'static str, text: &str, policy: &NumericPolicy) -> Result<u32> {
    match text.trim().parse::<u32>() {
        Ok(value) => Ok(value),
        Err(_) => match *policy {
            NumericPolicy::Lenient { default } => {
                warn!(field, value = text, fallback = default, "Invalid number, using default");
                Ok(default)
            }
            NumericPolicy::Strict => Err(CardError::InvalidNumber {
                field,
                value: text.to_string(),
            }),
        },
    }
}

fn build_attack(fields: &AttackFields, policy: &NumericPolicy) -> Result<Attack> {
    let damage = parse_number("attack damage", &fields.damage, policy)?;
    let energy_cost = parse_energy_cost(&fields.energy_cost)?;
    Ok(Attack::new(fields.name.clone(), damage, energy_cost))
}

/// Build a card from raw fields.
///
/// Numeric fields follow `policy`. Unknown type codes in the type,
/// weakness or energy fields always fail. The second attack is only read
/// when its name is non-empty.
///
/// ```
/// use ptcg_sim::cards::{build_card, CardRecord};
/// use ptcg_sim::core::NumericPolicy;
///
/// let record = CardRecord::parse_line("Pikachu,abc,L,0,I,1,Gnaw,20,L,,,", ',');
/// let card = build_card(&record, &NumericPolicy::default()).unwrap();
/// assert_eq!(card.hp, 0);
/// assert!(build_card(&record, &NumericPolicy::Strict).is_err());
/// ```
pub fn build_card(record: &CardRecord, policy: &NumericPolicy) -> Result<Card> {
    if record.name.is_empty() {
        return Err(CardError::MissingField("name"));
    }
    if record.attack1.name.is_empty() {
        return Err(CardError::MissingField("attack1 name"));
    }

    let hp = parse_number("hp", &record.hp, policy)?;
    let card_type = TypeCode::from_field("type", &record.card_type)?;
    let stage = parse_number("stage", &record.stage, policy)?;
    let weakness = TypeCode::from_field("weakness", &record.weakness)?;
    let retreat_cost = parse_number("retreat cost", &record.retreat_cost, policy)?;

    let mut card = Card::new(
        record.name.clone(),
        card_type,
        hp,
        weakness,
        build_attack(&record.attack1, policy)?,
    )
    .with_stage(stage)
    .with_retreat_cost(retreat_cost);

    if !record.attack2.name.is_empty() {
        card = card.with_attack(build_attack(&record.attack2, policy)?)?;
    }

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VENUSAUR: &str = "Venusaur,160,G,2,F,3,Razor Leaf,60,GG,Giant Bloom,100,GGNN";

    #[test]
    fn test_parse_line_fields() {
        let record = CardRecord::parse_line(VENUSAUR, ',');
        assert_eq!(record.name, "Venusaur");
        assert_eq!(record.hp, "160");
        assert_eq!(record.card_type, "G");
        assert_eq!(record.attack1.name, "Razor Leaf");
        assert_eq!(record.attack2.energy_cost, "GGNN");
    }

    #[test]
    fn test_parse_line_short_record() {
        let record = CardRecord::parse_line("Rattata,40,N,0,I,1,Tackle,20,N", ',');
        assert_eq!(record.attack1.energy_cost, "N");
        assert_eq!(record.attack2, AttackFields::default());
    }

    #[test]
    fn test_build_full_card() {
        let record = CardRecord::parse_line(VENUSAUR, ',');
        let card = record.build(&NumericPolicy::default()).unwrap();

        assert_eq!(card.name, "Venusaur");
        assert_eq!(card.hp, 160);
        assert_eq!(card.card_type, TypeCode::Grass);
        assert_eq!(card.stage, 2);
        assert_eq!(card.weakness, TypeCode::Fire);
        assert_eq!(card.retreat_cost, 3);
        assert_eq!(card.attacks().len(), 2);
        assert_eq!(card.attacks()[1].damage, 100);
        assert_eq!(card.attacks()[1].energy_cost.to_energy_string(), "GGNN");
    }

    #[test]
    fn test_second_attack_omitted_when_unnamed() {
        let record = CardRecord::parse_line("Rattata,40,N,0,I,1,Tackle,20,N,,30,NN", ',');
        let card = record.build(&NumericPolicy::default()).unwrap();
        assert_eq!(card.attacks().len(), 1);
    }

    #[test]
    fn test_lenient_defaults() {
        let record = CardRecord::parse_line("Pikachu,abc,L,x,I,?,Gnaw,lots,L", ',');
        let card = record.build(&NumericPolicy::Lenient { default: 0 }).unwrap();
        assert_eq!(card.hp, 0);
        assert_eq!(card.stage, 0);
        assert_eq!(card.retreat_cost, 0);
        assert_eq!(card.attacks()[0].damage, 0);

        let card = record.build(&NumericPolicy::Lenient { default: 5 }).unwrap();
        assert_eq!(card.hp, 5);
    }

    #[test]
    fn test_strict_rejects() {
        let record = CardRecord::parse_line("Pikachu,abc,L,0,I,1,Gnaw,20,L", ',');
        let err = record.build(&NumericPolicy::Strict).unwrap_err();
        match err {
            CardError::InvalidNumber { field, value } => {
                assert_eq!(field, "hp");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_propagates() {
        let policy = NumericPolicy::default();

        let bad_type = CardRecord::parse_line("Mew,60,X,0,D,1,Psyshot,20,P", ',');
        assert!(matches!(bad_type.build(&policy), Err(CardError::UnknownTypeCode('X'))));

        let bad_weakness = CardRecord::parse_line("Mew,60,P,0,Z,1,Psyshot,20,P", ',');
        assert!(matches!(bad_weakness.build(&policy), Err(CardError::UnknownTypeCode('Z'))));

        let bad_cost = CardRecord::parse_line("Mew,60,P,0,D,1,Psyshot,20,PQ", ',');
        assert!(matches!(bad_cost.build(&policy), Err(CardError::UnknownTypeCode('Q'))));
    }

    #[test]
    fn test_missing_name() {
        let record = CardRecord::parse_line(",60,P,0,D,1,Psyshot,20,P", ',');
        assert!(matches!(
            record.build(&NumericPolicy::default()),
            Err(CardError::MissingField("name"))
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let record = CardRecord::parse_line("Mew;60;P;0;D;1;Psyshot;20;P", ';');
        let card = record.build(&NumericPolicy::default()).unwrap();
        assert_eq!(card.name, "Mew");
        assert_eq!(card.card_type, TypeCode::Psychic);
    }
}
