//! Condensed "Nx Name" views of hands and decks.

use rustc_hash::FxHashMap;

use crate::cards::CardRef;

/// Count cards by name, keeping first-appearance order.
pub fn condense<'a>(cards: impl IntoIterator<Item = &'a CardRef>) -> Vec<(&'a str, usize)> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for card in cards {
        let name = card.name.as_str();
        match index.get(name) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(name, order.len());
                order.push((name, 1));
            }
        }
    }

    order
}

/// Displays one `"{count}x {name}"` line per distinct card.
pub struct Condensed<'a>(pub Vec<(&'a str, usize)>);

impl std::fmt::Display for Condensed<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, count) in &self.0 {
            writeln!(f, "{count}x {name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Attack, Card, EnergyCost, TypeCode};

    fn card(name: &str) -> CardRef {
        Card::new(
            name,
            TypeCode::Water,
            60,
            TypeCode::Lightning,
            Attack::new("Water Gun", 20, EnergyCost::parse("W").unwrap()),
        )
        .into_ref()
    }

    #[test]
    fn test_condense_order_and_counts() {
        let cards = vec![card("Squirtle"), card("Staryu"), card("Squirtle"), card("Psyduck")];
        assert_eq!(
            condense(&cards),
            vec![("Squirtle", 2), ("Staryu", 1), ("Psyduck", 1)]
        );
    }

    #[test]
    fn test_condense_empty() {
        let cards: Vec<CardRef> = Vec::new();
        assert!(condense(&cards).is_empty());
    }

    #[test]
    fn test_condensed_display() {
        let cards = vec![card("Squirtle"), card("Squirtle"), card("Staryu")];
        let text = Condensed(condense(&cards)).to_string();
        assert_eq!(text, "2x Squirtle\n1x Staryu\n");
    }
}
