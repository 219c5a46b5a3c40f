//! Deck construction, validation and drawing.
//!
//! A `Deck` is an ordered sequence of shared card handles with two limits
//! (see `DeckRules`):
//! - total size ≤ `max_deck_size`
//! - copies per card name ≤ `max_card_duplicates`
//!
//! `insert` enforces both on every call. `verify` re-checks them over the
//! current contents, which matters for decks built with
//! `from_cards_unchecked`.
//!
//! Cards are drawn from the tail: the most recently inserted card comes out
//! first.
//!
//! Storage is an `im::Vector`, so `duplicate` is a structural-sharing clone
//! and the two decks diverge independently afterwards.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::summary::condense;
use crate::cards::CardRef;
use crate::core::config::DeckRules;
use crate::core::rng::SeededRng;
use crate::error::DeckError;

/// A player's deck.
///
/// ## Usage
///
/// ```
/// use ptcg_sim::cards::{Attack, Card, EnergyCost, TypeCode};
/// use ptcg_sim::deck::Deck;
///
/// let pikachu = Card::new(
///     "Pikachu",
///     TypeCode::Lightning,
///     60,
///     TypeCode::Fighting,
///     Attack::new("Gnaw", 20, EnergyCost::parse("L").unwrap()),
/// )
/// .into_ref();
///
/// let mut deck = Deck::new();
/// assert!(deck.insert(pikachu.clone()));
/// assert!(deck.insert(pikachu.clone()));
/// assert!(!deck.insert(pikachu.clone())); // third copy rejected
///
/// assert_eq!(deck.len(), 2);
/// assert!(deck.verify());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vector<CardRef>,
    rules: DeckRules,
}

impl Deck {
    /// Create an empty deck with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck with custom rules.
    #[must_use]
    pub fn with_rules(rules: DeckRules) -> Self {
        Self {
            cards: Vector::new(),
            rules,
        }
    }

    /// Build a deck without checking any limits.
    ///
    /// Use `verify` or `validate` afterwards to check the result.
    #[must_use]
    pub fn from_cards_unchecked(cards: impl IntoIterator<Item = CardRef>, rules: DeckRules) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            rules,
        }
    }

    /// The limits this deck enforces.
    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    /// Add a card, reporting why it was refused.
    ///
    /// The deck is unchanged on error.
    pub fn try_insert(&mut self, card: CardRef) -> Result<(), DeckError> {
        if self.cards.len() >= self.rules.max_deck_size {
            return Err(DeckError::DeckFull {
                max: self.rules.max_deck_size,
            });
        }

        if self.count_of(&card.name) >= self.rules.max_card_duplicates {
            return Err(DeckError::TooManyCopies {
                name: card.name.clone(),
                max: self.rules.max_card_duplicates,
            });
        }

        self.cards.push_back(card);
        Ok(())
    }

    /// Add a card if the deck limits allow it.
    ///
    /// Returns `false` and logs a warning when the card is refused; the deck
    /// is unchanged in that case.
    pub fn insert(&mut self, card: CardRef) -> bool {
        match self.try_insert(card) {
            Ok(()) => true,
            Err(e) => {
                warn!("{e}");
                false
            }
        }
    }

    /// Remove and return the most recently inserted card.
    pub fn draw(&mut self) -> Option<CardRef> {
        let card = self.cards.pop_back();
        match &card {
            Some(c) => debug!(name = %c.name, remaining = self.cards.len(), "Drew card"),
            None => debug!("Deck is empty"),
        }
        card
    }

    /// Check both limits over the current contents.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.cards.len() > self.rules.max_deck_size {
            return Err(DeckError::Oversized {
                size: self.cards.len(),
                max: self.rules.max_deck_size,
            });
        }

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for card in &self.cards {
            let count = counts.entry(card.name.as_str()).or_insert(0);
            *count += 1;
            if *count > self.rules.max_card_duplicates {
                return Err(DeckError::DuplicateLimitExceeded {
                    name: card.name.clone(),
                    count: self.count_of(&card.name),
                    max: self.rules.max_card_duplicates,
                });
            }
        }

        Ok(())
    }

    /// Whether the deck satisfies both limits. Logs the violation if not.
    pub fn verify(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("{e}");
                false
            }
        }
    }

    /// Copy the sequence of handles into a new, independent deck.
    ///
    /// Card data is shared, not cloned.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Shuffle the deck order.
    pub fn shuffle(&mut self, rng: &mut SeededRng) {
        let mut cards: Vec<CardRef> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Number of cards with the given name.
    #[must_use]
    pub fn count_of(&self, name: &str) -> usize {
        self.cards.iter().filter(|c| c.name == name).count()
    }

    /// The next `count` cards `draw` would return, in draw order.
    #[must_use]
    pub fn peek_top(&self, count: usize) -> Vec<&CardRef> {
        self.cards.iter().rev().take(count).collect()
    }

    /// `(name, count)` per distinct card, in first-appearance order.
    #[must_use]
    pub fn condensed(&self) -> Vec<(&str, usize)> {
        condense(self.cards.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from the first inserted card to the last.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Deck ({} cards):", self.cards.len())?;
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Attack, Card, EnergyCost, TypeCode};
    use std::sync::Arc;

    fn card(name: &str) -> CardRef {
        Card::new(
            name,
            TypeCode::Normal,
            50,
            TypeCode::Fighting,
            Attack::new("Tackle", 10, EnergyCost::parse("N").unwrap()),
        )
        .into_ref()
    }

    #[test]
    fn test_insert_and_draw_lifo() {
        let mut deck = Deck::new();
        assert!(deck.insert(card("A")));
        assert!(deck.insert(card("B")));
        assert!(deck.insert(card("C")));

        assert_eq!(deck.draw().unwrap().name, "C");
        assert_eq!(deck.draw().unwrap().name, "B");
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_draw_empty() {
        let mut deck = Deck::new();
        assert!(deck.draw().is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_size_limit() {
        let mut deck = Deck::new();
        for i in 0..20 {
            assert!(deck.insert(card(&format!("Card {i}"))));
        }

        assert_eq!(
            deck.try_insert(card("Card 20")),
            Err(DeckError::DeckFull { max: 20 })
        );
        assert!(!deck.insert(card("Card 21")));
        assert_eq!(deck.len(), 20);
        assert!(deck.verify());
    }

    #[test]
    fn test_duplicate_limit() {
        let mut deck = Deck::new();
        let pikachu = card("Pikachu");

        assert!(deck.insert(pikachu.clone()));
        assert!(deck.insert(pikachu.clone()));
        assert_eq!(
            deck.try_insert(pikachu.clone()),
            Err(DeckError::TooManyCopies { name: "Pikachu".into(), max: 2 })
        );

        // Distinct allocation, same name: still a copy
        assert!(!deck.insert(card("Pikachu")));
        assert_eq!(deck.count_of("Pikachu"), 2);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_custom_rules() {
        let rules = DeckRules::default().with_max_deck_size(3).with_max_card_duplicates(1);
        let mut deck = Deck::with_rules(rules);

        assert!(deck.insert(card("A")));
        assert!(!deck.insert(card("A")));
        assert!(deck.insert(card("B")));
        assert!(deck.insert(card("C")));
        assert!(!deck.insert(card("D")));
        assert_eq!(deck.rules().max_deck_size, 3);
    }

    #[test]
    fn test_verify_out_of_band_duplicates() {
        let a = card("A");
        let deck = Deck::from_cards_unchecked(vec![a.clone(), a.clone(), a], DeckRules::default());

        assert!(!deck.verify());
        assert_eq!(
            deck.validate(),
            Err(DeckError::DuplicateLimitExceeded { name: "A".into(), count: 3, max: 2 })
        );
    }

    #[test]
    fn test_verify_out_of_band_size() {
        let cards: Vec<_> = (0..21).map(|i| card(&format!("Card {i}"))).collect();
        let deck = Deck::from_cards_unchecked(cards, DeckRules::default());

        assert!(!deck.verify());
        assert_eq!(deck.validate(), Err(DeckError::Oversized { size: 21, max: 20 }));
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut deck = Deck::new();
        deck.insert(card("A"));
        deck.insert(card("B"));

        let mut copy = deck.duplicate();
        while copy.draw().is_some() {}
        assert!(copy.is_empty());

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.peek_top(1)[0].name, "B");

        copy.insert(card("C"));
        assert_eq!(deck.count_of("C"), 0);
    }

    #[test]
    fn test_duplicate_shares_cards() {
        let mut deck = Deck::new();
        let a = card("A");
        deck.insert(a.clone());

        let copy = deck.duplicate();
        let original = deck.iter().next().unwrap();
        let copied = copy.iter().next().unwrap();
        assert!(Arc::ptr_eq(original, copied));
        assert!(Arc::ptr_eq(original, &a));
    }

    #[test]
    fn test_shuffle_keeps_contents() {
        let mut deck = Deck::new();
        for i in 0..10 {
            deck.insert(card(&format!("Card {i}")));
        }
        let before: Vec<String> = deck.iter().map(|c| c.name.clone()).collect();

        deck.shuffle(&mut SeededRng::new(42));
        let mut after: Vec<String> = deck.iter().map(|c| c.name.clone()).collect();

        assert_ne!(before, after);
        after.sort();
        let mut sorted = before;
        sorted.sort();
        assert_eq!(after, sorted);
        assert!(deck.verify());
    }

    #[test]
    fn test_peek_top_order() {
        let mut deck = Deck::new();
        deck.insert(card("A"));
        deck.insert(card("B"));
        deck.insert(card("C"));

        let names: Vec<_> = deck.peek_top(2).into_iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_condensed() {
        let mut deck = Deck::new();
        deck.insert(card("A"));
        deck.insert(card("B"));
        deck.insert(card("A"));

        assert_eq!(deck.condensed(), vec![("A", 2), ("B", 1)]);
    }
}
