//! Hands: cards drawn from a deck.

use super::manager::Deck;
use super::summary::condense;
use crate::cards::CardRef;

/// Cards drawn from a deck, in draw order. Not validated.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<CardRef>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw up to `count` cards from `deck`.
    ///
    /// Stops early when the deck runs out. Returns how many were drawn.
    pub fn draw_from(&mut self, deck: &mut Deck, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            match deck.draw() {
                Some(card) => {
                    self.cards.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    pub fn push(&mut self, card: CardRef) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }

    /// `(name, count)` per distinct card, in first-draw order.
    #[must_use]
    pub fn condensed(&self) -> Vec<(&str, usize)> {
        condense(&self.cards)
    }
}
