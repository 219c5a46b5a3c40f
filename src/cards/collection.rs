//! Card collection: every known card, loaded once from input records.
//!
//! The collection owns the canonical `CardRef`s. Decks receive clones of
//! those handles, so removing a card from a deck never touches the
//! collection and removing it from the collection never touches a deck.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::card::{Card, CardRef};
use super::record::CardRecord;
use crate::core::config::LoaderConfig;
use crate::core::rng::SeededRng;
use crate::error::Result;

/// Ordered bag of all known cards.
///
/// ## Example
///
/// ```
/// use ptcg_sim::cards::CardCollection;
/// use ptcg_sim::core::LoaderConfig;
///
/// let data = "name,hp,type,stage,weakness,retreat,a1,d1,c1,a2,d2,c2\n\
///             Pikachu,60,L,0,I,1,Gnaw,20,L,,,\n";
///
/// let collection = CardCollection::load_from_reader(data.as_bytes(), &LoaderConfig::default()).unwrap();
/// assert_eq!(collection.len(), 1);
/// assert_eq!(collection.find_by_name("Pikachu").unwrap().hp, 60);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCollection {
    cards: Vec<CardRef>,
}

impl CardCollection {
    /// Create a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a delimited text file.
    pub fn load_from_path(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading card collection");
        let file = File::open(path)?;
        Self::load_from_reader(BufReader::new(file), config)
    }

    /// Load from any line source.
    ///
    /// Blank lines are skipped. The first record that fails to build aborts
    /// the load, with its 1-based line number attached.
    pub fn load_from_reader(reader: impl BufRead, config: &LoaderConfig) -> Result<Self> {
        let mut collection = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            if index == 0 && config.skip_header {
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            let record = CardRecord::parse_line(&line, config.delimiter);
            let card = record
                .build(&config.numeric)
                .map_err(|e| e.at_line(line_number))?;

            debug!(line = line_number, name = %card.name, "Loaded card");
            collection.add(card);
        }

        info!(cards = collection.len(), "Card collection loaded");
        Ok(collection)
    }

    /// Add a card, returning its shared handle.
    pub fn add(&mut self, card: Card) -> CardRef {
        let card = card.into_ref();
        self.cards.push(CardRef::clone(&card));
        card
    }

    /// First card with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardRef> {
        self.cards.iter().find(|c| c.name == name)
    }

    /// Remove every card with the given name.
    ///
    /// Returns how many entries were removed.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| c.name != name);
        before - self.cards.len()
    }

    /// Card at a position in load order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardRef> {
        self.cards.get(index)
    }

    /// Pick a random card.
    #[must_use]
    pub fn choose(&self, rng: &mut SeededRng) -> Option<&CardRef> {
        rng.choose(&self.cards)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardRef>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

impl std::fmt::Display for CardCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
