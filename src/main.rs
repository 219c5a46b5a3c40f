//! Demo: load a card list, build two random decks and draw opening hands.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ptcg_sim::{CardCollection, Condensed, Deck, Hand, LoaderConfig, SeededRng};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Card list to load
    #[arg(default_value = "data/pokemon_cards.csv")]
    cards: PathBuf,

    /// RNG seed; defaults to the current time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Random picks attempted per deck
    #[arg(short, long, default_value_t = 6)]
    picks: usize,

    /// Cards drawn into each hand
    #[arg(long, default_value_t = 3)]
    hand: usize,

    /// Reject records with malformed numbers instead of defaulting them
    #[arg(long)]
    strict: bool,

    /// Shuffle the battle decks before drawing
    #[arg(long)]
    shuffle: bool,

    /// Field separator
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
}

fn build_deck(collection: &CardCollection, picks: usize, rng: &mut SeededRng) -> Deck {
    let mut deck = Deck::new();
    for _ in 0..picks {
        let Some(card) = collection.choose(rng) else {
            break;
        };
        if !deck.insert(card.clone()) {
            warn!(name = %card.name, "Failed to add card");
        }
    }
    deck
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = LoaderConfig::default().with_delimiter(args.delimiter);
    if args.strict {
        config = config.strict();
    }

    let collection = CardCollection::load_from_path(&args.cards, &config)?;
    if collection.is_empty() {
        warn!(path = %args.cards.display(), "No cards loaded");
        return Ok(());
    }

    let rng = args.seed.map(SeededRng::new).unwrap_or_else(SeededRng::from_time);
    info!(seed = rng.seed(), "Seeded RNG");
    let mut picks = rng.for_context("picks");

    let deck1 = build_deck(&collection, args.picks, &mut picks);
    let deck2 = build_deck(&collection, args.picks, &mut picks);

    let mut battle_deck1 = deck1.duplicate();
    let mut battle_deck2 = deck2.duplicate();

    if args.shuffle {
        let mut shuffle = rng.for_context("shuffle");
        battle_deck1.shuffle(&mut shuffle);
        battle_deck2.shuffle(&mut shuffle);
    }

    println!("Battle Start!");

    let mut hand1 = Hand::new();
    let mut hand2 = Hand::new();
    hand1.draw_from(&mut battle_deck1, args.hand);
    hand2.draw_from(&mut battle_deck2, args.hand);

    println!("\nHand 1 (Condensed View):");
    print!("{}", Condensed(hand1.condensed()));

    println!("\nHand 2 (Condensed View):");
    print!("{}", Condensed(hand2.condensed()));

    Ok(())
}
