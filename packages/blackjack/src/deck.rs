use rand::seq::SliceRandom;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{Card, Error};

pub const DECK_SIZE: usize = 52;

/// A single 52-card deck. Cards are dealt from the top (the end of `cards`).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Full, shuffled deck seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Full, shuffled deck whose shuffles are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.reset();
        deck
    }

    /// Deck that deals `cards` in the given order without shuffling.
    /// A later `reset` replaces them with a full shuffled deck.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Deck {
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend((0..DECK_SIZE).filter_map(Card::from_index));
        self.shuffle();
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal(&mut self) -> Result<Card, Error> {
        self.cards.pop().ok_or(Error::ExhaustedDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
