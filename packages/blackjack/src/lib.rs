mod card;
mod deck;
mod error;
mod hand;
pub mod rules;
mod strategy;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use error::Error;
pub use hand::{calculate_hand_value, is_blackjack, is_busted, Hand};
pub use rules::{settle, wins, Outcome};
pub use strategy::{Move, Policy};
