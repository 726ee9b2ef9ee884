use crate::Hand;
use serde::{Deserialize, Serialize};

/// Highest total that is not a bust.
pub const BLACKJACK: u16 = 21;

/// Cards each side receives on the initial deal.
pub const STARTING_HAND: usize = 2;

/// The dealer hits while below this total.
pub const DEALER_STANDS_AT: u16 = 17;

/// How a round ended, from the table's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    /// Equal, non-busted totals.
    Tie,
    /// Both sides were dealt a blackjack.
    Push,
    /// Nobody wins because both hands are over 21.
    BothBusted,
}

impl Outcome {
    pub fn has_winner(&self) -> bool {
        matches!(self, Outcome::PlayerWins | Outcome::DealerWins)
    }
}

/// Whether `hand` beats `other`: a busted hand never wins, otherwise a higher
/// total or a busted opponent does.
pub fn wins(hand: &Hand, other: &Hand) -> bool {
    if hand.is_busted() {
        return false;
    }
    hand.total_value() > other.total_value() || other.is_busted()
}

/// Classify a finished round.
pub fn settle(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_blackjack() && dealer.is_blackjack() {
        Outcome::Push
    } else if player.is_busted() && dealer.is_busted() {
        Outcome::BothBusted
    } else if wins(player, dealer) {
        Outcome::PlayerWins
    } else if wins(dealer, player) {
        Outcome::DealerWins
    } else {
        Outcome::Tie
    }
}
