use blackjack::{Deck, Outcome};
use serde::{Deserialize, Serialize};

use crate::participant::{Participant, Seat};

/// Where the round engine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    DealingInitial,
    CheckingBlackjack,
    PlayerTurn,
    DealerTurn,
    Reveal,
    Scoring,
    AwaitingReplay,
    Ended,
}

/// Summary of one settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub player_total: u16,
    pub dealer_total: u16,
    pub player_busted: bool,
    pub dealer_busted: bool,
    pub player_blackjack: bool,
    pub dealer_blackjack: bool,
}

/// Running score shown between rounds and at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player: String,
    pub player_score: u32,
    pub dealer: String,
    pub dealer_score: u32,
}

/// Everything the engine mutates.
///
/// Round-scoped: deck contents, hands, current moves, `phase`.
/// Session-scoped: names, scores, `rounds_played`.
#[derive(Debug, Clone)]
pub struct Session {
    pub deck: Deck,
    pub player: Participant,
    pub dealer: Participant,
    pub phase: Phase,
    pub rounds_played: u32,
}

impl Session {
    pub fn new(deck: Deck, player: Participant, dealer: Participant) -> Self {
        Self {
            deck,
            player,
            dealer,
            phase: Phase::DealingInitial,
            rounds_played: 0,
        }
    }

    /// Fresh shuffled deck and empty hands; scores are kept.
    pub fn reset_round(&mut self) {
        self.deck.reset();
        self.player.reset_round();
        self.dealer.reset_round();
        self.phase = Phase::DealingInitial;
    }

    pub fn seat(&self, seat: Seat) -> &Participant {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    pub fn seat_mut(&mut self, seat: Seat) -> &mut Participant {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        }
    }

    pub fn someone_blackjack(&self) -> bool {
        self.player.is_blackjack() || self.dealer.is_blackjack()
    }

    pub fn anyone_busted(&self) -> bool {
        self.player.is_busted() || self.dealer.is_busted()
    }

    pub fn tally(&self) -> Tally {
        Tally {
            player: self.player.name.clone(),
            player_score: self.player.score(),
            dealer: self.dealer.name.clone(),
            dealer_score: self.dealer.score(),
        }
    }

    pub fn result(&self, outcome: Outcome) -> RoundResult {
        RoundResult {
            outcome,
            player_total: self.player.total_value(),
            dealer_total: self.dealer.total_value(),
            player_busted: self.player.is_busted(),
            dealer_busted: self.dealer.is_busted(),
            player_blackjack: self.player.is_blackjack(),
            dealer_blackjack: self.dealer.is_blackjack(),
        }
    }
}
