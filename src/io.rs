//! Seams between the round engine and whatever draws the table and reads the keyboard.

use blackjack::{Card, Move};

use crate::participant::{capitalize, Participant, Seat};
use crate::state::{RoundResult, Tally};
use crate::GameError;

/// The question a line of input answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Offer to show the rules before the first round.
    Welcome,
    Name,
    HitOrStay,
    /// "Press Enter" pause; the text typed is ignored.
    Continue,
    Replay,
}

/// A hand as it should be drawn. When `hidden`, only the card count and the
/// first card may be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    pub seat: Seat,
    pub name: String,
    pub cards: Vec<Card>,
    pub total: u16,
    pub hidden: bool,
}

impl HandView {
    pub fn of(participant: &Participant, hidden: bool) -> Self {
        Self {
            seat: participant.seat,
            name: participant.name.clone(),
            cards: participant.hand().cards().to_vec(),
            total: participant.total_value(),
            hidden,
        }
    }
}

/// Things worth showing to the person at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Rules,
    Introduced { player: String, dealer: String },
    InvalidName,
    /// The dealer's hand with everything but the first card masked.
    DealerHidden(HandView),
    /// A participant's current hand before it decides.
    Hand(HandView),
    InvalidMove,
    Moved { name: String, choice: Move },
    Blackjack { seat: Seat, name: String },
    Push,
    /// Both hands in full; `busted` when either went over 21.
    Reveal {
        dealer: HandView,
        player: HandView,
        busted: bool,
    },
    Settled {
        result: RoundResult,
        player: String,
        dealer: String,
    },
    Tally(Tally),
    Farewell(Tally),
}

/// Blocking line input.
pub trait Input {
    /// Read one line (without its line terminator) in answer to `prompt`.
    fn read_line(&mut self, prompt: Prompt) -> Result<String, GameError>;
}

/// Where events are drawn.
pub trait Screen {
    fn show(&mut self, event: Event) -> Result<(), GameError>;
}

/// `1` or anything starting with `h` hits, `2` or anything starting with `s` stays.
/// Case is ignored but whitespace is not, so `" h"` is rejected.
pub fn parse_move(line: &str) -> Result<Move, GameError> {
    let answer = line.to_lowercase();
    if answer == "1" || answer.starts_with('h') {
        Ok(Move::Hit)
    } else if answer == "2" || answer.starts_with('s') {
        Ok(Move::Stay)
    } else {
        Err(GameError::InvalidInput(line.to_string()))
    }
}

pub fn parse_name(line: &str) -> Result<String, GameError> {
    let name = capitalize(line);
    if name.is_empty() {
        return Err(GameError::EmptyName);
    }
    Ok(name)
}

/// `e` or `3` ends the session; anything else, including an empty line, plays on.
pub fn wants_exit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "e" | "3")
}

pub fn wants_rules(line: &str) -> bool {
    line.to_lowercase().starts_with('r')
}
