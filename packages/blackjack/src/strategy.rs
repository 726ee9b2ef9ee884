use crate::rules::DEALER_STANDS_AT;
use crate::Hand;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Hit,
    Stay,
}

/// How a participant chooses between hitting and staying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// A person decides at the keyboard.
    Human,
    /// Hit while the hand is below `threshold`, stay otherwise.
    RuleBased { threshold: u16 },
}

impl Policy {
    pub const DEALER: Policy = Policy::RuleBased {
        threshold: DEALER_STANDS_AT,
    };

    /// The move this policy makes on its own, or `None` when someone has to be asked.
    pub fn automatic_move(&self, hand: &Hand) -> Option<Move> {
        match *self {
            Policy::Human => None,
            Policy::RuleBased { threshold } => {
                if hand.total_value() < threshold {
                    Some(Move::Hit)
                } else {
                    Some(Move::Stay)
                }
            }
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Policy::Human)
    }
}
