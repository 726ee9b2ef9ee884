use std::fs;
use std::path::Path;

use crate::config::ConfigError;

pub const RULES: &str = "\
Twenty-One Rules
================

You play against a robot dealer with one 52-card deck, reshuffled every round.

Card values
  2 to 10        face value
  J, Q, K        10
  A              11, or 1 when 11 would take the hand over 21

The deal
  You and the dealer each get two cards. Only the dealer's first card is
  shown; the second stays [HIDDEN] until the reveal.
  Two cards totalling 21 is a Blackjack and ends the round at once.
  If both of you have Blackjack it is a PUSH.

Your turn
  Enter 'h' or '1' to Hit and take another card.
  Enter 's' or '2' to Stay and keep your total.
  Go over 21 and you bust, which ends your turn and the round.

The dealer's turn
  The dealer hits below 17 and stays on 17 or more.

Winning
  The higher total that has not busted wins the round.
  A busted hand never wins. Equal totals are a tie.
  The score is kept across rounds until you exit.
";

/// The built-in rules, or the contents of `path` when one is configured.
pub fn load(path: Option<&Path>) -> Result<String, ConfigError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| ConfigError::RulesFile {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(RULES.to_string()),
    }
}
