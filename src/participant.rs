use blackjack::{Card, Hand, Move, Policy};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Names the dealer is drawn from.
pub const DEALER_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Dealer,
}

/// One side of the table. Player and dealer differ only in `policy`.
///
/// `name` and `score` live for the whole session; the hand and the current
/// move are cleared by `reset_round`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub seat: Seat,
    pub policy: Policy,
    hand: Hand,
    current_move: Move,
    score: u32,
}

impl Participant {
    pub fn new(name: impl Into<String>, seat: Seat, policy: Policy) -> Self {
        Self {
            name: name.into(),
            seat,
            policy,
            hand: Hand::new(),
            current_move: Move::Hit,
            score: 0,
        }
    }

    pub fn player(name: impl Into<String>) -> Self {
        Self::new(name, Seat::Player, Policy::Human)
    }

    pub fn dealer(name: impl Into<String>) -> Self {
        Self::new(name, Seat::Dealer, Policy::DEALER)
    }

    pub fn random_dealer<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let name = DEALER_NAMES.choose(rng).copied().unwrap_or(DEALER_NAMES[0]);
        Self::dealer(name)
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn current_move(&self) -> Move {
        self.current_move
    }

    pub fn set_move(&mut self, choice: Move) {
        self.current_move = choice;
    }

    pub fn has_stayed(&self) -> bool {
        self.current_move == Move::Stay
    }

    pub fn take(&mut self, card: Card) {
        debug_assert!(!self.has_stayed(), "{} was dealt a card after staying", self.name);
        self.hand.add_card(card);
    }

    /// Add a batch of cards in dealt order, as on the initial deal.
    pub fn take_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        debug_assert!(!self.has_stayed(), "{} was dealt cards after staying", self.name);
        self.hand.add_cards(cards);
    }

    pub fn total_value(&self) -> u16 {
        self.hand.total_value()
    }

    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self) {
        self.score += 1;
    }

    pub fn reset_round(&mut self) {
        self.hand.reset();
        self.current_move = Move::Hit;
    }
}

/// Trim a typed name and capitalize it: first letter upper case, the rest lower case.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{Rank, Suit};
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("  aDA lovelace "), "Ada lovelace");
        assert_eq!(capitalize("z"), "Z");
        assert_eq!(capitalize("   "), "");
    }

    #[test]
    fn test_random_dealer_uses_roster() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..20 {
            let dealer = Participant::random_dealer(&mut rng);
            assert!(DEALER_NAMES.contains(&dealer.name.as_str()));
            assert_eq!(dealer.seat, Seat::Dealer);
            assert_eq!(dealer.policy, Policy::DEALER);
        }
    }

    #[test]
    fn test_take_cards_keeps_dealt_order() {
        let mut dealer = Participant::dealer("Hal");
        dealer.take_cards([
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ]);
        assert_eq!(dealer.hand().first(), Some(&Card::new(Rank::Ace, Suit::Spades)));
        assert!(dealer.is_blackjack());
    }

    #[test]
    fn test_reset_round_keeps_score() {
        let mut player = Participant::player("Ada");
        player.take(Card::new(Rank::King, Suit::Hearts));
        player.take(Card::new(Rank::Nine, Suit::Clubs));
        player.set_move(Move::Stay);
        player.add_score();

        player.reset_round();

        assert!(player.hand().is_empty());
        assert_eq!(player.current_move(), Move::Hit);
        assert_eq!(player.score(), 1);
        assert_eq!(player.name, "Ada");
    }
}
