use crate::rules::{BLACKJACK, STARTING_HAND};
use crate::Card;
use serde::{Deserialize, Serialize};

/// Calculate the value of a hand.
///
/// Aces start at 11. While the total is over 21, one Ace at a time drops to 1,
/// so a hand keeps every Ace it can afford at 11.
pub fn calculate_hand_value(cards: &[Card]) -> u16 {
    let mut total: u16 = cards.iter().map(Card::value).sum();
    if total <= BLACKJACK {
        return total;
    }

    let aces = cards.iter().filter(|c| c.is_ace()).count();
    for _ in 0..aces {
        total -= 10;
        if total <= BLACKJACK {
            break;
        }
    }

    total
}

pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

/// 21 on the two dealt cards. A 21 reached by hitting is not a blackjack.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == STARTING_HAND && calculate_hand_value(cards) == BLACKJACK
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn total_value(&self) -> u16 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn reset(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        let suits = Suit::ALL;
        ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| Card::new(rank, suits[i % suits.len()]))
            .collect()
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Two, Rank::Three])), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::King, Rank::Queen])), 20);
        assert_eq!(
            calculate_hand_value(&cards(&[Rank::Jack, Rank::Ten, Rank::Two])),
            22
        );
    }

    #[test]
    fn test_calculate_hand_value_empty() {
        assert_eq!(calculate_hand_value(&[]), 0);
    }

    #[test]
    fn test_calculate_hand_value_soft_ace() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Ace, Rank::Six])), 17);
        assert_eq!(
            calculate_hand_value(&cards(&[Rank::Ace, Rank::Four, Rank::Six])),
            21
        );
    }

    #[test]
    fn test_calculate_hand_value_hard_ace() {
        assert_eq!(
            calculate_hand_value(&cards(&[Rank::Ace, Rank::Six, Rank::Nine])),
            16
        );
    }

    #[test]
    fn test_calculate_hand_value_multiple_aces() {
        // 31 drops one Ace to reach 21, the other stays at 11
        assert_eq!(
            calculate_hand_value(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])),
            21
        );
        assert_eq!(
            calculate_hand_value(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace])),
            13
        );
        assert_eq!(
            calculate_hand_value(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Nine])),
            12
        );
    }

    #[test]
    fn test_calculate_hand_value_aces_cannot_save_hand() {
        assert_eq!(
            calculate_hand_value(&cards(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five])),
            26
        );
    }

    #[test]
    fn test_is_busted_boundary() {
        assert!(!is_busted(&cards(&[Rank::King, Rank::Nine, Rank::Two])));
        assert!(is_busted(&cards(&[Rank::King, Rank::Queen, Rank::Five])));
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&cards(&[Rank::Ace, Rank::King])));
        assert!(is_blackjack(&cards(&[Rank::Ten, Rank::Ace])));
    }

    #[test]
    fn test_not_blackjack_three_cards() {
        assert!(!is_blackjack(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
    }

    #[test]
    fn test_not_blackjack_wrong_value() {
        assert!(!is_blackjack(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn test_hand_struct_value() {
        let mut hand = Hand::new();
        hand.add_cards(cards(&[Rank::King, Rank::Seven]));
        assert_eq!(hand.total_value(), 17);
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.first(), Some(&Card::new(Rank::King, Suit::Hearts)));
    }

    #[test]
    fn test_hand_total_follows_new_cards() {
        let mut hand: Hand = cards(&[Rank::Ace, Rank::Five]).into_iter().collect();
        assert_eq!(hand.total_value(), 16);
        hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
        assert_eq!(hand.total_value(), 15);
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn test_hand_serializes_cards_in_order() {
        let hand: Hand = cards(&[Rank::Ace, Rank::Ten]).into_iter().collect();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(
            json,
            r#"{"cards":[{"rank":"Ace","suit":"Hearts"},{"rank":"Ten","suit":"Diamonds"}]}"#
        );
    }

    #[test]
    fn test_hand_reset() {
        let mut hand: Hand = cards(&[Rank::Ace, Rank::King]).into_iter().collect();
        assert!(hand.is_blackjack());
        hand.reset();
        assert!(hand.is_empty());
        assert_eq!(hand.total_value(), 0);
    }
}
