//! ASCII card drawings, laid out side by side.

use blackjack::Card;

/// Lines in one card drawing.
pub const CARD_HEIGHT: usize = 9;

const INDENT: &str = "    ";
const HIDDEN: &str = "[HIDDEN]";

/// One drawn card: `rank` in the corners, `face` in the middle.
fn illustration(rank: &str, face: &str) -> [String; CARD_HEIGHT] {
    [
        format!("{INDENT}............."),
        format!("{INDENT}:           :"),
        format!("{INDENT}:  {rank:<9}:"),
        format!("{INDENT}:           :"),
        format!("{INDENT}:{face:^11}:"),
        format!("{INDENT}:           :"),
        format!("{INDENT}:{rank:>9}  :"),
        format!("{INDENT}:           :"),
        format!("{INDENT}:...........:"),
    ]
}

pub fn card(card: &Card) -> [String; CARD_HEIGHT] {
    illustration(card.rank.label(), card.suit.symbol())
}

pub fn hidden_card() -> [String; CARD_HEIGHT] {
    illustration(" ", HIDDEN)
}

/// Join drawings row by row so the cards sit next to each other.
pub fn side_by_side(drawings: &[[String; CARD_HEIGHT]]) -> Vec<String> {
    (0..CARD_HEIGHT)
        .map(|row| drawings.iter().map(|d| d[row].as_str()).collect())
        .collect()
}

pub fn hand(cards: &[Card]) -> Vec<String> {
    let drawings: Vec<_> = cards.iter().map(card).collect();
    side_by_side(&drawings)
}

/// The first card face up next to a face-down card.
pub fn hidden_hand(cards: &[Card]) -> Vec<String> {
    let mut drawings: Vec<_> = cards.first().map(card).into_iter().collect();
    drawings.push(hidden_card());
    side_by_side(&drawings)
}
