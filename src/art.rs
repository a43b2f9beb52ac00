//! ASCII-art card glyphs.

use alloc::format;
use alloc::string::String;

use crate::card::Card;

/// Columns a card occupies, which is also the stride between cards.
pub const CARD_WIDTH: u16 = 9;
/// Rows a card occupies.
pub const CARD_HEIGHT: u16 = 7;

/// Renders `card` as the seven lines of its box.
///
/// ```
/// use bjterm::{Card, Suit, art::card_lines};
///
/// let lines = card_lines(&Card::new(Suit::Spades, 10));
/// assert_eq!(lines[1], "│ 10    │");
/// assert_eq!(lines[5], "│    10 │");
/// ```
#[must_use]
pub fn card_lines(card: &Card) -> [String; CARD_HEIGHT as usize] {
    let rank = card.rank_label();
    let suit = card.suit.glyph();

    [
        String::from("┌───────┐"),
        format!("│ {rank:<2}    │"),
        String::from("│       │"),
        format!("│   {suit}   │"),
        String::from("│       │"),
        format!("│    {rank:>2} │"),
        String::from("└───────┘"),
    ]
}

/// Column of the left edge of the card at `index` in a hand.
#[must_use]
pub const fn card_column(index: usize) -> u16 {
    index as u16 * CARD_WIDTH
}
