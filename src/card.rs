//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Returns the glyph drawn in the middle of a card.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♡',
            Self::Diamonds => '♢',
            Self::Clubs => '♣',
        }
    }
}

/// All suits in deck construction order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// Rank labels indexed by `rank - 1`.
pub const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when evaluating a hand and render as `?`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank label shown in the card corners.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1..=13 => RANKS[self.rank as usize - 1],
            _ => "?",
        }
    }

    /// Returns whether this card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.glyph())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_labels_cover_every_rank() {
        assert_eq!(Card::new(Suit::Spades, 1).rank_label(), "A");
        assert_eq!(Card::new(Suit::Spades, 10).rank_label(), "10");
        assert_eq!(Card::new(Suit::Spades, 13).rank_label(), "K");
        assert_eq!(Card::new(Suit::Spades, 0).rank_label(), "?");
        assert_eq!(DECK_SIZE, 52);
    }

    #[test]
    fn display_joins_rank_and_glyph() {
        let card = Card::new(Suit::Hearts, 12);
        assert_eq!(alloc::format!("{card}"), "Q♡");
    }
}
