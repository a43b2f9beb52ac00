//! Hand representation and blackjack valuation.

use alloc::vec::Vec;

use crate::card::Card;

/// Value of a natural and the bust threshold.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Computes the blackjack value of `cards`.
///
/// Aces count 11. If the total is over 21 and the hand holds an Ace, 10 is
/// subtracted exactly once, no matter how many Aces there are.
///
/// ```
/// use bjterm::{Card, Suit, hand_value};
///
/// let cards = [Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 13)];
/// assert_eq!(hand_value(&cards), 21);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        value = value.saturating_add(card_value(card.rank));
    }

    if has_ace && value > BLACKJACK {
        value -= 10;
    }

    value
}

/// A participant's hand. Cards are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand. See [`hand_value`].
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a natural: two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }
}
