//! The shuffled deck a round is dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::DeckError;

/// A single 52-card deck.
///
/// Cards are drawn from the end of the underlying vector and never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds every rank and suit combination once, in order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in 1..=RANKS.len() as u8 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Builds a full deck and shuffles it with `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        debug!(cards = deck.cards.len(), "shuffled new deck");
        deck
    }

    /// Builds a stacked deck that deals `draws` in slice order.
    ///
    /// The deck is not checked for duplicates; it exists for replays and tests.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the remaining cards; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sorted(deck: &Deck) -> Vec<(u8, u8)> {
        let mut keys: Vec<(u8, u8)> = deck
            .cards()
            .iter()
            .map(|c| (c.suit as u8, c.rank))
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn shuffled_deck_holds_every_card_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let deck = Deck::shuffled(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        let mut keys = sorted(&deck);
        keys.dedup();
        assert_eq!(keys.len(), DECK_SIZE);
        assert_eq!(keys, sorted(&Deck::ordered()));
    }

    #[test]
    fn different_seeds_give_different_orders() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(2));
        assert_ne!(a.cards(), b.cards());
    }

    #[test]
    fn draw_removes_card_for_good() {
        let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
        let before = deck.len();

        let card = deck.draw().unwrap();

        assert_eq!(deck.len(), before - 1);
        assert!(!deck.cards().contains(&card));
    }

    #[test]
    fn stacked_deck_deals_in_order_then_runs_dry() {
        let first = Card::new(Suit::Clubs, 4);
        let second = Card::new(Suit::Hearts, 9);
        let mut deck = Deck::from_draws(&[first, second]);

        assert_eq!(deck.draw(), Ok(first));
        assert_eq!(deck.draw(), Ok(second));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(DeckError::Empty));
    }
}
