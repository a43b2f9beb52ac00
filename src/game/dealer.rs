use core::cmp::Ordering;

use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::RoundOutcome;

use super::{GameSession, Phase};

/// The dealer stops drawing once their hand reaches this value.
pub const DEALER_STAND_VALUE: u8 = 17;

/// Returns whether the dealer takes another card.
///
/// The dealer ignores the player's hand and does not distinguish soft totals:
/// anything under 17 hits.
#[must_use]
pub fn dealer_should_hit(hand: &Hand) -> bool {
    hand.value() < DEALER_STAND_VALUE
}

impl GameSession {
    /// Dealer plays one step of their hand.
    ///
    /// Draws and returns a card while [`dealer_should_hit`] holds. Once the
    /// dealer stands or busts, returns `None` and moves to resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_hit(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_phase(Phase::DealerTurn)?;

        if !dealer_should_hit(&self.dealer) {
            debug!(value = self.dealer.value(), "dealer stops drawing");
            self.phase = Phase::Resolution;
            return Ok(None);
        }

        let card = self.draw()?;
        self.dealer.add_card(card);
        debug!(%card, value = self.dealer.value(), "dealer hits");

        Ok(Some(card))
    }

    /// Compares the final hands and ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for resolution.
    pub fn resolve(&mut self) -> Result<RoundOutcome, ActionError> {
        self.ensure_phase(Phase::Resolution)?;

        let dealer = self.dealer.value();
        let player = self.player.value();

        let outcome = if dealer > BLACKJACK {
            RoundOutcome::DealerBust
        } else {
            match dealer.cmp(&player) {
                Ordering::Greater => RoundOutcome::DealerWins,
                Ordering::Less => RoundOutcome::PlayerWins,
                Ordering::Equal => RoundOutcome::Push,
            }
        };

        self.finish(outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    use crate::card::Suit;

    fn hand_worth(value: u8) -> Hand {
        let mut ranks = Vec::new();
        let mut left = value;
        while left > 10 {
            ranks.push(10);
            left -= 10;
        }
        // A lone 1 would read as an Ace.
        if left == 1 {
            ranks.pop();
            ranks.push(9);
            left = 2;
        }
        ranks.push(left);

        let mut hand = Hand::new();
        for rank in ranks {
            hand.add_card(Card::new(Suit::Clubs, rank));
        }
        hand
    }

    #[test]
    fn dealer_hits_exactly_below_seventeen() {
        for value in 2..=30 {
            let hand = hand_worth(value);
            assert_eq!(hand.value(), value);
            assert_eq!(dealer_should_hit(&hand), value < 17, "value {value}");
        }
    }

    #[test]
    fn soft_seventeen_stands() {
        let hand = Hand::from([Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 6)].as_slice());
        assert_eq!(hand.value(), 17);
        assert!(!dealer_should_hit(&hand));
    }
}
