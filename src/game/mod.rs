//! Round state machine.

use rand::Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::{RoundOutcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STAND_VALUE, dealer_should_hit};
pub use state::Phase;

/// One round of blackjack between the player and the dealer.
///
/// The session owns its deck and both hands. Phase operations
/// ([`deal`](Self::deal), [`hit`](Self::hit), [`stand`](Self::stand),
/// [`dealer_hit`](Self::dealer_hit), [`resolve`](Self::resolve)) return
/// [`ActionError::InvalidState`] when called out of turn;
/// [`play`](Self::play) runs the whole round against a [`Table`](crate::Table).
#[derive(Debug, Clone)]
pub struct GameSession {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    outcome: Option<RoundOutcome>,
}

impl GameSession {
    /// Creates a session that deals from `deck`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{Deck, GameSession, Phase};
    ///
    /// let session = GameSession::new(Deck::ordered());
    /// assert_eq!(session.phase(), Phase::Dealing);
    /// ```
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Dealing,
            outcome: None,
        }
    }

    /// Creates a session with a freshly shuffled deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Deck::shuffled(rng))
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, ActionError> {
        Ok(self.deck.draw()?)
    }

    fn ensure_phase(&self, phase: Phase) -> Result<(), ActionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        debug!(
            ?outcome,
            player = self.player.value(),
            dealer = self.dealer.value(),
            "round finished"
        );
        self.outcome = Some(outcome);
        self.phase = Phase::Terminal;
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the outcome once the round is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns the outcome together with both final hand values.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.outcome.map(|outcome| RoundResult {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        })
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
