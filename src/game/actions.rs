use tracing::{debug, instrument};

use crate::card::Card;
use crate::error::{ActionError, RoundError};
use crate::result::{RoundOutcome, RoundResult};
use crate::table::{Move, Table};

use super::{GameSession, Phase};

impl GameSession {
    /// Deals two cards to the player, then two to the dealer.
    ///
    /// A player natural ends the round immediately with
    /// [`RoundOutcome::PlayerBlackjack`]; otherwise the player's turn starts.
    /// Returns the phase the round moved to.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already dealt or the deck runs out.
    pub fn deal(&mut self) -> Result<Phase, ActionError> {
        self.ensure_phase(Phase::Dealing)?;

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        debug!(
            player = self.player.value(),
            dealer = self.dealer.value(),
            "initial cards dealt"
        );

        if self.player.is_blackjack() {
            self.finish(RoundOutcome::PlayerBlackjack);
        } else {
            self.phase = Phase::PlayerTurn;
        }

        Ok(self.phase)
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round with [`RoundOutcome::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_phase(Phase::PlayerTurn)?;

        let card = self.draw()?;
        self.player.add_card(card);
        debug!(%card, value = self.player.value(), "player hits");

        if self.player.is_bust() {
            self.finish(RoundOutcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand. Hands the turn to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_phase(Phase::PlayerTurn)?;

        debug!(value = self.player.value(), "player stands");
        self.phase = Phase::DealerTurn;

        Ok(())
    }

    /// Plays a whole round through `table`.
    ///
    /// Rounds that were already dealt pick up from their current phase; a
    /// finished round is announced again and its result returned.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Action`] if the deck runs out and
    /// [`RoundError::Table`] if the table fails.
    #[instrument(level = "debug", skip_all)]
    pub fn play<T: Table>(&mut self, table: &mut T) -> Result<RoundResult, RoundError<T::Error>> {
        if self.phase == Phase::Dealing {
            self.deal()?;
            table
                .show_player_hand(&self.player)
                .map_err(RoundError::Table)?;
        }

        while self.phase == Phase::PlayerTurn {
            let key = table
                .prompt_move(self.player.value())
                .map_err(RoundError::Table)?;

            match Move::try_from(key) {
                Ok(Move::Hit) => {
                    self.hit()?;
                    table.player_hit(&self.player).map_err(RoundError::Table)?;
                }
                Ok(Move::Stand) => {
                    self.stand()?;
                    table.player_stand().map_err(RoundError::Table)?;
                }
                Err(input) => {
                    debug!(key = ?input.key, "rejected move");
                    table
                        .reject_move(&self.player, input)
                        .map_err(RoundError::Table)?;
                }
            }
        }

        if self.phase == Phase::DealerTurn {
            table
                .reveal_dealer(&self.dealer)
                .map_err(RoundError::Table)?;
            while self.dealer_hit()?.is_some() {
                table.dealer_hit(&self.dealer).map_err(RoundError::Table)?;
            }
        }

        if self.phase == Phase::Resolution {
            self.resolve()?;
        }

        let result = self.result().ok_or(ActionError::InvalidState)?;
        table.announce(&result).map_err(RoundError::Table)?;

        Ok(result)
    }
}
