//! The interaction port a round is played through.
//!
//! [`GameSession::play`](crate::GameSession::play) and
//! [`Session`](crate::session::Session) only talk to the player through
//! [`Table`], so the engine stays independent of how hands are drawn and how
//! keys are read.

use crate::error::InvalidInput;
use crate::hand::Hand;
use crate::result::RoundResult;

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl TryFrom<char> for Move {
    type Error = InvalidInput;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key.to_ascii_lowercase() {
            'h' => Ok(Self::Hit),
            's' => Ok(Self::Stand),
            _ => Err(InvalidInput { key }),
        }
    }
}

/// Answer to the "play again?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Deal another round.
    Yes,
    /// End the session.
    No,
}

impl TryFrom<char> for Answer {
    type Error = InvalidInput;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key.to_ascii_lowercase() {
            'y' => Ok(Self::Yes),
            'n' => Ok(Self::No),
            _ => Err(InvalidInput { key }),
        }
    }
}

/// Everything the engine needs from the player-facing side.
///
/// Methods that read a key return it raw; parsing and re-prompting happen in
/// the engine.
pub trait Table {
    /// Error raised when rendering or reading fails.
    type Error;

    /// Greets the player before the first round and waits for a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render or read input.
    fn welcome(&mut self) -> Result<(), Self::Error>;

    /// Shows the player's freshly dealt hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render.
    fn show_player_hand(&mut self, hand: &Hand) -> Result<(), Self::Error>;

    /// Shows the player's score and asks for hit or stand.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render or read input.
    fn prompt_move(&mut self, value: u8) -> Result<char, Self::Error>;

    /// Tells the player the last key was not `h` or `s`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render.
    fn reject_move(&mut self, hand: &Hand, input: InvalidInput) -> Result<(), Self::Error>;

    /// Shows the hand after the player took a card.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render.
    fn player_hit(&mut self, hand: &Hand) -> Result<(), Self::Error>;

    /// Acknowledges that the player stood.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render.
    fn player_stand(&mut self) -> Result<(), Self::Error>;

    /// Turns over the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render.
    fn reveal_dealer(&mut self, hand: &Hand) -> Result<(), Self::Error>;

    /// Shows the dealer's hand after the dealer took a card.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render.
    fn dealer_hit(&mut self, hand: &Hand) -> Result<(), Self::Error>;

    /// Reports how the round ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render.
    fn announce(&mut self, result: &RoundResult) -> Result<(), Self::Error>;

    /// Asks whether to deal another round.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render or read input.
    fn prompt_play_again(&mut self) -> Result<char, Self::Error>;

    /// Tells the player the last key was not `y` or `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot render.
    fn reject_play_again(&mut self, input: InvalidInput) -> Result<(), Self::Error>;
}
