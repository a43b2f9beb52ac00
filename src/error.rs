//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while advancing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The operation does not apply to the current phase.
    #[error("invalid phase for this action")]
    InvalidState,
    /// The deck ran out while a card was needed.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}

/// A keystroke that is not one of the answers a prompt accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized key {key:?}")]
pub struct InvalidInput {
    /// The key as it was read.
    pub key: char,
}

/// Errors that end a round played through a [`Table`](crate::Table).
#[derive(Debug, Error)]
pub enum RoundError<E> {
    /// The engine rejected an operation.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The table failed to render or read input.
    #[error("table interaction failed: {0}")]
    Table(E),
}
