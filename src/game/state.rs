//! Round phase types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the initial four cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer draws until their policy says stop.
    DealerTurn,
    /// Both hands are final and waiting to be compared.
    Resolution,
    /// Round is over and the outcome is known.
    Terminal,
}
