//! Round outcome types.

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player was dealt a natural.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer finished closer to 21.
    DealerWins,
    /// Player finished closer to 21.
    PlayerWins,
    /// Both finished on the same value.
    Push,
}

impl RoundOutcome {
    /// Returns whether the dealer played out their hand before this outcome.
    #[must_use]
    pub const fn is_showdown(self) -> bool {
        matches!(
            self,
            Self::DealerBust | Self::DealerWins | Self::PlayerWins | Self::Push
        )
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins
        )
    }

    /// Returns whether the dealer won the round.
    #[must_use]
    pub const fn dealer_won(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWins)
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}
