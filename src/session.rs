//! Replay loop: deals rounds until the player declines another.

use rand::Rng;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::error::RoundError;
use crate::game::GameSession;
use crate::result::{RoundOutcome, RoundResult};
use crate::table::{Answer, Table};

/// Tally of the rounds played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to the end.
    pub rounds: usize,
    /// Rounds the player won.
    pub wins: usize,
    /// Rounds the dealer won.
    pub losses: usize,
    /// Rounds that ended level.
    pub pushes: usize,
}

impl SessionSummary {
    /// Counts one finished round.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        self.rounds += 1;
        if outcome.player_won() {
            self.wins += 1;
        } else if outcome.dealer_won() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
    }
}

/// Plays rounds on a [`Table`] with decks shuffled by `R`.
///
/// # Example
///
/// ```
/// use bjterm::TableOptions;
/// use bjterm::session::Session;
/// use bjterm::terminal::MemoryTerminal;
/// use bjterm::ui::Presenter;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// // Any key for the welcome, stand, then decline another round.
/// let terminal = MemoryTerminal::new(24, 80).with_keys(".sn");
/// let table = Presenter::new(terminal, TableOptions::instant());
/// let mut session = Session::new(table, ChaCha8Rng::seed_from_u64(9));
///
/// let summary = session.run().unwrap();
/// assert_eq!(summary.rounds, 1);
/// ```
#[derive(Debug)]
pub struct Session<T, R> {
    table: T,
    rng: R,
    summary: SessionSummary,
}

impl<T: Table, R: Rng> Session<T, R> {
    /// Creates a session playing on `table`.
    #[must_use]
    pub const fn new(table: T, rng: R) -> Self {
        Self {
            table,
            rng,
            summary: SessionSummary {
                rounds: 0,
                wins: 0,
                losses: 0,
                pushes: 0,
            },
        }
    }

    /// Greets the player, then plays rounds until they decline another.
    ///
    /// # Errors
    ///
    /// Returns an error if a deck runs out or the table fails.
    pub fn run(&mut self) -> Result<SessionSummary, RoundError<T::Error>> {
        info!("session started");
        self.table.welcome().map_err(RoundError::Table)?;

        loop {
            let deck = Deck::shuffled(&mut self.rng);
            self.play_round(deck)?;

            if !self.play_again().map_err(RoundError::Table)? {
                break;
            }
        }

        info!(
            rounds = self.summary.rounds,
            wins = self.summary.wins,
            losses = self.summary.losses,
            pushes = self.summary.pushes,
            "session ended"
        );
        Ok(self.summary)
    }

    /// Plays one round dealt from `deck` and counts its outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or the table fails.
    pub fn play_round(&mut self, deck: Deck) -> Result<RoundResult, RoundError<T::Error>> {
        let mut round = GameSession::new(deck);
        let result = round.play(&mut self.table)?;

        info!(outcome = ?result.outcome, round = self.summary.rounds + 1, "round over");
        self.summary.record(result.outcome);

        Ok(result)
    }

    /// Asks until the player answers `y` or `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table fails.
    pub fn play_again(&mut self) -> Result<bool, T::Error> {
        loop {
            let key = self.table.prompt_play_again()?;
            match Answer::try_from(key) {
                Ok(answer) => return Ok(answer == Answer::Yes),
                Err(input) => {
                    debug!(key = ?input.key, "rejected play-again answer");
                    self.table.reject_play_again(input)?;
                }
            }
        }
    }

    /// Returns the tally so far.
    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &T {
        &self.table
    }

    /// Gives the table back.
    #[must_use]
    pub fn into_table(self) -> T {
        self.table
    }
}
