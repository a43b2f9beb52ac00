//! A terminal blackjack game with an optional `no_std` engine.
//!
//! A round is a [`GameSession`]: it owns a shuffled [`Deck`], the player's and
//! dealer's [`Hand`]s, and walks through dealing, the player's turn, the
//! dealer's turn and resolution. The round talks to the player only through
//! the [`Table`] port. With the `std` feature, [`ui::Presenter`] implements
//! that port on a [`terminal::Terminal`] with ASCII-art cards, and
//! [`session::Session`] keeps dealing rounds until the player stops.
//!
//! # Example
//!
//! ```
//! use bjterm::{Card, Deck, GameSession, Phase, RoundOutcome, Suit};
//!
//! let deck = Deck::from_draws(&[
//!     Card::new(Suit::Spades, 1),
//!     Card::new(Suit::Hearts, 13),
//!     Card::new(Suit::Clubs, 9),
//!     Card::new(Suit::Diamonds, 8),
//! ]);
//! let mut session = GameSession::new(deck);
//!
//! assert_eq!(session.deal(), Ok(Phase::Terminal));
//! assert_eq!(session.outcome(), Some(RoundOutcome::PlayerBlackjack));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod art;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod table;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod terminal;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod ui;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, InvalidInput, RoundError};
pub use game::{DEALER_STAND_VALUE, GameSession, Phase, dealer_should_hit};
pub use hand::{BLACKJACK, Hand, hand_value};
pub use options::TableOptions;
pub use result::{RoundOutcome, RoundResult};
pub use session::{Session, SessionSummary};
pub use table::{Answer, Move, Table};
