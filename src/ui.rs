//! Terminal presentation: card art, typewriter text and key prompts.

use alloc::format;
use core::time::Duration;
use std::io;
use std::thread;

use crate::art::{card_column, card_lines};
use crate::card::Card;
use crate::error::InvalidInput;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::{RoundOutcome, RoundResult};
use crate::table::Table;
use crate::terminal::Terminal;

const WELCOME: &str = "Welcome to the underground Linux card room!
Tonight's game... Blackjack!

The rules are simple!
  - You are dealt cards one at a time, and you choose when to stop.
  - Stay at or below 21 while finishing closer to it than the dealer.
";

/// Row of the "play again?" prompt.
pub const PLAY_AGAIN_ROW: u16 = 9;
/// Row of the correction shown under the "play again?" prompt.
pub const PLAY_AGAIN_HINT_ROW: u16 = 10;

/// Draws the table on a [`Terminal`] and reads the player's keys.
///
/// # Example
///
/// ```
/// use bjterm::{Card, Suit, TableOptions};
/// use bjterm::terminal::MemoryTerminal;
/// use bjterm::ui::Presenter;
///
/// let mut presenter = Presenter::new(MemoryTerminal::new(24, 80), TableOptions::instant());
/// presenter
///     .display_cards(&[Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 13)])
///     .unwrap();
/// assert_eq!(presenter.terminal().row_text(3), "│   ♠   ││   ♡   │");
/// ```
#[derive(Debug)]
pub struct Presenter<T> {
    terminal: T,
    options: TableOptions,
}

impl<T: Terminal> Presenter<T> {
    /// Creates a presenter drawing on `terminal`.
    #[must_use]
    pub const fn new(terminal: T, options: TableOptions) -> Self {
        Self { terminal, options }
    }

    /// Returns the terminal.
    #[must_use]
    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Gives the terminal back.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.terminal
    }

    /// Clears the screen and draws `cards` left to right from row 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    pub fn display_cards(&mut self, cards: &[Card]) -> io::Result<()> {
        self.terminal.clear_screen()?;

        for (index, card) in cards.iter().enumerate() {
            let col = card_column(index);
            for (row, line) in card_lines(card).iter().enumerate() {
                self.terminal.write_at(row as u16, col, line)?;
            }
        }

        self.terminal.refresh()
    }

    /// Writes `text` one character at a time.
    fn type_out(&mut self, text: &str, delay: Duration) -> io::Result<()> {
        let mut buf = [0; 4];
        for ch in text.chars() {
            self.terminal.write_inline(ch.encode_utf8(&mut buf))?;
            self.terminal.refresh()?;
            pause(delay);
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.type_out(text, self.options.char_delay)
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

impl<T: Terminal> Table for Presenter<T> {
    type Error = io::Error;

    fn welcome(&mut self) -> io::Result<()> {
        self.terminal.clear_screen()?;
        self.terminal.refresh()?;
        self.terminal.hide_cursor()?;

        if !self.options.welcome {
            return Ok(());
        }

        self.type_out(WELCOME, self.options.welcome_char_delay)?;
        self.terminal.write_inline("\nAre you ready?")?;
        self.terminal.refresh()?;
        // Any key starts the game.
        self.terminal.read_key()?;
        Ok(())
    }

    fn show_player_hand(&mut self, hand: &Hand) -> io::Result<()> {
        self.display_cards(hand.cards())
    }

    fn prompt_move(&mut self, value: u8) -> io::Result<char> {
        self.terminal
            .write_inline(&format!("\nYou have a score of {value}."))?;
        self.terminal
            .write_inline("\nDo you want to hit or stand? (h/s): ")?;
        self.terminal.refresh()?;
        self.terminal.read_key()
    }

    fn reject_move(&mut self, hand: &Hand, _input: InvalidInput) -> io::Result<()> {
        self.display_cards(hand.cards())?;
        self.say("\nPlease enter either \"h\" or \"s\".")
    }

    fn player_hit(&mut self, hand: &Hand) -> io::Result<()> {
        self.say("\nYou decide to hit...")?;
        self.display_cards(hand.cards())
    }

    fn player_stand(&mut self) -> io::Result<()> {
        self.say("\nYou decide to stand.")
    }

    fn reveal_dealer(&mut self, hand: &Hand) -> io::Result<()> {
        self.terminal.clear_screen()?;
        self.terminal.refresh()?;

        self.say("Now, the dealer's hand!")?;
        pause(self.options.dealer_reveal_pause);
        self.display_cards(hand.cards())?;
        pause(self.options.dealer_reveal_pause);
        Ok(())
    }

    fn dealer_hit(&mut self, hand: &Hand) -> io::Result<()> {
        self.say("\nDealer decides to hit...")?;
        self.display_cards(hand.cards())?;
        pause(self.options.dealer_draw_pause);
        Ok(())
    }

    fn announce(&mut self, result: &RoundResult) -> io::Result<()> {
        let RoundResult {
            outcome,
            player_value: p,
            dealer_value: d,
        } = *result;

        if outcome.is_showdown() {
            pause(self.options.result_pause);
            self.terminal.clear_screen()?;
            self.terminal.refresh()?;
        }

        match outcome {
            RoundOutcome::PlayerBlackjack => self.say("\nBlackjack! You win!"),
            RoundOutcome::PlayerBust => self.say(&format!("\nBust! You lose! ({p})")),
            RoundOutcome::DealerBust => self.say(&format!("\nDealer busts! You win! ({d})")),
            RoundOutcome::DealerWins => {
                self.say("\nDealer decides to stand...")?;
                self.say(&format!("\nDealer wins! ({d} > {p})"))
            }
            RoundOutcome::PlayerWins => {
                self.say("\nDealer decides to stand...")?;
                self.say(&format!("\nYou win! ({d} < {p})"))
            }
            RoundOutcome::Push => self.say("\nIt's a tie!"),
        }
    }

    fn prompt_play_again(&mut self) -> io::Result<char> {
        self.terminal
            .write_at(PLAY_AGAIN_ROW, 0, "Do you want to play again? (y/n): ")?;
        self.terminal.refresh()?;
        self.terminal.read_key()
    }

    fn reject_play_again(&mut self, _input: InvalidInput) -> io::Result<()> {
        self.terminal
            .write_at(PLAY_AGAIN_HINT_ROW, 0, "Please enter either \"y\" or \"n\".")?;
        self.terminal.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::terminal::MemoryTerminal;

    fn presenter() -> Presenter<MemoryTerminal> {
        Presenter::new(MemoryTerminal::new(24, 80), TableOptions::instant())
    }

    fn hand(cards: &[Card]) -> Hand {
        Hand::from(cards)
    }

    #[test]
    fn cards_are_drawn_side_by_side() {
        let mut p = presenter();
        p.display_cards(&[Card::new(Suit::Clubs, 10), Card::new(Suit::Diamonds, 7)])
            .unwrap();

        let term = p.terminal();
        assert_eq!(term.row_text(0), "┌───────┐┌───────┐");
        assert_eq!(term.row_text(1), "│ 10    ││ 7     │");
        assert_eq!(term.row_text(3), "│   ♣   ││   ♢   │");
        assert_eq!(term.row_text(5), "│    10 ││     7 │");
        assert_eq!(term.row_text(6), "└───────┘└───────┘");
        assert_eq!(term.row_text(7), "");
    }

    #[test]
    fn move_prompt_shows_score_under_the_cards() {
        let mut p = Presenter::new(
            MemoryTerminal::new(24, 80).with_keys("h"),
            TableOptions::instant(),
        );
        p.show_player_hand(&hand(&[Card::new(Suit::Clubs, 5), Card::new(Suit::Hearts, 4)]))
            .unwrap();

        assert_eq!(p.prompt_move(9).unwrap(), 'h');
        assert_eq!(p.terminal().row_text(7), "You have a score of 9.");
        assert_eq!(
            p.terminal().row_text(8),
            "Do you want to hit or stand? (h/s):"
        );
    }

    #[test]
    fn rejected_move_redraws_hand_with_correction() {
        let mut p = presenter();
        let cards = hand(&[Card::new(Suit::Clubs, 5), Card::new(Suit::Hearts, 4)]);
        p.show_player_hand(&cards).unwrap();
        p.terminal.write_inline("\nleftover").unwrap();

        p.reject_move(&cards, InvalidInput { key: 'x' }).unwrap();

        assert_eq!(p.terminal().row_text(7), "Please enter either \"h\" or \"s\".");
        assert_eq!(p.terminal().row_text(8), "");
    }

    #[test]
    fn showdown_clears_before_the_verdict() {
        let mut p = presenter();
        p.display_cards(&[Card::new(Suit::Clubs, 10)]).unwrap();
        let clears = p.terminal().clears();

        p.announce(&RoundResult {
            outcome: RoundOutcome::PlayerWins,
            player_value: 19,
            dealer_value: 17,
        })
        .unwrap();

        assert_eq!(p.terminal().clears(), clears + 1);
        assert_eq!(p.terminal().row_text(1), "Dealer decides to stand...");
        assert_eq!(p.terminal().row_text(2), "You win! (17 < 19)");
    }

    #[test]
    fn bust_verdict_stays_under_the_cards() {
        let mut p = presenter();
        p.display_cards(&[Card::new(Suit::Clubs, 10)]).unwrap();

        p.announce(&RoundResult {
            outcome: RoundOutcome::PlayerBust,
            player_value: 24,
            dealer_value: 15,
        })
        .unwrap();

        assert_eq!(p.terminal().row_text(0), "┌───────┐");
        assert_eq!(p.terminal().row_text(7), "Bust! You lose! (24)");
    }

    #[test]
    fn play_again_prompt_uses_fixed_rows() {
        let mut p = Presenter::new(
            MemoryTerminal::new(24, 80).with_keys("q"),
            TableOptions::instant(),
        );

        assert_eq!(p.prompt_play_again().unwrap(), 'q');
        p.reject_play_again(InvalidInput { key: 'q' }).unwrap();

        assert_eq!(p.terminal().row_text(9), "Do you want to play again? (y/n):");
        assert_eq!(p.terminal().row_text(10), "Please enter either \"y\" or \"n\".");
    }

    #[test]
    fn welcome_waits_for_any_key() {
        let mut p = Presenter::new(
            MemoryTerminal::new(24, 80).with_keys("z"),
            TableOptions::instant(),
        );
        p.welcome().unwrap();

        assert!(p.terminal().cursor_hidden());
        assert_eq!(p.terminal().keys_left(), 0);
        assert_eq!(p.terminal().row_text(1), "Tonight's game... Blackjack!");
        assert_eq!(p.terminal().row_text(7), "Are you ready?");
    }

    #[test]
    fn welcome_can_be_skipped() {
        let mut p = Presenter::new(
            MemoryTerminal::new(24, 80),
            TableOptions::instant().with_welcome(false),
        );
        p.welcome().unwrap();

        assert!(p.terminal().cursor_hidden());
        assert_eq!(p.terminal().keys_read(), 0);
    }
}
