//! The terminal surface the presenter draws on.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use std::io;

/// Minimal full-screen text surface.
///
/// Rows and columns are zero-based. Text written with
/// [`write_inline`](Self::write_inline) continues from the cursor, and `\n`
/// moves the cursor to the start of the next row.
pub trait Terminal {
    /// Erases everything and moves the cursor to the top-left corner.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Writes `text` starting at `row`, `col` and leaves the cursor after it.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;

    /// Writes `text` at the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    fn write_inline(&mut self, text: &str) -> io::Result<()>;

    /// Flushes pending writes to the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be flushed.
    fn refresh(&mut self) -> io::Result<()>;

    /// Blocks until a key is pressed and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if input closes or the player interrupts the game.
    fn read_key(&mut self) -> io::Result<char>;

    /// Hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    fn hide_cursor(&mut self) -> io::Result<()>;
}

/// An in-memory terminal with scripted keys.
///
/// Useful for driving the game headless. Text outside the grid is dropped.
#[derive(Debug, Clone)]
pub struct MemoryTerminal {
    grid: Vec<Vec<char>>,
    width: usize,
    row: usize,
    col: usize,
    keys: VecDeque<char>,
    clears: usize,
    reads: usize,
    cursor_hidden: bool,
}

impl MemoryTerminal {
    /// Creates a blank terminal of `rows` by `cols`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: alloc::vec![alloc::vec![' '; cols]; rows],
            width: cols,
            row: 0,
            col: 0,
            keys: VecDeque::new(),
            clears: 0,
            reads: 0,
            cursor_hidden: false,
        }
    }

    /// Queues keys to be returned by [`Terminal::read_key`], in order.
    #[must_use]
    pub fn with_keys(mut self, keys: &str) -> Self {
        self.keys.extend(keys.chars());
        self
    }

    /// Returns row `row` with trailing blanks trimmed.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.grid.get(row).map_or_else(String::new, |line| {
            line.iter().collect::<String>().trim_end().into()
        })
    }

    /// Returns the whole screen, one line per row, trailing blanks trimmed.
    #[must_use]
    pub fn screen(&self) -> String {
        (0..self.grid.len())
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the number of keys not yet read.
    #[must_use]
    pub fn keys_left(&self) -> usize {
        self.keys.len()
    }

    /// Returns how many times the screen was cleared.
    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }

    /// Returns how many keys were read.
    #[must_use]
    pub const fn keys_read(&self) -> usize {
        self.reads
    }

    /// Returns whether the cursor was hidden.
    #[must_use]
    pub const fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    fn put(&mut self, ch: char) {
        if ch == '\n' {
            self.row += 1;
            self.col = 0;
            return;
        }
        if let Some(cell) = self
            .grid
            .get_mut(self.row)
            .and_then(|line| line.get_mut(self.col))
        {
            *cell = ch;
        }
        self.col = (self.col + 1).min(self.width);
    }
}

impl Terminal for MemoryTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        for line in &mut self.grid {
            line.fill(' ');
        }
        self.row = 0;
        self.col = 0;
        self.clears += 1;
        Ok(())
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        self.row = row as usize;
        self.col = col as usize;
        self.write_inline(text)
    }

    fn write_inline(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            self.put(ch);
        }
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<char> {
        let key = self
            .keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted keys left"))?;
        self.reads += 1;
        Ok(key)
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.cursor_hidden = true;
        Ok(())
    }
}

/// The character a real terminal reports for the Esc key.
pub const ESC: char = '\x1b';

#[cfg(feature = "terminal")]
pub use self::termion_backend::TermionTerminal;

#[cfg(feature = "terminal")]
mod termion_backend {
    use std::io::{self, Stdin, Stdout, Write};

    use termion::event::Key;
    use termion::input::{Keys, TermRead};
    use termion::raw::{IntoRawMode, RawTerminal};
    use termion::screen::{AlternateScreen, IntoAlternateScreen};
    use tracing::debug;

    use super::{ESC, Terminal};

    /// A real tty in raw mode on the alternate screen.
    ///
    /// The previous screen and the cursor are restored on drop.
    pub struct TermionTerminal {
        out: AlternateScreen<RawTerminal<Stdout>>,
        keys: Keys<Stdin>,
    }

    impl TermionTerminal {
        /// Takes over stdout and stdin.
        ///
        /// # Errors
        ///
        /// Returns an error if stdout is not a terminal.
        pub fn new() -> io::Result<Self> {
            let out = io::stdout().into_raw_mode()?.into_alternate_screen()?;
            Ok(Self {
                out,
                keys: io::stdin().keys(),
            })
        }
    }

    impl Terminal for TermionTerminal {
        fn clear_screen(&mut self) -> io::Result<()> {
            write!(self.out, "{}{}", termion::clear::All, termion::cursor::Goto(1, 1))
        }

        fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
            write!(self.out, "{}", termion::cursor::Goto(col + 1, row + 1))?;
            self.write_inline(text)
        }

        fn write_inline(&mut self, text: &str) -> io::Result<()> {
            // Raw mode does not return the carriage on a bare newline.
            for (i, line) in text.split('\n').enumerate() {
                if i > 0 {
                    write!(self.out, "{}\r\n", termion::clear::UntilNewline)?;
                }
                self.out.write_all(line.as_bytes())?;
            }
            Ok(())
        }

        fn refresh(&mut self) -> io::Result<()> {
            self.out.flush()
        }

        fn read_key(&mut self) -> io::Result<char> {
            let key = self
                .keys
                .next()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))??;
            key_char(key)
        }

        fn hide_cursor(&mut self) -> io::Result<()> {
            write!(self.out, "{}", termion::cursor::Hide)
        }
    }

    /// Maps a key press to the character prompts see.
    ///
    /// Raw mode swallows SIGINT, so Ctrl-C is the only key that ends the game.
    /// Esc arrives as `'\x1b'` and other non-character keys as
    /// [`char::REPLACEMENT_CHARACTER`]; both are rejected by the prompts.
    fn key_char(key: Key) -> io::Result<char> {
        match key {
            Key::Char(ch) => Ok(ch),
            Key::Ctrl('c') => Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "game interrupted",
            )),
            Key::Esc => Ok(ESC),
            other => {
                debug!(key = ?other, "non-character key");
                Ok(char::REPLACEMENT_CHARACTER)
            }
        }
    }

    impl Drop for TermionTerminal {
        fn drop(&mut self) {
            let _ = write!(self.out, "{}", termion::cursor::Show);
            let _ = self.out.flush();
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn only_ctrl_c_interrupts() {
            let err = key_char(Key::Ctrl('c')).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::Interrupted);

            assert_eq!(key_char(Key::Esc).unwrap(), ESC);
            assert_eq!(key_char(Key::Char('h')).unwrap(), 'h');
            assert_eq!(key_char(Key::Ctrl('d')).unwrap(), char::REPLACEMENT_CHARACTER);
            assert_eq!(key_char(Key::Up).unwrap(), char::REPLACEMENT_CHARACTER);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_follows_the_cursor() {
        let mut term = MemoryTerminal::new(4, 20);
        term.write_at(1, 2, "ab").unwrap();
        term.write_inline("c\nde").unwrap();

        assert_eq!(term.row_text(1), "  abc");
        assert_eq!(term.row_text(2), "de");
    }

    #[test]
    fn clear_resets_grid_and_cursor() {
        let mut term = MemoryTerminal::new(3, 10);
        term.write_at(2, 5, "xyz").unwrap();
        term.clear_screen().unwrap();
        term.write_inline("top").unwrap();

        assert_eq!(term.screen(), "top\n\n");
        assert_eq!(term.clears(), 1);
    }

    #[test]
    fn scripted_keys_run_out_with_eof() {
        let mut term = MemoryTerminal::new(1, 1).with_keys("hs");
        assert_eq!(term.read_key().unwrap(), 'h');
        assert_eq!(term.read_key().unwrap(), 's');
        assert_eq!(
            term.read_key().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
        assert_eq!(term.keys_read(), 2);
    }
}
