//! Table pacing options.

use core::time::Duration;

/// Timing and presentation options for the terminal table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjterm::TableOptions;
/// use core::time::Duration;
///
/// let options = TableOptions::default()
///     .with_char_delay(Duration::from_millis(10))
///     .with_welcome(false);
/// assert!(!options.welcome);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Pause between characters of typewriter text.
    pub char_delay: Duration,
    /// Pause between characters of the welcome text.
    pub welcome_char_delay: Duration,
    /// Pause after announcing the dealer's hand and after revealing it.
    pub dealer_reveal_pause: Duration,
    /// Pause after each card the dealer draws.
    pub dealer_draw_pause: Duration,
    /// Pause before the screen is cleared for the showdown message.
    pub result_pause: Duration,
    /// Whether the welcome screen is shown before the first round.
    pub welcome: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(30),
            welcome_char_delay: Duration::from_millis(25),
            dealer_reveal_pause: Duration::from_secs(1),
            dealer_draw_pause: Duration::from_secs(1),
            result_pause: Duration::from_millis(500),
            welcome: true,
        }
    }
}

impl TableOptions {
    /// Options with every pause removed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::TableOptions;
    /// use core::time::Duration;
    ///
    /// let options = TableOptions::instant();
    /// assert_eq!(options.char_delay, Duration::ZERO);
    /// assert!(options.welcome);
    /// ```
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            char_delay: Duration::ZERO,
            welcome_char_delay: Duration::ZERO,
            dealer_reveal_pause: Duration::ZERO,
            dealer_draw_pause: Duration::ZERO,
            result_pause: Duration::ZERO,
            welcome: true,
        }
    }

    /// Sets the typewriter delay per character.
    #[must_use]
    pub const fn with_char_delay(mut self, delay: Duration) -> Self {
        self.char_delay = delay;
        self
    }

    /// Sets the typewriter delay per character of the welcome text.
    #[must_use]
    pub const fn with_welcome_char_delay(mut self, delay: Duration) -> Self {
        self.welcome_char_delay = delay;
        self
    }

    /// Sets the pauses around revealing the dealer's hand.
    #[must_use]
    pub const fn with_dealer_reveal_pause(mut self, pause: Duration) -> Self {
        self.dealer_reveal_pause = pause;
        self
    }

    /// Sets the pause after each dealer draw.
    #[must_use]
    pub const fn with_dealer_draw_pause(mut self, pause: Duration) -> Self {
        self.dealer_draw_pause = pause;
        self
    }

    /// Sets the pause before the showdown message.
    #[must_use]
    pub const fn with_result_pause(mut self, pause: Duration) -> Self {
        self.result_pause = pause;
        self
    }

    /// Sets whether the welcome screen is shown.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::TableOptions;
    ///
    /// let options = TableOptions::default().with_welcome(false);
    /// assert!(!options.welcome);
    /// ```
    #[must_use]
    pub const fn with_welcome(mut self, welcome: bool) -> Self {
        self.welcome = welcome;
        self
    }
}
