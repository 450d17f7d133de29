//! Game configuration options.

/// Fewest players a game accepts.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game accepts.
pub const MAX_PLAYERS: usize = 4;

/// Configuration options for a golf game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use golfrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_turn_limit(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players (2 to 4).
    pub players: usize,
    /// Maximum number of turns before [`Game::play`](crate::Game::play) gives up.
    /// `None` plays until someone reveals their whole hand.
    pub turn_limit: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            turn_limit: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use golfrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the turn limit.
    ///
    /// # Example
    ///
    /// ```
    /// use golfrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_turn_limit(100);
    /// assert_eq!(options.turn_limit, Some(100));
    /// ```
    #[must_use]
    pub const fn with_turn_limit(mut self, turns: usize) -> Self {
        self.turn_limit = Some(turns);
        self
    }

    /// Removes the turn limit.
    #[must_use]
    pub const fn without_turn_limit(mut self) -> Self {
        self.turn_limit = None;
        self
    }
}
