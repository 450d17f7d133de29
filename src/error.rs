//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count is outside the supported range.
    #[error("the game supports 2 to 4 players, got {0}")]
    PlayerCount(usize),
    /// Number of provided players does not match the configured count.
    #[error("expected {expected} players, got {actual}")]
    PlayerMismatch {
        /// Configured player count.
        expected: usize,
        /// Number of players provided.
        actual: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt for this round.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck to deal every hand and seed the discard pile.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for taking a turn.
    #[error("invalid game state for this turn")]
    InvalidState,
    /// No cards left in the deck or discard pile to draw.
    #[error("no cards left to draw")]
    NoCards,
    /// The discard pile is empty.
    #[error("discard pile is empty")]
    EmptyDiscard,
    /// A strategy picked a slot that is out of range or already face-up.
    #[error("slot {0} is not a face-down card")]
    InvalidSlot(usize),
    /// The prompt used by an interactive strategy failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Errors raised by an input prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The input stream was closed before a valid answer arrived.
    #[error("input closed")]
    Closed,
}

/// Errors that can occur while playing a full round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A turn failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// The configured turn limit was reached before anyone finished.
    #[error("turn limit of {0} reached")]
    TurnLimitReached(usize),
}

/// Errors that can occur when parsing card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text has no `-` between rank and suit.
    #[error("expected <RANK>-<SUIT>")]
    MissingSeparator,
    /// The rank is not one of `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit is not one of `H`, `D`, `C`, `S`.
    #[error("invalid suit")]
    InvalidSuit,
}
