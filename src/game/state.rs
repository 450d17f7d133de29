//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are seated and waiting for cards.
    WaitingToDeal,
    /// Players are taking turns.
    PlayerTurn,
    /// Someone revealed their whole hand and the round is scored.
    RoundOver,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Pass around the table, starting at 1.
    pub round: usize,
    /// Index of the player whose turn it is.
    pub player_index: usize,
}
