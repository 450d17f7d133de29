//! Round result types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::Hand;

/// Final score of a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The player's name.
    pub name: String,
    /// The player's final score (lower is better).
    pub score: u8,
    /// The player's final hand.
    pub hand: Hand,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Standings ordered by ascending score. Ties keep seating order.
    pub standings: Vec<Standing>,
    /// Name of the player whose reveal ended the round.
    pub finished_by: String,
    /// Total number of turns taken.
    pub turns: usize,
    /// Number of times the discard pile was recycled into the deck.
    pub reshuffles: usize,
}

impl RoundResult {
    /// Returns the leading standing (lowest score).
    #[must_use]
    pub fn winner(&self) -> Option<&Standing> {
        self.standings.first()
    }

    /// Returns whether the lowest score is shared by more than one player.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        match self.standings.as_slice() {
            [first, second, ..] => first.score == second.score,
            _ => false,
        }
    }

    /// Returns the `(name, score)` pairs in ranking order.
    #[must_use]
    pub fn scores(&self) -> Vec<(&str, u8)> {
        self.standings
            .iter()
            .map(|standing| (standing.name.as_str(), standing.score))
            .collect()
    }

    /// Returns the score for the named player.
    #[must_use]
    pub fn score_of(&self, name: &str) -> Option<u8> {
        self.standings
            .iter()
            .find(|standing| standing.name == name)
            .map(|standing| standing.score)
    }
}
