//! Batch simulation statistics.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PlayError;
use crate::game::Game;
use crate::result::RoundResult;

/// Accumulated results for a single player name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTally {
    /// The player's name.
    pub name: String,
    /// Rounds won outright.
    pub wins: usize,
    /// Sum of final scores.
    pub total_score: usize,
}

/// Statistics over many rounds.
///
/// A round counts as a draw when the lowest score is shared; otherwise the
/// sole lowest scorer gets a win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds recorded.
    pub games: usize,
    /// Rounds whose lowest score was shared.
    pub draws: usize,
    /// Per-player totals in first-seen order.
    pub players: Vec<PlayerTally>,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games: 0,
            draws: 0,
            players: Vec::new(),
        }
    }

    /// Plays `games` rounds, building each game with `setup`, and records
    /// every result.
    ///
    /// `setup` receives the round index, which is handy as a seed.
    ///
    /// # Errors
    ///
    /// Returns the first error a round produces.
    pub fn simulate<F>(games: usize, mut setup: F) -> Result<Self, PlayError>
    where
        F: FnMut(u64) -> Game,
    {
        let mut tally = Self::new();
        for index in 0..games {
            let mut game = setup(index as u64);
            let result = game.play()?;
            tally.record(&result);
        }
        log::info!("simulation complete: {} games, {} draws", tally.games, tally.draws);
        Ok(tally)
    }

    fn entry(&mut self, name: &str) -> &mut PlayerTally {
        let index = match self.players.iter().position(|player| player.name == name) {
            Some(index) => index,
            None => {
                self.players.push(PlayerTally {
                    name: name.into(),
                    wins: 0,
                    total_score: 0,
                });
                self.players.len() - 1
            }
        };
        &mut self.players[index]
    }

    /// Records one round.
    pub fn record(&mut self, result: &RoundResult) {
        self.games += 1;
        for standing in &result.standings {
            self.entry(&standing.name).total_score += usize::from(standing.score);
        }

        if result.is_tie() {
            self.draws += 1;
        } else if let Some(winner) = result.winner() {
            self.entry(&winner.name).wins += 1;
        }
    }

    /// Returns the named player's tally.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerTally> {
        self.players.iter().find(|player| player.name == name)
    }

    /// Returns the named player's win rate as a percentage.
    #[must_use]
    pub fn win_rate(&self, name: &str) -> Option<f64> {
        let player = self.player(name)?;
        Some(self.percentage(player.wins))
    }

    /// Returns the draw rate as a percentage.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        self.percentage(self.draws)
    }

    /// Returns the named player's mean final score.
    #[must_use]
    pub fn average_score(&self, name: &str) -> Option<f64> {
        let player = self.player(name)?;
        if self.games == 0 {
            return Some(0.0);
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for score totals"
        )]
        let average = player.total_score as f64 / self.games as f64;
        Some(average)
    }

    fn percentage(&self, count: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for game counts"
        )]
        let ratio = count as f64 / self.games as f64;
        ratio * 100.0
    }
}
