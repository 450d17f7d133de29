//! Game engine and round flow.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealError, PlayError, SetupError, TurnError};
use crate::hand::{HAND_SIZE, Hand};
use crate::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
use crate::player::{Player, opponents_of};
use crate::result::{RoundResult, Standing};

pub mod state;
mod table;

pub use state::{GameState, TurnPosition};
pub use table::Table;

/// A golf game engine that manages players, the piles, and round flow.
///
/// The game owns the deck and discard pile (through its [`Table`]) and the
/// seated players. Players receive the table for the duration of their own
/// turn only.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Seated players, in turn order.
    players: Vec<Player>,
    /// Deck and discard pile.
    table: Table,
    /// Current game state.
    state: GameState,
    /// Current turn position.
    turn: TurnPosition,
    /// Turns taken this round.
    turns: usize,
    /// Index of the player whose reveal ended the round.
    finished_by: Option<usize>,
}

impl Game {
    /// Creates a game with the given players and seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured player count is outside 2..=4 or
    /// does not match the number of players given.
    ///
    /// # Example
    ///
    /// ```
    /// use golfrs::{Game, GameOptions, GreedyStrategy, Player, RandomStrategy};
    ///
    /// let players = vec![
    ///     Player::new("Alice", GreedyStrategy::new()),
    ///     Player::new("Bob", RandomStrategy::new(7)),
    /// ];
    /// let mut game = Game::new(GameOptions::default(), players, 42).unwrap();
    /// let result = game.play().unwrap();
    /// assert_eq!(result.standings.len(), 2);
    /// ```
    pub fn new(options: GameOptions, players: Vec<Player>, seed: u64) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&options.players) {
            return Err(SetupError::PlayerCount(options.players));
        }
        if players.len() != options.players {
            return Err(SetupError::PlayerMismatch {
                expected: options.players,
                actual: players.len(),
            });
        }

        Ok(Self {
            options,
            players,
            table: Table::new(seed),
            state: GameState::WaitingToDeal,
            turn: TurnPosition {
                round: 0,
                player_index: 0,
            },
            turns: 0,
            finished_by: None,
        })
    }

    /// Creates a game where every seat is an interactive player on the
    /// console, named `Player 1` through `Player n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured player count is outside 2..=4.
    #[cfg(feature = "std")]
    pub fn with_console_players(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        use crate::player::{ConsolePrompt, InteractiveStrategy};

        let players = (1..=options.players.min(MAX_PLAYERS))
            .map(|seat| {
                Player::new(
                    alloc::format!("Player {seat}"),
                    InteractiveStrategy::new(ConsolePrompt::stdio()),
                )
            })
            .collect();
        Self::new(options, players, seed)
    }

    /// Deals four face-down cards to every player and seeds the discard pile
    /// with one card from the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck cannot cover
    /// every hand plus the first discard.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingToDeal {
            return Err(DealError::InvalidState);
        }
        if self.table.cards_remaining() < self.players.len() * HAND_SIZE + 1 {
            log::error!("not enough cards to play");
            return Err(DealError::NotEnoughCards);
        }

        for player in &mut self.players {
            let cards: Vec<Card> = (0..HAND_SIZE)
                .filter_map(|_| self.table.pop_deck())
                .collect();
            let cards: [Card; HAND_SIZE] =
                cards.try_into().map_err(|_| DealError::NotEnoughCards)?;
            player.set_hand(Hand::new(cards));
        }
        let first = self.table.pop_deck().ok_or(DealError::NotEnoughCards)?;
        self.table.discard(first);

        self.state = GameState::PlayerTurn;
        self.turn = TurnPosition {
            round: 1,
            player_index: 0,
        };
        log::info!(
            "dealt {} hands, {} cards left in the deck",
            self.players.len(),
            self.table.cards_remaining()
        );
        log::debug!("round 1");
        Ok(())
    }

    /// Plays the current player's turn and advances to the next player.
    ///
    /// Returns `true` if the turn revealed the player's whole hand, which
    /// ends the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the turn fails.
    pub fn play_turn(&mut self) -> Result<bool, TurnError> {
        if self.state != GameState::PlayerTurn {
            return Err(TurnError::InvalidState);
        }

        let seat = self.turn.player_index;
        let opponents = opponents_of(&self.players, seat);
        let player = self
            .players
            .get_mut(seat)
            .ok_or(TurnError::InvalidState)?;
        let finished = player.make_move(&mut self.table, &opponents)?;
        self.turns += 1;

        if finished {
            log::debug!("{} revealed every card", player.name());
            self.finished_by = Some(seat);
            self.state = GameState::RoundOver;
        } else {
            self.advance_turn();
        }
        Ok(finished)
    }

    fn advance_turn(&mut self) {
        self.turn.player_index += 1;
        if self.turn.player_index >= self.players.len() {
            self.turn.player_index = 0;
            self.turn.round += 1;
            log::debug!("round {}", self.turn.round);
        }
    }

    /// Deals if needed, then plays turns until someone reveals their whole
    /// hand, and returns the final standings.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing or a turn fails, or the turn limit is
    /// reached.
    pub fn play(&mut self) -> Result<RoundResult, PlayError> {
        if self.state == GameState::WaitingToDeal {
            self.deal()?;
        }

        while self.state == GameState::PlayerTurn {
            let turns = self.turns;
            if let Some(limit) = self.options.turn_limit.filter(|&limit| turns >= limit) {
                return Err(PlayError::TurnLimitReached(limit));
            }
            self.play_turn()?;
        }

        let result = self.result().ok_or(TurnError::InvalidState)?;
        for (place, standing) in result.standings.iter().enumerate() {
            log::info!("#{}: {} with a score of {}", place + 1, standing.name, standing.score);
        }
        Ok(result)
    }

    /// Scores every dealt hand and ranks players by ascending score.
    ///
    /// Ties keep seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .filter_map(|player| {
                player.hand().map(|hand| Standing {
                    name: player.name().into(),
                    score: hand.score(),
                    hand: hand.clone(),
                })
            })
            .collect();
        standings.sort_by_key(|standing| standing.score);
        standings
    }

    /// Returns the round result once the round is over.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        if self.state != GameState::RoundOver {
            return None;
        }
        let finisher = self.players.get(self.finished_by?)?;

        Some(RoundResult {
            standings: self.standings(),
            finished_by: finisher.name().into(),
            turns: self.turns,
            reshuffles: self.table.reshuffles(),
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current turn position.
    #[must_use]
    pub const fn current_turn(&self) -> TurnPosition {
        self.turn
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.state != GameState::PlayerTurn {
            return None;
        }
        self.players.get(self.turn.player_index)
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the deck and discard pile.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the deck and discard pile for rigging.
    pub const fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Returns the number of turns taken this round.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Returns the number of cards across the deck, discard pile and hands.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let in_hands: usize = self
            .players
            .iter()
            .filter(|player| player.hand().is_some())
            .count()
            * HAND_SIZE;
        self.table.deck.len() + self.table.discard.len() + in_hands
    }
}
