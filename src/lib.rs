//! A Golf card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals four face-down cards to
//! each of 2 to 4 players and runs turns until someone has revealed their
//! whole hand. Hands are scored with the pair-cancellation rule and the
//! lowest score wins. Each [`Player`] is driven by a [`Strategy`]: an
//! interactive prompt, uniform random choices, or a greedy heuristic.
//!
//! # Example
//!
//! ```
//! use golfrs::{Game, GameOptions, GreedyStrategy, Player};
//!
//! let players = vec![
//!     Player::new("Alice", GreedyStrategy::new()),
//!     Player::new("Bob", GreedyStrategy::new()),
//! ];
//! let mut game = Game::new(GameOptions::default(), players, 42).unwrap();
//! let result = game.play().unwrap();
//! println!("{} wins", result.standings[0].name);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod sim;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, create_deck, full_deck};
pub use error::{DealError, ParseCardError, PlayError, PromptError, SetupError, TurnError};
pub use game::{Game, GameState, Table, TurnPosition};
pub use hand::{HAND_SIZE, Hand, hand_score};
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
#[cfg(feature = "std")]
pub use player::ConsolePrompt;
pub use player::{
    Action, Decision, GREEDY_THRESHOLD, GreedyStrategy, InteractiveStrategy, OpponentView,
    Player, Prompt, RandomStrategy, Strategy, TurnEvent, TurnView,
};
pub use result::{RoundResult, Standing};
pub use sim::{PlayerTally, Tally};
