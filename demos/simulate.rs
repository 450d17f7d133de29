//! Plays many greedy-vs-greedy rounds and reports win rates and average scores.

#![allow(clippy::missing_docs_in_private_items)]

use golfrs::{Game, GameOptions, GreedyStrategy, Player, Tally};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

const GAMES: usize = 100_000;

fn main() {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(
        LevelFilter::Info,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let tally = Tally::simulate(GAMES, |seed| {
        let players = vec![
            Player::new("Alice", GreedyStrategy::new()),
            Player::new("Bob", GreedyStrategy::new()),
        ];
        let mut options = GameOptions::default();
        options.players = players.len();
        match Game::new(options, players, seed) {
            Ok(game) => game,
            Err(err) => panic!("two players is always a valid table: {err}"),
        }
    });

    let tally = match tally {
        Ok(tally) => tally,
        Err(err) => {
            log::error!("simulation failed: {err}");
            return;
        }
    };

    for name in ["Alice", "Bob"] {
        log::info!(
            "Winrate for {name}: {:.2}%",
            tally.win_rate(name).unwrap_or_default()
        );
    }
    log::info!("Draw rate: {:.2}%", tally.draw_rate());
    for name in ["Alice", "Bob"] {
        log::info!(
            "Average score for {name}: {:.3}",
            tally.average_score(name).unwrap_or_default()
        );
    }
}
