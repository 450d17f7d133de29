//! CLI golf example: you against the greedy bot.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use golfrs::{
    ConsolePrompt, Game, GameOptions, GreedyStrategy, InteractiveStrategy, Player, RoundResult,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(
        LevelFilter::Warn,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    println!("Golf CLI example. Lowest score wins; matching pairs cancel.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let players = vec![
        Player::new("You", InteractiveStrategy::new(ConsolePrompt::stdio())),
        Player::new("Bob", GreedyStrategy::new()),
    ];

    let mut game = match Game::new(GameOptions::default(), players, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    match game.play() {
        Ok(result) => print_result(&result),
        Err(err) => println!("Game ended early: {err}"),
    }
}

fn print_result(result: &RoundResult) {
    println!("\n--- Final Results ---");
    for standing in &result.standings {
        let cards: Vec<String> = standing
            .hand
            .cards()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{}'s final hand: {}", standing.name, cards.join(", "));
    }
    for (place, (name, score)) in result.scores().into_iter().enumerate() {
        println!("#{}: {name} with a score of {score}", place + 1);
    }

    if result.is_tie() {
        println!("It's a tie!");
    } else if let Some(winner) = result.winner() {
        println!("The winner is {} with the lowest score!", winner.name);
    }
}
