//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose hard easy`
//!
//! Positional arguments are the difficulties of player 1 and player 2, or
//! `greedy` / `random` for the non-searching engines. Set `RUST_LOG=debug`
//! to follow the games move by move.

use sci_damath::damath_errors::DamathResult;
use sci_damath::engines::difficulty::Difficulty;
use sci_damath::engines::engine_greedy::GreedyEngine;
use sci_damath::engines::engine_minimax::MinimaxEngine;
use sci_damath::engines::engine_random::RandomEngine;
use sci_damath::engines::engine_trait::{Engine, SearchParams};
use sci_damath::utils::match_harness::{
    play_engine_match, play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use sci_damath::utils::render_board::render_game_state;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
enum PlayerKind {
    Minimax(Difficulty),
    Greedy,
    Random,
}

impl PlayerKind {
    fn parse(text: &str) -> DamathResult<Self> {
        match text.to_ascii_lowercase().as_str() {
            "greedy" => Ok(PlayerKind::Greedy),
            "random" => Ok(PlayerKind::Random),
            other => other.parse().map(PlayerKind::Minimax),
        }
    }

    fn build(self) -> Box<dyn Engine> {
        match self {
            PlayerKind::Minimax(difficulty) => Box::new(MinimaxEngine::with_difficulty(difficulty)),
            PlayerKind::Greedy => Box::new(GreedyEngine::new()),
            PlayerKind::Random => Box::new(RandomEngine::new()),
        }
    }
}

fn main() -> DamathResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let mut players = args.iter().filter(|a| !a.starts_with('-'));
    let player1 = match players.next() {
        Some(text) => PlayerKind::parse(text)?,
        None => PlayerKind::Minimax(Difficulty::Hard),
    };
    let player2 = match players.next() {
        Some(text) => PlayerKind::parse(text)?,
        None => PlayerKind::Greedy,
    };
    println!("player1={player1:?} player2={player2:?}");

    let per_game = MatchConfig {
        max_plies: 200,
        opening_min_plies: 0,
        opening_max_plies: 4,
        params: SearchParams::default(),
        ..MatchConfig::default()
    };

    if verbose {
        let sample = play_engine_match(player1.build(), player2.build(), 1234, per_game.clone())?;
        println!(
            "[sample] started {} opening={} plies played={} plies",
            sample.started_at.to_rfc3339(),
            sample.opening_moves.len(),
            sample.played_moves.len()
        );
        println!("{}\n", render_game_state(&sample.final_state));
    }

    let stats = play_engine_match_series(
        move || player1.build(),
        move || player2.build(),
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game,
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
