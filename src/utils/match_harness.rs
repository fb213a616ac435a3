//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through the turn
//! controller, with an optional seeded random opening prefix. A game that
//! reaches the ply budget is adjudicated on score as if time expired.

use chrono::{DateTime, Utc};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::debug;

use crate::damath_errors::{DamathError, DamathResult};
use crate::engines::engine_trait::{fallback_move, Engine, SearchParams};
use crate::game_state::damath_rules::RulesConfig;
use crate::game_state::damath_types::Side;
use crate::game_state::game_state::GameState;
use crate::moves::damath_move::Move;
use crate::turn_control::game_over::{EndSignal, GameOutcome};
use crate::turn_control::turn_controller::{apply_move, signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Jumps and quiet moves counted together, opening included.
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub params: SearchParams,
    pub rules: RulesConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 0,
            opening_max_plies: 4,
            params: SearchParams::default(),
            rules: RulesConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub started_at: DateTime<Utc>,
    pub outcome: GameOutcome,
    /// True when the ply budget ran out and the game was decided on score.
    pub adjudicated: bool,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub red_move_count: u32,
    pub blue_move_count: u32,
    pub red_total_time_ns: u128,
    pub blue_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 1,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub adjudicated: u16,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
    pub outcomes: Vec<SeriesOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} p1_wins={} p2_wins={} draws={} adjudicated={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.adjudicated,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play one game, `red` moving first.
pub fn play_engine_match(
    mut red: Box<dyn Engine>,
    mut blue: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> DamathResult<MatchResult> {
    let started_at = Utc::now();
    red.new_game();
    blue.new_game();

    let initial = GameState::with_rules(config.rules);
    let (mut state, opening_moves) = apply_seeded_random_opening(
        &initial,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut played_moves = Vec::<Move>::new();
    let mut red_move_count = 0u32;
    let mut blue_move_count = 0u32;
    let mut red_total_time_ns = 0u128;
    let mut blue_total_time_ns = 0u128;
    let mut plies = opening_moves.len();

    while !state.is_over() && plies < usize::from(config.max_plies) {
        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Side::Red => red.choose_move(&state, &config.params)?,
            Side::Blue => blue.choose_move(&state, &config.params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::Red => {
                red_move_count = red_move_count.saturating_add(1);
                red_total_time_ns = red_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Blue => {
                blue_move_count = blue_move_count.saturating_add(1);
                blue_total_time_ns = blue_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best_move
            .or_else(|| fallback_move(&state))
            .ok_or_else(|| DamathError::EngineFailure {
                message: format!("no move available for {mover}"),
            })?;
        played_moves.push(chosen);
        state = apply_move(&state, chosen)?.0;
        plies += 1;
    }

    let adjudicated = !state.is_over();
    if adjudicated {
        debug!(plies, "ply budget exhausted, adjudicating on score");
        state = signal(&state, EndSignal::TimeExpired)?.0;
    }
    let outcome = state.outcome.ok_or_else(|| DamathError::EngineFailure {
        message: "match ended without an outcome".to_owned(),
    })?;

    Ok(MatchResult {
        started_at,
        outcome,
        adjudicated,
        final_state: state,
        opening_moves,
        played_moves,
        red_move_count,
        blue_move_count,
        red_total_time_ns,
        blue_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player sides are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> DamathResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_red = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (red, blue) = if player1_is_red {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} red={} blue={}",
                i + 1,
                config.games,
                seed,
                red,
                blue
            );
        }

        let result = if player1_is_red {
            play_engine_match(player1_factory(), player2_factory(), seed, config.per_game.clone())?
        } else {
            play_engine_match(player2_factory(), player1_factory(), seed, config.per_game.clone())?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_red {
            (
                result.red_move_count,
                result.blue_move_count,
                result.red_total_time_ns,
                result.blue_total_time_ns,
            )
        } else {
            (
                result.blue_move_count,
                result.red_move_count,
                result.blue_total_time_ns,
                result.red_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);
        if result.adjudicated {
            stats.adjudicated += 1;
        }

        let mapped = match result.outcome.winner {
            Some(side) => {
                let player = if (side == Side::Red) == player1_is_red {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                result.outcome,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> DamathResult<(GameState, Vec<Move>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves = Vec::<Move>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if state.is_over() {
            break;
        }
        let legal_moves = state.legal_moves();
        let Some(chosen) = legal_moves.as_slice().choose(&mut rng).copied() else {
            break;
        };
        opening_moves.push(chosen);
        state = apply_move(&state, chosen)?.0;
    }

    Ok((state, opening_moves))
}
