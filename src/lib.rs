//! Crate root module declarations for the Sci-Damath engine.
//!
//! Sci-Damath is played on the light squares of a checkers board whose
//! squares carry arithmetic operators; every capture scores the result of
//! the capturing chip's value combined with the captured chip's value. This
//! file exposes the rules engine (game state, move generation, scoring,
//! turn control), the computer players (search and engines) and utility
//! helpers so binaries, benches and external tooling can import stable
//! module paths.

pub mod damath_errors;

pub mod game_state {
    pub mod board;
    pub mod damath_rules;
    pub mod damath_types;
    pub mod game_state;
    pub mod turn_log;
}

pub mod moves {
    pub mod damath_move;
    pub mod directions;
}

pub mod move_generation {
    pub mod board_apply;
    pub mod capture_moves;
    pub mod chain_resolver;
    pub mod move_generator;
    pub mod move_selector;
    pub mod perft;
    pub mod quiet_moves;
}

pub mod scoring {
    pub mod capture_score;
    pub mod final_tally;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod root_ordering;
    pub mod search_control;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod turn_control {
    pub mod game_over;
    pub mod repetition;
    pub mod turn_controller;
}

pub mod utils {
    pub mod board_notation;
    pub mod match_harness;
    pub mod render_board;
}
