//! Cancellation and accounting shared between a search and its caller, plus
//! a helper that runs a search on a worker thread.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::damath_errors::{DamathError, DamathResult};
use crate::game_state::board::Board;
use crate::game_state::damath_rules::RulesConfig;
use crate::game_state::damath_types::{Side, SideScores};
use crate::search::board_scoring::ProjectedTotalScorer;
use crate::search::minimax::{search, SearchConfig, SearchNode, SearchResult};

/// Cheap to clone; clones share the same flag and counter.
#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    stop: Arc<AtomicBool>,
    nodes_visited: Arc<AtomicU64>,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn add_nodes(&self, n: u64) {
        self.nodes_visited.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn reset(&self) {
        self.nodes_visited.store(0, Ordering::Relaxed);
        self.stop.store(false, Ordering::Relaxed);
    }
}

/// A search running off the caller's thread.
pub struct SearchHandle {
    control: SearchControl,
    worker: JoinHandle<DamathResult<SearchResult>>,
}

impl SearchHandle {
    /// Asks the search to stop at its next node; `join` then reports
    /// `SearchCancelled`.
    pub fn cancel(&self) {
        self.control.request_stop();
    }

    pub fn control(&self) -> &SearchControl {
        &self.control
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the result. A cancelled search never yields a move, even if
    /// it happened to finish before noticing the request.
    pub fn join(self) -> DamathResult<SearchResult> {
        let result = self.worker.join().map_err(|_| DamathError::EngineFailure {
            message: "search worker thread panicked".to_owned(),
        })?;
        if self.control.should_stop() {
            return Err(DamathError::SearchCancelled);
        }
        result
    }
}

/// Runs the default search on a new thread over a snapshot of the position.
pub fn spawn_search(
    board: Board,
    side: Side,
    scores: SideScores,
    config: SearchConfig,
    rules: RulesConfig,
) -> SearchHandle {
    let control = SearchControl::new();
    let worker_control = control.clone();
    debug!(%side, depth = config.depth, "spawning background search");
    let worker = thread::spawn(move || {
        let root = SearchNode::new(board, side, scores);
        search(&root, config, &rules, &ProjectedTotalScorer, &worker_control)
    });
    SearchHandle { control, worker }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::move_generation::move_selector::legal_moves;

    #[test]
    fn clones_share_state() {
        let control = SearchControl::new();
        let other = control.clone();
        other.add_nodes(5);
        other.request_stop();
        assert!(control.should_stop());
        assert_eq!(control.nodes_visited(), 5);
        control.reset();
        assert!(!other.should_stop());
        assert_eq!(other.nodes_visited(), 0);
    }

    #[test]
    fn background_search_returns_a_legal_move() {
        let board = Board::standard();
        let rules = RulesConfig::default();
        let handle = spawn_search(board, Side::Red, SideScores::default(), SearchConfig { depth: 3 }, rules);
        while !handle.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }
        let counted = handle.control().nodes_visited();
        let result = handle.join().expect("search completes");
        let best = result.best_move.expect("opening has moves");
        assert!(legal_moves(&board, Side::Red, &rules).contains(&best));
        assert!(result.nodes > 0);
        assert_eq!(result.nodes, counted);
    }

    #[test]
    fn cancelled_background_search_yields_no_move() {
        let handle = spawn_search(
            Board::standard(),
            Side::Red,
            SideScores::default(),
            SearchConfig { depth: 8 },
            RulesConfig::default(),
        );
        handle.cancel();
        assert_eq!(handle.join(), Err(DamathError::SearchCancelled));
    }
}
