//! Move-path enumeration for generator validation and benchmarking.
//!
//! Each jump of a chain is its own ply; while a chain is pending the same side
//! keeps moving with the forced piece.

use std::sync::Arc;
use std::thread;

use crate::damath_errors::{DamathError, DamathResult};
use crate::game_state::board::Board;
use crate::game_state::damath_types::{Side, Square};
use crate::move_generation::board_apply::apply_move_to_board;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::damath_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    /// Leaf moves after which the same piece must keep jumping.
    pub chain_continuations: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.chain_continuations += rhs.chain_continuations;
    }
}

#[derive(Debug, Clone, Copy)]
struct PerftNode {
    board: Board,
    side: Side,
    forced: Option<Square>,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Side,
    depth: u8,
) -> DamathResult<PerftCounts> {
    let root = PerftNode {
        board: *board,
        side,
        forced: None,
    };
    let mut total = PerftCounts::default();
    perft_recurse(generator, root, depth, &mut total)?;
    Ok(total)
}

/// Splits the root moves over worker threads.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    side: Side,
    depth: u8,
) -> DamathResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root = PerftNode {
        board: *board,
        side,
        forced: None,
    };
    let root_moves = generator.generate(&root.board, side, None);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = play_and_recurse(generator_ref.as_ref(), root, mv, depth, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle.join().map_err(|_| DamathError::EngineFailure {
            message: "perft worker thread panicked".to_owned(),
        })?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    node: PerftNode,
    depth: u8,
    counts: &mut PerftCounts,
) -> DamathResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }
    for mv in generator.generate(&node.board, node.side, node.forced) {
        play_and_recurse(generator, node, mv, depth, counts)?;
    }
    Ok(())
}

fn play_and_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    node: PerftNode,
    mv: Move,
    depth: u8,
    counts: &mut PerftCounts,
) -> DamathResult<()> {
    let after = apply_move_to_board(&node.board, &mv)?;
    let continues = after.chain_continues(&mv);

    if depth == 1 {
        counts.nodes += 1;
        counts.captures += usize::from(mv.is_capture());
        counts.promotions += usize::from(after.promoted);
        counts.chain_continuations += usize::from(continues);
        return Ok(());
    }

    let child = if continues {
        PerftNode {
            board: after.board,
            side: node.side,
            forced: Some(mv.to),
        }
    } else {
        PerftNode {
            board: after.board,
            side: node.side.opponent(),
            forced: None,
        }
    };
    perft_recurse(generator, child, depth - 1, counts)
}
