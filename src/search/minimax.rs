//! Minimax search with alpha-beta pruning.
//!
//! The evaluation is the shared `blue - red` value; the side playing the
//! maximizing role is fixed by `ScoreGoal::maximizes`. Moves expanded at every
//! node are exactly the rule-compliant moves, and each jump of a capture chain
//! is its own ply with the same side still to move.

use tracing::{debug, trace};

use crate::damath_errors::{DamathError, DamathResult};
use crate::game_state::board::Board;
use crate::game_state::damath_rules::RulesConfig;
use crate::game_state::damath_types::{Score, Side, SideScores, Square};
use crate::move_generation::board_apply::apply_with_piece;
use crate::move_generation::chain_resolver::capture_chain_length;
use crate::move_generation::move_selector::legal_moves_from;
use crate::moves::damath_move::Move;
use crate::scoring::capture_score::score_capture;
use crate::search::board_scoring::{BoardScorer, ProjectedTotalScorer};
use crate::search::root_ordering::{pick_best, RootCandidate};
use crate::search::search_control::SearchControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Plies to search; 1 plays the first legal move without look-ahead.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// `blue - red` value backing the choice.
    pub value: Score,
    pub depth: u8,
    pub nodes: u64,
}

/// Search-local snapshot; never written back to the real game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    pub side: Side,
    pub scores: SideScores,
    pub forced: Option<Square>,
}

impl SearchNode {
    pub fn new(board: Board, side: Side, scores: SideScores) -> Self {
        Self {
            board,
            side,
            scores,
            forced: None,
        }
    }

    /// Plays `mv`, crediting the capture score to the mover. Returns the
    /// child node and the score of this jump.
    fn play(&self, mv: &Move) -> Option<(SearchNode, Score)> {
        let piece = self.board.get(mv.from)?;
        let earned = score_capture(&self.board, mv).map_or(Score::ZERO, |b| b.result);
        let after = apply_with_piece(&self.board, mv, piece);
        let child = if after.chain_continues(mv) {
            SearchNode {
                board: after.board,
                side: self.side,
                scores: self.scores.with_added(self.side, earned),
                forced: Some(mv.to),
            }
        } else {
            SearchNode {
                board: after.board,
                side: self.side.opponent(),
                scores: self.scores.with_added(self.side, earned),
                forced: None,
            }
        };
        Some((child, earned))
    }
}

/// Searches from a bare position with the default scorer and a private
/// control handle.
pub fn choose_move(
    board: &Board,
    side: Side,
    scores: &SideScores,
    depth: u8,
    rules: &RulesConfig,
) -> DamathResult<SearchResult> {
    search(
        &SearchNode::new(*board, side, *scores),
        SearchConfig { depth },
        rules,
        &ProjectedTotalScorer,
        &SearchControl::new(),
    )
}

pub fn search<S: BoardScorer>(
    root: &SearchNode,
    config: SearchConfig,
    rules: &RulesConfig,
    scorer: &S,
    control: &SearchControl,
) -> DamathResult<SearchResult> {
    let mut searcher = Searcher {
        rules,
        scorer,
        control,
        nodes: 0,
    };
    searcher.search_root(root, config.depth)
}

struct Searcher<'a, S: BoardScorer> {
    rules: &'a RulesConfig,
    scorer: &'a S,
    control: &'a SearchControl,
    nodes: u64,
}

impl<S: BoardScorer> Searcher<'_, S> {
    fn search_root(&mut self, root: &SearchNode, depth: u8) -> DamathResult<SearchResult> {
        self.enter_node()?;
        let moves = legal_moves_from(&root.board, root.side, root.forced, self.rules);
        let static_value = self.evaluate(root);

        let Some(first) = moves.first().copied() else {
            return Ok(SearchResult {
                best_move: None,
                value: static_value,
                depth,
                nodes: self.nodes,
            });
        };

        if depth <= 1 {
            let value = match root.play(&first) {
                Some((child, _)) => self.evaluate(&child),
                None => static_value,
            };
            return Ok(SearchResult {
                best_move: Some(first),
                value,
                depth,
                nodes: self.nodes,
            });
        }

        let maximizing = self.rules.score_goal.maximizes(root.side);
        let mut candidates = Vec::with_capacity(moves.len());
        for mv in moves {
            let Some((child, earned)) = root.play(&mv) else {
                continue;
            };
            let value = self.alpha_beta(&child, depth - 1, Score::MIN, Score::MAX)?;
            trace!(%mv, %value, "root move searched");
            candidates.push(RootCandidate {
                mv,
                value,
                chain_length: capture_chain_length(&root.board, &mv, self.rules.chain_depth_cap),
                immediate_score: earned,
                promotes: root
                    .board
                    .get(mv.from)
                    .is_some_and(|piece| piece.promotes_on(mv.to)),
                center_distance: mv.to.center_distance(),
            });
        }

        let best = pick_best(&candidates, maximizing, self.rules.score_goal).ok_or_else(|| {
            DamathError::EngineFailure {
                message: "legal moves vanished during search".to_owned(),
            }
        })?;
        debug!(side = %root.side, mv = %best.mv, value = %best.value, nodes = self.nodes, depth, "search finished");
        Ok(SearchResult {
            best_move: Some(best.mv),
            value: best.value,
            depth,
            nodes: self.nodes,
        })
    }

    fn alpha_beta(
        &mut self,
        node: &SearchNode,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
    ) -> DamathResult<Score> {
        self.enter_node()?;
        if depth == 0 {
            return Ok(self.evaluate(node));
        }
        let moves = legal_moves_from(&node.board, node.side, node.forced, self.rules);
        if moves.is_empty() {
            return Ok(self.evaluate(node));
        }

        if self.rules.score_goal.maximizes(node.side) {
            let mut best = Score::MIN;
            for mv in &moves {
                let Some((child, _)) = node.play(mv) else {
                    continue;
                };
                let value = self.alpha_beta(&child, depth - 1, alpha, beta)?;
                best = best.max(value);
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = Score::MAX;
            for mv in &moves {
                let Some((child, _)) = node.play(mv) else {
                    continue;
                };
                let value = self.alpha_beta(&child, depth - 1, alpha, beta)?;
                best = best.min(value);
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        }
    }

    #[inline]
    fn enter_node(&mut self) -> DamathResult<()> {
        if self.control.should_stop() {
            return Err(DamathError::SearchCancelled);
        }
        self.nodes += 1;
        self.control.add_nodes(1);
        Ok(())
    }

    #[inline]
    fn evaluate(&self, node: &SearchNode) -> Score {
        self.scorer.score(&node.board, &node.scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::damath_rules::ScoreGoal;
    use crate::move_generation::move_selector::legal_moves;
    use crate::utils::board_notation::parse_board;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("playable test square")
    }

    const CHAIN: &str = ". . . . . . b7 . / \
                         . . . . . . . . / \
                         . . . . . . . . / \
                         . . . b1 . . . . / \
                         . . . . . . . . / \
                         . . . b2 . . . . / \
                         . . r5 . . . . . / \
                         . . . . . . . .";

    #[test]
    fn always_returns_a_legal_move() {
        let boards = [Board::standard(), parse_board(CHAIN).expect("valid board")];
        let rules = RulesConfig::default();
        for board in boards {
            for depth in 1..=4 {
                for side in Side::ALL {
                    let result = choose_move(&board, side, &SideScores::default(), depth, &rules)
                        .expect("search completes");
                    let best = result.best_move.expect("position has moves");
                    assert!(legal_moves(&board, side, &rules).contains(&best));
                }
            }
        }
    }

    #[test]
    fn mid_chain_root_continues_with_the_forced_piece() {
        let board = parse_board(CHAIN).expect("valid board");
        let first = Move::capture(sq(6, 2), sq(5, 3), sq(4, 4));
        let (child, _) = SearchNode::new(board, Side::Red, SideScores::default())
            .play(&first)
            .expect("capturer present");
        assert_eq!(child.forced, Some(sq(4, 4)));
        for depth in 1..=4 {
            let result = search(
                &child,
                SearchConfig { depth },
                &RulesConfig::default(),
                &ProjectedTotalScorer,
                &SearchControl::new(),
            )
            .expect("search completes");
            assert_eq!(result.best_move, Some(Move::capture(sq(4, 4), sq(3, 3), sq(2, 2))));
        }
    }

    // Both captures trade a 6 for a 3; (5,3) is a multiply square and (4,2) a divide square.
    const MUL_OR_DIV: &str = ". . . . . . . . / \
                              . . . . . . . . / \
                              r6 . . . . . r1 . / \
                              . b3 . . . r6 . . / \
                              . . . . b3 . . . / \
                              . . . . . . . . / \
                              . . . . . . . . / \
                              . . . . . . . .";

    #[test]
    fn capture_score_separates_equal_material() {
        let board = parse_board(MUL_OR_DIV).expect("valid board");
        let multiply = Move::capture(sq(3, 5), sq(4, 4), sq(5, 3));
        let divide = Move::capture(sq(2, 0), sq(3, 1), sq(4, 2));
        let rules = RulesConfig::default();
        let mut moves = legal_moves(&board, Side::Red, &rules);
        moves.sort_by_key(|mv| (mv.from.row(), mv.from.col()));
        assert_eq!(moves, vec![divide, multiply]);

        let highest = RulesConfig {
            score_goal: ScoreGoal::Highest,
            ..RulesConfig::default()
        };
        let result = choose_move(&board, Side::Red, &SideScores::default(), 2, &highest)
            .expect("search completes");
        assert_eq!(result.best_move, Some(multiply));
        // Blue keeps 3; red holds 6 + 6 + 1 and earned 6 × 3.
        assert_eq!(result.value, Score::from_whole(3 - 31));

        let result = choose_move(&board, Side::Red, &SideScores::default(), 2, &rules)
            .expect("search completes");
        assert_eq!(result.best_move, Some(divide));
        // Red earned 6 ÷ 3 instead.
        assert_eq!(result.value, Score::from_whole(3 - 15));
    }

    #[test]
    fn depth_one_takes_the_first_legal_move() {
        let board = Board::standard();
        let rules = RulesConfig::default();
        let result = choose_move(&board, Side::Red, &SideScores::default(), 1, &rules)
            .expect("search completes");
        assert_eq!(result.best_move, legal_moves(&board, Side::Red, &rules).first().copied());
    }

    #[test]
    fn no_moves_returns_static_value() {
        let board = parse_board(
            ". . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . b3 . . . . / \
             b2 . b4 . . . . . / \
             . r9 . . . . . .",
        )
        .expect("valid board");
        let result = choose_move(&board, Side::Red, &SideScores::default(), 3, &RulesConfig::default())
            .expect("search completes");
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, Score::from_whole(0));
    }

    const HANDOVER: &str = ". . . . . . . . / \
                            . . . . . . . . / \
                            . . . . . . . . / \
                            . . . . . b9 . . / \
                            . . . . . . . . / \
                            . . . r5 . . . . / \
                            . . . . . . . . / \
                            . . . . . . . .";

    #[test]
    fn avoids_handing_over_a_capture() {
        // Red (5,3) stepping to (4,4) lets blue (3,5) capture it; (4,2) is safe.
        let board = parse_board(HANDOVER).expect("valid board");
        let rules = RulesConfig {
            score_goal: ScoreGoal::Highest,
            ..RulesConfig::default()
        };
        let result = choose_move(&board, Side::Red, &SideScores::default(), 2, &rules)
            .expect("search completes");
        assert_eq!(result.best_move, Some(Move::quiet(sq(5, 3), sq(4, 2))));
        assert_eq!(result.value, Score::from_whole(4));
    }

    #[test]
    fn lowest_goal_feeds_the_opponent_captures() {
        // Under the default goal red wants blue's total as high as possible.
        let board = parse_board(HANDOVER).expect("valid board");
        let rules = RulesConfig::default();
        assert!(rules.score_goal.maximizes(Side::Red));
        let result = choose_move(&board, Side::Red, &SideScores::default(), 2, &rules)
            .expect("search completes");
        assert_eq!(result.best_move, Some(Move::quiet(sq(5, 3), sq(4, 4))));
        // Blue earns 9 × 5 on (5,3) and keeps its 9.
        assert_eq!(result.value, Score::from_whole(54));
    }

    #[test]
    fn cancelled_search_yields_no_move() {
        let control = SearchControl::new();
        control.request_stop();
        let root = SearchNode::new(Board::standard(), Side::Red, SideScores::default());
        let result = search(
            &root,
            SearchConfig::default(),
            &RulesConfig::default(),
            &ProjectedTotalScorer,
            &control,
        );
        assert_eq!(result, Err(DamathError::SearchCancelled));
    }
}
