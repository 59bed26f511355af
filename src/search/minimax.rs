//! Minimax with alpha-beta pruning.
//!
//! Scores are always taken from `ai`'s perspective; only the max/min choice
//! at each ply encodes whose turn the node models. Candidate moves are tried
//! captures-first (stable by capture count) to tighten the window early.

use std::cmp::Reverse;
use std::time::Instant;

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::search::board_scoring::BoardScorer;

/// How often (in visited nodes) the deadline is polled.
const DEADLINE_POLL_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    /// `None` only at terminal nodes.
    pub best_move: Option<Move>,
    pub nodes: u64,
}

/// Per-search bookkeeping: node counter and optional wall-clock deadline.
#[derive(Debug, Clone, Default)]
pub(crate) struct SearchControl {
    pub nodes: u64,
    pub deadline: Option<Instant>,
    pub aborted: bool,
}

impl SearchControl {
    pub fn with_deadline(deadline: Option<Instant>) -> Self {
        Self {
            deadline,
            ..Self::default()
        }
    }

    #[inline]
    fn visit(&mut self) -> bool {
        self.nodes += 1;
        if let Some(deadline) = self.deadline {
            if self.nodes % DEADLINE_POLL_INTERVAL == 0 && Instant::now() >= deadline {
                self.aborted = true;
            }
        }
        self.aborted
    }
}

/// Alpha-beta search over `depth` plies.
pub fn search<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    ai: Player,
) -> SearchResult {
    let mut control = SearchControl::default();
    let (score, best_move) = alpha_beta(
        game_state,
        scorer,
        depth,
        alpha,
        beta,
        maximizing,
        ai,
        &mut control,
    );
    SearchResult {
        score,
        best_move,
        nodes: control.nodes,
    }
}

/// Candidate moves, captures first, otherwise in generator order.
pub fn ordered_moves(game_state: &GameState) -> Vec<&Move> {
    let mut moves: Vec<&Move> = game_state.legal_moves.iter().collect();
    moves.sort_by_key(|mv| Reverse(mv.capture_count()));
    moves
}

#[inline]
fn is_terminal(game_state: &GameState, depth: u8) -> bool {
    depth == 0 || game_state.winner.is_some() || game_state.legal_moves.is_empty()
}

/// Returns early with a meaningless result once `control.aborted` is set;
/// callers must check the flag before trusting the value.
#[allow(clippy::too_many_arguments)]
pub(crate) fn alpha_beta<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    ai: Player,
    control: &mut SearchControl,
) -> (f64, Option<Move>) {
    if control.visit() || is_terminal(game_state, depth) {
        return (scorer.score(game_state, ai), None);
    }

    let mut best_move: Option<&Move> = None;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in ordered_moves(game_state) {
        let child = apply_move(game_state, mv);
        let (score, _) = alpha_beta(
            &child,
            scorer,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            ai,
            control,
        );
        if control.aborted {
            break;
        }

        if maximizing {
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best {
                best = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    (best, best_move.cloned())
}

/// Plain minimax without pruning. Same results as [`search`] with an open
/// window, at the cost of visiting every node.
pub fn minimax_unpruned<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    ai: Player,
) -> SearchResult {
    let mut nodes = 0;
    let (score, best_move) = minimax_full(game_state, scorer, depth, maximizing, ai, &mut nodes);
    SearchResult {
        score,
        best_move,
        nodes,
    }
}

fn minimax_full<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    ai: Player,
    nodes: &mut u64,
) -> (f64, Option<Move>) {
    *nodes += 1;
    if is_terminal(game_state, depth) {
        return (scorer.score(game_state, ai), None);
    }

    let mut best_move: Option<&Move> = None;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for mv in ordered_moves(game_state) {
        let child = apply_move(game_state, mv);
        let (score, _) = minimax_full(&child, scorer, depth - 1, !maximizing, ai, nodes);
        let better = if maximizing { score > best } else { score < best };
        if better {
            best = score;
            best_move = Some(mv);
        }
    }
    (best, best_move.cloned())
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::checkers_types::RuleSet;
    use crate::search::board_scoring::{HeuristicScorer, MaterialScorer};

    fn open_window(game: &GameState, depth: u8) -> SearchResult {
        search(
            game,
            &HeuristicScorer,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            game.turn,
        )
    }

    fn sample_positions() -> Vec<GameState> {
        let mut positions = vec![GameState::new_game()];
        for (seed, forced) in [(3u64, false), (5, true), (8, false)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new_game_with_rules(RuleSet {
                forced_captures: forced,
            });
            for ply in 0..40 {
                let Some(mv) = game.legal_moves.choose(&mut rng).cloned() else {
                    break;
                };
                game = apply_move(&game, &mv);
                if ply % 10 == 9 {
                    positions.push(game.clone());
                }
            }
        }
        positions
    }

    #[test]
    fn pruning_never_changes_the_root_score() {
        for game in sample_positions() {
            for depth in 1..=4 {
                let pruned = open_window(&game, depth);
                let full = minimax_unpruned(&game, &HeuristicScorer, depth, true, game.turn);
                assert_eq!(
                    pruned.score, full.score,
                    "depth {depth}: pruned {} vs full {}",
                    pruned.score, full.score
                );
                assert!(pruned.nodes <= full.nodes);
            }
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes_at_depth() {
        let game = GameState::new_game();
        let pruned = open_window(&game, 5);
        let full = minimax_unpruned(&game, &HeuristicScorer, 5, true, game.turn);
        assert!(
            pruned.nodes < full.nodes,
            "expected a cut: {} vs {}",
            pruned.nodes,
            full.nodes
        );
    }

    #[test]
    fn depth_zero_returns_static_evaluation() {
        let game = GameState::new_game();
        let result = open_window(&game, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
        assert!(result.score.abs() < 1e-9);
    }

    #[test]
    fn search_takes_a_free_piece() {
        // White can capture on 27 or slide; taking wins material at depth 1.
        let game = GameState::from_pieces(
            Player::White,
            &[
                (18, Piece::regular(Player::White)),
                (27, Piece::regular(Player::Black)),
                (63, Piece::regular(Player::Black)),
            ],
            RuleSet::default(),
        );
        let result = search(
            &game,
            &MaterialScorer,
            1,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            Player::White,
        );
        let best = result.best_move.expect("a move should be chosen");
        assert!(best.is_jump(), "expected the capture, got {best}");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn minimizing_root_picks_the_worst_move_for_the_ai() {
        // Black to move, scored for White: Black's best reply is the capture.
        let game = GameState::from_pieces(
            Player::Black,
            &[
                (36, Piece::regular(Player::Black)),
                (27, Piece::regular(Player::White)),
                (0, Piece::regular(Player::White)),
            ],
            RuleSet::default(),
        );
        let result = search(
            &game,
            &MaterialScorer,
            1,
            f64::NEG_INFINITY,
            f64::INFINITY,
            false,
            Player::White,
        );
        let best = result.best_move.expect("a move should be chosen");
        assert_eq!(best, Move::single_jump(36, 27, 18));
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn captures_are_ordered_first() {
        let game = GameState::from_pieces(
            Player::White,
            &[
                (4, Piece::regular(Player::White)),
                (18, Piece::regular(Player::White)),
                (27, Piece::regular(Player::Black)),
                (63, Piece::regular(Player::Black)),
            ],
            RuleSet::default(),
        );
        let ordered: Vec<String> = ordered_moves(&game).iter().map(|m| m.to_string()).collect();
        assert_eq!(ordered, vec!["18x36", "4-13", "4-11", "18-25"]);
    }

    #[test]
    fn terminal_positions_return_no_move() {
        let game = GameState::from_pieces(
            Player::Black,
            &[(18, Piece::regular(Player::White))],
            RuleSet::default(),
        );
        let result = open_window(&game, 4);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }
}
