//! Difficulty-driven minimax engine.
//!
//! `get_best_move` is the plain entry point used by callers that only need a
//! move; `MinimaxEngine` wraps the same search behind the `Engine` trait with
//! per-call depth and time overrides.

use tracing::debug;

use crate::engines::difficulty::Difficulty;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::search::board_scoring::HeuristicScorer;
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig};
use crate::search::minimax::search;

/// Best move for the side to move at `difficulty`, or `None` when it has no
/// legal move (the caller should treat that as a loss for the side to move).
pub fn get_best_move(game_state: &GameState, difficulty: Difficulty) -> Option<Move> {
    let depth = difficulty.depth();
    debug!(%difficulty, depth, turn = %game_state.turn, "ai thinking");

    if game_state.legal_moves.is_empty() {
        debug!("no legal moves available for ai");
        return None;
    }

    let result = search(
        game_state,
        &HeuristicScorer,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        game_state.turn,
    );
    debug!(score = result.score, nodes = result.nodes, "ai chose move");
    result.best_move
}

/// Label-based entry point; unknown labels play at medium strength.
pub fn get_ai_move(game_state: &GameState, difficulty_label: &str) -> Option<Move> {
    get_best_move(game_state, Difficulty::from_label(difficulty_label))
}

pub struct MinimaxEngine {
    difficulty: Difficulty,
    movetime_ms: Option<u64>,
    scorer: HeuristicScorer,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            movetime_ms: None,
            scorer: HeuristicScorer,
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumCheckers Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Difficulty") {
            self.difficulty = value.parse::<Difficulty>().map_err(|e| e.to_string())?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("MoveTime") {
            let trimmed = value.trim();
            self.movetime_ms = if trimmed.is_empty() || trimmed == "0" {
                None
            } else {
                Some(
                    trimmed
                        .parse::<u64>()
                        .map_err(|_| format!("invalid MoveTime value '{value}'"))?,
                )
            };
            return Ok(());
        }
        Err(format!("unknown option '{name}'"))
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut out = EngineOutput::default();
        if game_state.legal_moves.is_empty() {
            out.info_lines
                .push("info string minimax_engine no legal moves".to_owned());
            return Ok(out);
        }

        // Explicit per-call depth wins over the configured difficulty.
        let depth = params.depth.unwrap_or(self.difficulty.depth()).max(1);
        let movetime_ms = params.movetime_ms.or(self.movetime_ms);

        let result = iterative_deepening_search(
            game_state,
            &self.scorer,
            SearchConfig {
                max_depth: depth,
                movetime_ms,
            },
        );

        out.best_move = result.best_move;
        if out.best_move.is_none() {
            // Deadline hit before depth 1 finished: any legal move beats none.
            out.best_move = game_state.legal_moves.first().cloned();
        }
        out.info_lines.push(format!(
            "info depth {} score {:.2} nodes {} time {}",
            result.reached_depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        out.info_lines.push(format!(
            "info string minimax_engine difficulty {} used_depth {}",
            self.difficulty, depth
        ));
        if let Some(ms) = movetime_ms {
            out.info_lines
                .push(format!("info string minimax_engine movetime_ms {ms}"));
        }
        debug!(
            depth = result.reached_depth,
            score = result.best_score,
            nodes = result.nodes,
            "minimax engine finished"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::RuleSet;

    #[test]
    fn opening_move_is_a_plain_white_slide() {
        let game = GameState::new_game();
        let mv = get_ai_move(&game, "easy").expect("opening has moves");

        let origin_piece = game.piece_at(mv.origin()).expect("origin holds a piece");
        assert_eq!(origin_piece, Piece::regular(Player::White));
        assert!(mv.captures.is_empty());
        assert_eq!(mv.kind, MoveKind::Regular);
        assert!(game.is_empty(mv.destination()));
        assert!(game.legal_moves.contains(&mv));
    }

    #[test]
    fn no_legal_moves_yields_none() {
        let game = GameState::from_pieces(
            Player::Black,
            &[
                (56, Piece::regular(Player::Black)),
                (49, Piece::regular(Player::White)),
                (42, Piece::regular(Player::White)),
            ],
            RuleSet::default(),
        );
        assert_eq!(get_best_move(&game, Difficulty::Expert), None);
    }

    #[test]
    fn unknown_label_plays_like_medium() {
        let game = GameState::new_game();
        assert_eq!(
            get_ai_move(&game, "nonsense"),
            get_best_move(&game, Difficulty::Medium)
        );
    }

    #[test]
    fn ai_finishes_a_won_position() {
        // Black has one piece left and White can take it.
        let game = GameState::from_pieces(
            Player::White,
            &[
                (18, Piece::regular(Player::White)),
                (27, Piece::regular(Player::Black)),
                (2, Piece::regular(Player::White)),
            ],
            RuleSet::default(),
        );
        let mv = get_best_move(&game, Difficulty::Easy).expect("moves exist");
        assert_eq!(mv, Move::single_jump(18, 27, 36));
    }

    #[test]
    fn engine_honors_depth_override_and_reports_info() {
        let game = GameState::new_game();
        let mut engine = MinimaxEngine::new(Difficulty::Expert);
        let out = engine
            .choose_move(
                &game,
                &GoParams {
                    depth: Some(1),
                    ..GoParams::default()
                },
            )
            .expect("engine should choose a move");

        assert!(out.best_move.is_some());
        let joined = out.info_lines.join("\n");
        assert!(joined.contains("info depth 1"), "got: {joined}");
        assert!(joined.contains("used_depth 1"), "got: {joined}");
    }

    #[test]
    fn engine_options_are_validated() {
        let mut engine = MinimaxEngine::default();
        engine
            .set_option("difficulty", "hard")
            .expect("known difficulty");
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        assert!(engine.set_option("Difficulty", "godlike").is_err());
        assert!(engine.set_option("MoveTime", "abc").is_err());
        assert!(engine.set_option("MoveTime", "250").is_ok());
        assert!(engine.set_option("Ponder", "true").is_err());
    }
}
