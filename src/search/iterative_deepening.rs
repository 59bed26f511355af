//! Iterative deepening over the alpha-beta search.
//!
//! Runs depth 1, 2, ... up to `max_depth`, keeping the result of the deepest
//! iteration that finished. With `movetime_ms` set, no new iteration starts
//! once the budget is spent and an iteration still running at the deadline is
//! abandoned, so the engine always answers with a fully searched depth.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{alpha_beta, SearchControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub movetime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            movetime_ms: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterativeSearchResult {
    pub best_move: Option<Move>,
    pub best_score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

pub fn iterative_deepening_search<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> IterativeSearchResult {
    let started = Instant::now();
    let deadline = config
        .movetime_ms
        .map(|ms| started + Duration::from_millis(ms));
    let ai = game_state.turn;

    let mut result = IterativeSearchResult {
        best_score: scorer.score(game_state, ai),
        ..IterativeSearchResult::default()
    };
    let mut total_nodes = 0u64;

    for depth in 1..=config.max_depth {
        if game_state.legal_moves.is_empty() {
            break;
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }

        let mut control = SearchControl::with_deadline(deadline);
        let (score, best_move) = alpha_beta(
            game_state,
            scorer,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            ai,
            &mut control,
        );
        total_nodes += control.nodes;

        if control.aborted {
            trace!(depth, nodes = control.nodes, "iteration abandoned at deadline");
            break;
        }

        trace!(depth, score, nodes = control.nodes, "iteration complete");
        result.best_move = best_move;
        result.best_score = score;
        result.reached_depth = depth;
    }

    result.nodes = total_nodes;
    result.elapsed_ms = started.elapsed().as_millis() as u64;
    result
}
