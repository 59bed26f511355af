//! Engine abstraction layer used by the session and the match harness.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped at runtime behind one trait.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Per-call overrides. Unset fields fall back to the engine's configuration.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// `best_move` is `None` only when the side to move has no legal move.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
