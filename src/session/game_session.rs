//! Live game ownership and cell-click input.
//!
//! `GameSession` is the single owner of the live `GameState`. Front ends feed
//! it cell indices: the first click on a piece of the side to move selects
//! it, a click on a slide destination plays that slide, and a click on a
//! first-hop landing cell starts a capture that is entered hop by hop. The
//! board shown during a capture is a preview; the live state only changes
//! once a whole legal move has been identified and committed.

use thiserror::Error;
use tracing::{debug, info};

use crate::engines::difficulty::Difficulty;
use crate::engines::engine_minimax::get_best_move;
use crate::game_state::checkers_rules::CELL_COUNT;
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{play_path_on_board, try_apply_move};
use crate::move_generation::move_generator::MoveGenerationError;
use crate::moves::move_descriptions::{CaptureList, MovePath};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cell {0} is off the board")]
    CellOutOfRange(usize),

    #[error("cell {0} does not hold a piece of the side to move")]
    NotYourPiece(Square),

    #[error("no piece is selected")]
    NoPieceSelected,

    #[error("cell {0} is not a destination for the selected piece")]
    NotADestination(Square),

    #[error("the side to move has no legal move")]
    NoMoveAvailable,

    #[error(transparent)]
    Move(#[from] MoveGenerationError),
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected; these cells are its slide destinations and first-hop landings.
    Selected { destinations: Vec<Square> },
    /// One hop of a capture chain was entered; more hops must follow.
    HopPlayed { at: Square, next_hops: Vec<Square> },
    /// A complete legal move was played and the turn passed.
    Committed(Move),
}

/// A capture chain being entered hop by hop.
#[derive(Debug, Clone)]
struct JumpInProgress {
    /// Legal chains consistent with the hops entered so far.
    candidates: Vec<Move>,
    /// Index into the candidates' paths of the cell the piece now stands on.
    cursor: usize,
    preview: Board,
}

impl JumpInProgress {
    fn next_hops(&self) -> Vec<Square> {
        let mut hops = Vec::new();
        for mv in &self.candidates {
            if let Some(&cell) = mv.path.get(self.cursor + 1) {
                if !hops.contains(&cell) {
                    hops.push(cell);
                }
            }
        }
        hops
    }

    fn current_cell(&self) -> Square {
        self.candidates[0].path[self.cursor]
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    selected: Option<Square>,
    jump: Option<JumpInProgress>,
}

impl GameSession {
    pub fn new(rules: RuleSet) -> Self {
        Self::from_state(GameState::new_game_with_rules(rules))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            selected: None,
            jump: None,
        }
    }

    /// Throw away the current game and start over with the same rules.
    pub fn reset(&mut self) {
        let rules = self.state.rules;
        *self = Self::new(rules);
        debug!("session reset");
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.state.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.state.winner
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.jump.is_some()
    }

    /// Board as it should be displayed, including hops of an unfinished capture.
    pub fn preview_board(&self) -> &Board {
        match &self.jump {
            Some(jump) => &jump.preview,
            None => &self.state.board,
        }
    }

    pub fn status_message(&self) -> String {
        match self.state.winner {
            Some(winner) => format!("Congratulations, player {winner}! Reset to play again."),
            None => format!("It is player {}'s turn", self.state.turn),
        }
    }

    /// Cells the piece on `origin` can reach with its first step.
    pub fn destinations_from(&self, origin: Square) -> Vec<Square> {
        let mut out = Vec::new();
        for mv in self.state.legal_moves.iter().filter(|m| m.origin() == origin) {
            let first_step = mv.path[1];
            if !out.contains(&first_step) {
                out.push(first_step);
            }
        }
        out
    }

    /// Select a piece of the side to move.
    pub fn select(&mut self, cell: usize) -> SessionResult<Vec<Square>> {
        let cell = self.checked_cell(cell)?;
        self.ensure_live()?;
        if self.jump.is_some() {
            return Err(SessionError::NotADestination(cell));
        }
        match self.state.piece_at(cell) {
            Some(piece) if piece.owner == self.state.turn => {
                self.selected = Some(cell);
                Ok(self.destinations_from(cell))
            }
            _ => Err(SessionError::NotYourPiece(cell)),
        }
    }

    /// Feed one clicked cell.
    pub fn click(&mut self, cell: usize) -> SessionResult<ClickOutcome> {
        let cell = self.checked_cell(cell)?;
        self.ensure_live()?;

        if self.jump.is_some() {
            return self.continue_jump(cell);
        }

        if matches!(self.state.piece_at(cell), Some(p) if p.owner == self.state.turn) {
            let destinations = self.select(cell as usize)?;
            return Ok(ClickOutcome::Selected { destinations });
        }

        let origin = self.selected.ok_or(SessionError::NoPieceSelected)?;

        let slide = self
            .state
            .legal_moves
            .iter()
            .find(|m| {
                m.kind == MoveKind::Regular && m.origin() == origin && m.destination() == cell
            })
            .cloned();
        if let Some(mv) = slide {
            return self.commit(mv).map(ClickOutcome::Committed);
        }

        let candidates: Vec<Move> = self
            .state
            .legal_moves
            .iter()
            .filter(|m| m.is_jump() && m.origin() == origin && m.path[1] == cell)
            .cloned()
            .collect();
        if candidates.is_empty() {
            return Err(SessionError::NotADestination(cell));
        }

        self.jump = Some(JumpInProgress {
            candidates,
            cursor: 0,
            preview: self.state.board,
        });
        self.continue_jump(cell)
    }

    /// Play a complete move directly, bypassing click entry.
    pub fn play(&mut self, mv: &Move) -> SessionResult<()> {
        self.ensure_live()?;
        self.commit(mv.clone()).map(|_| ())
    }

    /// Let the engine move for the side to move.
    pub fn play_ai(&mut self, difficulty: Difficulty) -> SessionResult<Move> {
        self.ensure_live()?;
        self.jump = None;
        self.selected = None;
        let mv = get_best_move(&self.state, difficulty).ok_or(SessionError::NoMoveAvailable)?;
        self.commit(mv)
    }

    fn continue_jump(&mut self, cell: Square) -> SessionResult<ClickOutcome> {
        let jump = self.jump.as_mut().ok_or(SessionError::NoPieceSelected)?;
        let next = jump.cursor + 1;

        if !jump.next_hops().contains(&cell) {
            return Err(SessionError::NotADestination(cell));
        }
        jump.candidates.retain(|m| m.path.get(next) == Some(&cell));
        jump.cursor = next;

        let entered = &jump.candidates[0];
        let partial = Move {
            path: MovePath::from_slice(&entered.path[..=next]),
            captures: CaptureList::from_slice(&entered.captures[..next]),
            kind: MoveKind::Jump,
        };
        jump.preview = play_path_on_board(&self.state.board, &partial);
        self.selected = Some(jump.current_cell());

        let next_hops = jump.next_hops();
        if next_hops.is_empty() {
            let mv = jump.candidates[0].clone();
            return self.commit(mv).map(ClickOutcome::Committed);
        }
        Ok(ClickOutcome::HopPlayed {
            at: cell,
            next_hops,
        })
    }

    fn commit(&mut self, mv: Move) -> SessionResult<Move> {
        let next = try_apply_move(&self.state, &mv)?;
        debug!(%mv, player = %self.state.turn, "move committed");
        self.state = next;
        self.selected = None;
        self.jump = None;
        if let Some(winner) = self.state.winner {
            info!(%winner, "game over");
        }
        Ok(mv)
    }

    fn ensure_live(&self) -> SessionResult<()> {
        match self.state.winner {
            Some(winner) => Err(MoveGenerationError::GameOver { winner }.into()),
            None => Ok(()),
        }
    }

    fn checked_cell(&self, cell: usize) -> SessionResult<Square> {
        if cell >= CELL_COUNT {
            return Err(SessionError::CellOutOfRange(cell));
        }
        Ok(cell as Square)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double_jump_session() -> GameSession {
        // 18 can take 27 then either 45 (landing 54) or 43 (landing 50).
        GameSession::from_state(GameState::from_pieces(
            Player::White,
            &[
                (18, Piece::regular(Player::White)),
                (27, Piece::regular(Player::Black)),
                (45, Piece::regular(Player::Black)),
                (43, Piece::regular(Player::Black)),
                (61, Piece::regular(Player::Black)),
            ],
            RuleSet::default(),
        ))
    }

    #[test]
    fn select_then_slide_commits_the_move() {
        let mut session = GameSession::default();
        assert_eq!(session.select(16), Ok(vec![25]));
        let outcome = session.click(25).expect("25 is a destination");
        assert_eq!(outcome, ClickOutcome::Committed(Move::simple(16, 25)));
        assert_eq!(session.turn(), Player::Black);
        assert_eq!(session.selected(), None);
        assert_eq!(session.status_message(), "It is player Black's turn");
    }

    #[test]
    fn clicking_an_own_piece_selects_it() {
        let mut session = GameSession::default();
        let outcome = session.click(18).expect("own piece");
        assert_eq!(
            outcome,
            ClickOutcome::Selected {
                destinations: vec![27, 25]
            }
        );
        assert_eq!(session.selected(), Some(18));
    }

    #[test]
    fn bad_clicks_are_rejected_without_changing_state() {
        let mut session = GameSession::default();
        assert_eq!(session.click(64), Err(SessionError::CellOutOfRange(64)));
        assert_eq!(session.click(27), Err(SessionError::NoPieceSelected));
        assert_eq!(session.select(45), Err(SessionError::NotYourPiece(45)));
        session.select(16).expect("own piece");
        assert_eq!(session.click(36), Err(SessionError::NotADestination(36)));
        assert_eq!(session.turn(), Player::White);
    }

    #[test]
    fn capture_chain_is_entered_hop_by_hop() {
        let mut session = double_jump_session();
        session.select(18).expect("own piece");

        let first = session.click(36).expect("first hop");
        assert_eq!(
            first,
            ClickOutcome::HopPlayed {
                at: 36,
                next_hops: vec![54, 50]
            }
        );
        assert!(session.is_capturing());
        // Preview shows the hop; the live state does not.
        assert!(session.preview_board()[27].is_none());
        assert!(session.preview_board()[36].is_some());
        assert!(session.state().piece_at(27).is_some());
        assert_eq!(session.turn(), Player::White);

        assert_eq!(session.click(63), Err(SessionError::NotADestination(63)));

        let done = session.click(50).expect("second hop");
        let mv = match done {
            ClickOutcome::Committed(mv) => mv,
            other => panic!("expected a committed move, got {other:?}"),
        };
        assert_eq!(mv.path.as_slice(), &[18, 36, 50]);
        assert_eq!(mv.captures.as_slice(), &[27, 43]);
        assert!(!session.is_capturing());
        assert_eq!(session.turn(), Player::Black);
        assert!(session.state().piece_at(45).is_some());
    }

    #[test]
    fn single_hop_capture_commits_immediately() {
        let mut session = GameSession::from_state(GameState::from_pieces(
            Player::White,
            &[
                (18, Piece::regular(Player::White)),
                (27, Piece::regular(Player::Black)),
                (63, Piece::regular(Player::Black)),
            ],
            RuleSet::default(),
        ));
        session.select(18).expect("own piece");
        let outcome = session.click(36).expect("capture");
        assert_eq!(outcome, ClickOutcome::Committed(Move::single_jump(18, 27, 36)));
    }

    #[test]
    fn finished_games_refuse_further_input() {
        let mut session = GameSession::from_state(GameState::from_pieces(
            Player::White,
            &[
                (18, Piece::regular(Player::White)),
                (27, Piece::regular(Player::Black)),
            ],
            RuleSet::default(),
        ));
        session.select(18).expect("own piece");
        session.click(36).expect("winning capture");
        assert_eq!(session.winner(), Some(Player::White));
        assert!(session.status_message().contains("Congratulations, player White"));

        let err = session.click(36).expect_err("game is over");
        assert_eq!(
            err,
            SessionError::Move(MoveGenerationError::GameOver {
                winner: Player::White
            })
        );
        assert!(session.play_ai(Difficulty::Easy).is_err());
        assert_eq!(session.winner(), Some(Player::White));

        session.reset();
        assert_eq!(session.winner(), None);
        assert_eq!(session.state().legal_moves.len(), 7);
    }

    #[test]
    fn ai_moves_for_the_side_to_move() {
        let mut session = GameSession::default();
        session.select(16).expect("own piece");
        session.click(25).expect("slide");
        let reply = session.play_ai(Difficulty::Easy).expect("black has moves");
        assert!(reply.origin() >= 40, "black moves from its own half, got {reply}");
        assert_eq!(session.turn(), Player::White);
    }

    #[test]
    fn play_rejects_moves_outside_the_legal_set() {
        let mut session = GameSession::default();
        let err = session.play(&Move::simple(0, 9)).expect_err("blocked");
        assert_eq!(
            err,
            SessionError::Move(MoveGenerationError::IllegalMove(Move::simple(0, 9)))
        );
    }
}
