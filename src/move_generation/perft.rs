use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub jumps: usize,
    pub multi_jumps: usize,
    pub crownings: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.jumps += rhs.jumps;
        self.multi_jumps += rhs.multi_jumps;
        self.crownings += rhs.crownings;
    }
}

/// Count leaves of the legal-move tree `depth` plies below `game_state`.
///
/// Tallies for jumps and crownings are taken over the moves leading into the
/// final ply, like the node count.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in &game_state.legal_moves {
        let next = apply_move(game_state, mv);
        if depth == 1 {
            total.nodes += 1;
            if mv.is_jump() {
                total.jumps += 1;
            }
            if mv.capture_count() > 1 {
                total.multi_jumps += 1;
            }
            let before = game_state.piece_at(mv.origin()).map(|p| p.is_king());
            let after = next.piece_at(mv.destination()).map(|p| p.is_king());
            if before == Some(false) && after == Some(true) {
                total.crownings += 1;
            }
        } else {
            total.merge(perft(&next, depth - 1));
        }
    }
    total
}
