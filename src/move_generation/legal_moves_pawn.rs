//! Pseudo-legal pawn moves: single and double advance, diagonal captures and
//! the en passant capture onto the current target square.

use crate::game_state::chess_types::{Board, Color, Square, SquareSet};
use crate::move_generation::legal_move_shared::piece_of_color;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    mover: Color,
    en_passant_target: Option<Square>,
) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let forward = mover.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.insert(one_step);

            if from.row() == mover.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    for col_delta in [-1, 1] {
        let Some(to) = from.offset(forward, col_delta) else {
            continue;
        };
        let is_capture = piece_of_color(board, to, mover.opposite()).is_some();
        if is_capture || en_passant_target == Some(to) {
            out.insert(to);
        }
    }

    out
}
