//! Legal move generation.
//!
//! Filters pseudo-legal destinations by applying each candidate on a copy of
//! the board and discarding those that leave the mover's king attacked. The
//! candidate board is the executor's real result, so an en passant capture
//! that uncovers a rank attack on the king is rejected as well.

use crate::game_state::chess_types::{Board, Color, Square, SquareSet};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves;

/// Legal destinations for the piece on `from`.
pub fn legal_moves(
    board: &Board,
    from: Square,
    mover: Color,
    en_passant_target: Option<Square>,
) -> SquareSet {
    pseudo_legal_moves(board, from, mover, en_passant_target)
        .iter()
        .filter(|&to| !leaves_king_in_check(board, from, to, mover, en_passant_target))
        .collect()
}

#[inline]
pub fn is_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
    en_passant_target: Option<Square>,
) -> bool {
    legal_moves(board, from, mover, en_passant_target).contains(to)
}

/// True as soon as any piece of `color` has a legal move.
pub fn has_any_legal_move(board: &Board, color: Color, en_passant_target: Option<Square>) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from, color, en_passant_target).is_empty())
}

/// Every legal `(from, to)` pair for `color`, origins in board order.
pub fn all_legal_moves(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
) -> Vec<(Square, Square)> {
    let mut out = Vec::<(Square, Square)>::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        for to in legal_moves(board, from, color, en_passant_target) {
            out.push((from, to));
        }
    }
    out
}

fn leaves_king_in_check(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
    en_passant_target: Option<Square>,
) -> bool {
    match apply_move(board, from, to, mover, en_passant_target) {
        Ok((next, _)) => is_king_in_check(&next, mover),
        // Unreachable for pseudo-legal input; treat as illegal.
        Err(_) => true,
    }
}
