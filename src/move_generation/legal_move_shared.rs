//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::{Board, Color, Piece, Square, SquareSet};

/// Mask of the squares occupied by `color`.
#[inline]
pub fn own_occupancy(board: &Board, color: Color) -> u64 {
    board
        .pieces_of(color)
        .fold(0u64, |acc, (sq, _)| acc | sq.bit())
}

/// Attack mask minus the mover's own pieces: what knights, kings and sliders
/// may move to.
#[inline]
pub fn targets_from_mask(board: &Board, mover: Color, attacks: u64) -> SquareSet {
    SquareSet::from_bits(attacks & !own_occupancy(board, mover))
}

/// The piece on `square` if it belongs to `color`.
#[inline]
pub fn piece_of_color(board: &Board, square: Square, color: Color) -> Option<Piece> {
    board.piece_at(square).filter(|piece| piece.color == color)
}
