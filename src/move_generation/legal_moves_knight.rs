use crate::game_state::chess_types::{Board, Color, Square, SquareSet};
use crate::move_generation::legal_move_shared::targets_from_mask;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(board: &Board, from: Square, mover: Color) -> SquareSet {
    targets_from_mask(board, mover, knight_attacks(from))
}
