use crate::game_state::chess_types::{Board, Color, Square, SquareSet};
use crate::move_generation::legal_move_shared::targets_from_mask;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(board: &Board, from: Square, mover: Color) -> SquareSet {
    targets_from_mask(board, mover, queen_attacks(from, board.occupancy()))
}
