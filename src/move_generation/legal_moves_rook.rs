//! Rook move generation. The blocking square is a destination only when it
//! holds an opposing piece.

use crate::game_state::chess_types::{Board, Color, Square, SquareSet};
use crate::move_generation::legal_move_shared::targets_from_mask;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(board: &Board, from: Square, mover: Color) -> SquareSet {
    targets_from_mask(board, mover, rook_attacks(from, board.occupancy()))
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{Board, Color, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("square should parse")
    }

    #[test]
    fn rook_captures_enemy_blocker_but_not_own() {
        let board = Board::from_diagram(&[
            "....k...",
            "...p....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "...R.NK.",
        ])
        .expect("diagram should parse");
        let moves = generate_rook_moves(&board, sq("d1"), Color::White);
        assert!(moves.contains(sq("d7")));
        assert!(!moves.contains(sq("d8")));
        assert!(moves.contains(sq("e1")));
        assert!(!moves.contains(sq("f1")));
        assert!(moves.contains(sq("a1")));
        assert_eq!(moves.len(), 6 + 3 + 1);
    }
}
