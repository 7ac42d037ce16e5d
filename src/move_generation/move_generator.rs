//! Pseudo-legal move generation: per-piece movement and blocking rules,
//! without the self-check test.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square, SquareSet};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Destinations for the piece on `from`. Empty when the square is empty or
/// the piece does not belong to `mover`.
pub fn pseudo_legal_moves(
    board: &Board,
    from: Square,
    mover: Color,
    en_passant_target: Option<Square>,
) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    if piece.color != mover {
        return SquareSet::EMPTY;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, mover, en_passant_target),
        PieceKind::Knight => generate_knight_moves(board, from, mover),
        PieceKind::Bishop => generate_bishop_moves(board, from, mover),
        PieceKind::Rook => generate_rook_moves(board, from, mover),
        PieceKind::Queen => generate_queen_moves(board, from, mover),
        PieceKind::King => generate_king_moves(board, from, mover),
    }
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::chess_types::{Board, Color, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("square should parse")
    }

    #[test]
    fn empty_or_foreign_square_yields_nothing() {
        let board = Board::starting_position();
        assert!(pseudo_legal_moves(&board, sq("e4"), Color::White, None).is_empty());
        assert!(pseudo_legal_moves(&board, sq("e7"), Color::White, None).is_empty());
    }

    #[test]
    fn pinned_piece_still_has_pseudo_legal_moves() {
        let board = Board::from_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            "....r...",
            "........",
            "....B...",
            "....K...",
        ])
        .expect("diagram should parse");
        assert!(!pseudo_legal_moves(&board, sq("e2"), Color::White, None).is_empty());
    }
}
