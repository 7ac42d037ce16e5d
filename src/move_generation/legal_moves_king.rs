//! King steps plus castling.
//!
//! Castling is offered when the king and the rook on the chosen side are both
//! unmoved, the king is not in check, every square strictly between them is
//! empty, and neither square the king crosses (destination included) is
//! attacked.

use crate::game_state::chess_types::{Board, CastlingSide, Color, PieceKind, Square, SquareSet};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{piece_of_color, targets_from_mask};
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(board: &Board, from: Square, mover: Color) -> SquareSet {
    let mut out = targets_from_mask(board, mover, king_attacks(from));
    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if let Some(to) = castling_destination(board, from, mover, side) {
            out.insert(to);
        }
    }
    out
}

/// King destination for castling on `side`, when every precondition holds.
pub fn castling_destination(
    board: &Board,
    king_from: Square,
    mover: Color,
    side: CastlingSide,
) -> Option<Square> {
    let king = piece_of_color(board, king_from, mover)?;
    if king.kind != PieceKind::King || king.has_moved {
        return None;
    }

    let enemy = mover.opposite();
    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return None;
    }

    let rook_sq = king_from.with_col(side.rook_col());
    let rook = piece_of_color(board, rook_sq, mover)?;
    if rook.kind != PieceKind::Rook || rook.has_moved {
        return None;
    }

    let step = side.direction();
    let mut between = king_from.offset(0, step)?;
    while between != rook_sq {
        if !board.is_empty_at(between) {
            return None;
        }
        between = between.offset(0, step)?;
    }

    let transit = king_from.offset(0, step)?;
    let destination = king_from.offset(0, 2 * step)?;
    if is_square_attacked(board, transit, enemy) || is_square_attacked(board, destination, enemy) {
        return None;
    }

    Some(destination)
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::{Board, Color, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("square should parse")
    }

    #[test]
    fn no_castling_from_the_starting_position() {
        let board = Board::starting_position();
        assert!(generate_king_moves(&board, sq("e1"), Color::White).is_empty());
        assert!(generate_king_moves(&board, sq("e8"), Color::Black).is_empty());
    }

    #[test]
    fn both_sides_castle_on_a_clear_back_rank() {
        let board = Board::from_diagram(&[
            "r...k..r",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ])
        .expect("diagram should parse");
        let moves = generate_king_moves(&board, sq("e1"), Color::White);
        assert!(moves.contains(sq("g1")));
        assert!(moves.contains(sq("c1")));
        let moves = generate_king_moves(&board, sq("e8"), Color::Black);
        assert!(moves.contains(sq("g8")));
        assert!(moves.contains(sq("c8")));
    }

    #[test]
    fn castling_through_an_attacked_square_is_refused() {
        let board = Board::from_diagram(&[
            "....kr..",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ])
        .expect("diagram should parse");
        let moves = generate_king_moves(&board, sq("e1"), Color::White);
        assert!(!moves.contains(sq("g1")));
        assert!(moves.contains(sq("c1")));
    }

    #[test]
    fn queenside_rook_path_may_be_attacked() {
        // b1 is attacked but the king never crosses it.
        let board = Board::from_diagram(&[
            ".r..k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K...",
        ])
        .expect("diagram should parse");
        let moves = generate_king_moves(&board, sq("e1"), Color::White);
        assert!(moves.contains(sq("c1")));
    }

    #[test]
    fn moved_rook_cannot_castle() {
        let mut board = Board::from_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....K..R",
        ])
        .expect("diagram should parse");
        let rook = board.piece_at(sq("h1")).expect("rook on h1").moved();
        board = board.place_piece(sq("h1"), rook);
        assert!(!generate_king_moves(&board, sq("e1"), Color::White).contains(sq("g1")));
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let board = Board::from_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            "....r...",
            "........",
            "........",
            "R...K..R",
        ])
        .expect("diagram should parse");
        let moves = generate_king_moves(&board, sq("e1"), Color::White);
        assert!(!moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));
    }
}
