//! Attack analysis: is a square attacked, is a king in check.
//!
//! Leapers (pawn, knight, king) are tested with their precomputed tables from
//! their own squares. Slider rays are traced once from the target square and
//! tested against each bishop, rook and queen, so the board is scanned a
//! single time per query.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// True when `color`'s king is attacked by the other side.
///
/// A board without a king for `color` reports `false`; see
/// [`Board::validate_kings`] to surface that corruption instead.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let occupancy = board.occupancy();
    let target_mask = square.bit();
    // Sliders: trace from the target outward, which is the same ray with the
    // same blockers as tracing from the slider.
    let diagonals = bishop_attacks(square, occupancy);
    let orthogonals = rook_attacks(square, occupancy);

    board.pieces_of(attacker_color).any(|(from, piece)| match piece.kind {
        PieceKind::Pawn => pawn_attacks(attacker_color, from) & target_mask != 0,
        PieceKind::Knight => knight_attacks(from) & target_mask != 0,
        PieceKind::King => king_attacks(from) & target_mask != 0,
        PieceKind::Bishop => diagonals & from.bit() != 0,
        PieceKind::Rook => orthogonals & from.bit() != 0,
        PieceKind::Queen => (diagonals | orthogonals) & from.bit() != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::{Board, Color, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("square should parse")
    }

    #[test]
    fn starting_position_attacks() {
        let board = Board::starting_position();
        assert!(is_square_attacked(&board, sq("e3"), Color::White));
        assert!(is_square_attacked(&board, sq("f3"), Color::White));
        assert!(!is_square_attacked(&board, sq("e4"), Color::White));
        assert!(is_square_attacked(&board, sq("c6"), Color::Black));
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn pawn_does_not_attack_straight_ahead() {
        let board = Board::from_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....P...",
            "....K...",
        ])
        .expect("diagram should parse");
        assert!(!is_square_attacked(&board, sq("e3"), Color::White));
        assert!(is_square_attacked(&board, sq("d3"), Color::White));
    }

    #[test]
    fn blocker_counts_as_attacked_but_shadow_does_not() {
        let board = Board::from_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            "r..N....",
            "........",
            "........",
            "....K...",
        ])
        .expect("diagram should parse");
        assert!(is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("e4"), Color::Black));
        assert!(is_square_attacked(&board, sq("a1"), Color::Black));
    }

    #[test]
    fn queen_gives_check_along_diagonal() {
        let board = Board::from_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            ".......q",
            "........",
            "........",
            "....K...",
        ])
        .expect("diagram should parse");
        assert!(is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = Board::starting_position().remove_piece(sq("e1"));
        assert!(!is_king_in_check(&board, Color::White));
    }
}
