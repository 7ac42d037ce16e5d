//! Standard algebraic notation for executed moves.
//!
//! Rendering works from the finished `ChessMove` record: the moved piece, the
//! capture and promotion flags, and the check/mate flags computed after the
//! move. Disambiguation between two like pieces reaching the same square is
//! not produced.

use crate::game_state::chess_types::{ChessMove, PieceKind};
use crate::game_state::game_config::GameConfig;

/// Notation for `mv`, e.g. `Nf3`, `exd5`, `O-O`, `a8=Q`, `Qh4#`.
pub fn standard_algebraic(mv: &ChessMove, config: &GameConfig) -> String {
    let mut out = String::with_capacity(8);

    if let Some(side) = mv.castling {
        out.push_str(side.notation());
        if config.annotate_castling_checks {
            push_check_suffix(&mut out, mv);
        }
        return out;
    }

    match mv.piece.kind.notation_letter() {
        Some(letter) => out.push(letter),
        None if mv.is_capture => out.push(char::from(b'a' + mv.from.col())),
        None => {}
    }
    if mv.is_capture {
        out.push('x');
    }
    out.push_str(&mv.to.to_string());

    if let Some(letter) = mv.promotion.and_then(promotion_letter) {
        out.push('=');
        out.push(letter);
    }
    push_check_suffix(&mut out, mv);
    out
}

fn push_check_suffix(out: &mut String, mv: &ChessMove) {
    if mv.is_checkmate {
        out.push('#');
    } else if mv.is_check {
        out.push('+');
    }
}

/// Letter for a promotion piece; pawns and kings never qualify.
#[inline]
pub fn promotion_letter(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Pawn | PieceKind::King => None,
        other => other.notation_letter(),
    }
}

#[cfg(test)]
mod tests {
    use super::{promotion_letter, standard_algebraic};
    use crate::game_state::chess_types::{
        CastlingSide, ChessMove, Color, Piece, PieceKind, Square,
    };
    use crate::game_state::game_config::GameConfig;

    fn sq(name: &str) -> Square {
        name.parse().expect("square should parse")
    }

    fn record(kind: PieceKind, color: Color, from: &str, to: &str) -> ChessMove {
        ChessMove {
            from: sq(from),
            to: sq(to),
            piece: Piece::new(kind, color),
            captured_piece: None,
            is_capture: false,
            is_check: false,
            is_checkmate: false,
            notation: String::new(),
            castling: None,
            en_passant: false,
            promotion: None,
        }
    }

    #[test]
    fn quiet_piece_and_pawn_moves() {
        let config = GameConfig::default();
        let knight = record(PieceKind::Knight, Color::White, "g1", "f3");
        assert_eq!(standard_algebraic(&knight, &config), "Nf3");
        let pawn = record(PieceKind::Pawn, Color::White, "e2", "e4");
        assert_eq!(standard_algebraic(&pawn, &config), "e4");
    }

    #[test]
    fn captures_name_the_pawn_file() {
        let mut mv = record(PieceKind::Pawn, Color::White, "e4", "d5");
        mv.is_capture = true;
        mv.captured_piece = Some(Piece::new(PieceKind::Pawn, Color::Black));
        assert_eq!(standard_algebraic(&mv, &GameConfig::default()), "exd5");

        let mut ep = record(PieceKind::Pawn, Color::White, "e5", "d6");
        ep.is_capture = true;
        ep.en_passant = true;
        assert_eq!(standard_algebraic(&ep, &GameConfig::default()), "exd6");

        let mut bishop = record(PieceKind::Bishop, Color::Black, "c8", "g4");
        bishop.is_capture = true;
        assert_eq!(standard_algebraic(&bishop, &GameConfig::default()), "Bxg4");
    }

    #[test]
    fn castling_suffix_follows_config() {
        let mut mv = record(PieceKind::King, Color::White, "e1", "g1");
        mv.castling = Some(CastlingSide::Kingside);
        mv.is_check = true;
        assert_eq!(standard_algebraic(&mv, &GameConfig::default()), "O-O");
        let annotated = GameConfig {
            annotate_castling_checks: true,
        };
        assert_eq!(standard_algebraic(&mv, &annotated), "O-O+");

        let mut long = record(PieceKind::King, Color::Black, "e8", "c8");
        long.castling = Some(CastlingSide::Queenside);
        assert_eq!(standard_algebraic(&long, &GameConfig::default()), "O-O-O");
    }

    #[test]
    fn promotion_and_mate_suffixes() {
        let mut promo = record(PieceKind::Pawn, Color::White, "a7", "a8");
        promo.promotion = Some(PieceKind::Queen);
        promo.is_check = true;
        assert_eq!(standard_algebraic(&promo, &GameConfig::default()), "a8=Q+");

        let mut mate = record(PieceKind::Queen, Color::Black, "d8", "h4");
        mate.is_check = true;
        mate.is_checkmate = true;
        assert_eq!(standard_algebraic(&mate, &GameConfig::default()), "Qh4#");
    }

    #[test]
    fn only_officers_promote() {
        assert_eq!(promotion_letter(PieceKind::Queen), Some('Q'));
        assert_eq!(promotion_letter(PieceKind::Knight), Some('N'));
        assert_eq!(promotion_letter(PieceKind::Pawn), None);
        assert_eq!(promotion_letter(PieceKind::King), None);
    }
}
