//! Perft: exhaustive move-path enumeration to a fixed depth.
//!
//! Node counts at known positions are the standard correctness oracle for the
//! generator, the legality filter and the executor together. Leaf moves are
//! also tallied by kind.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Color, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// A position with published node counts.
#[derive(Debug, Clone, Copy)]
pub struct PerftReference {
    pub name: &'static str,
    pub diagram: [&'static str; 8],
    pub side_to_move: Color,
    /// Node counts for depth 1, 2, ...
    pub nodes: &'static [usize],
}

impl PerftReference {
    pub fn board(&self) -> ChessResult<Board> {
        Board::from_diagram(&self.diagram)
    }
}

pub const START_POSITION: PerftReference = PerftReference {
    name: "start",
    diagram: [
        "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
        "RNBQKBNR",
    ],
    side_to_move: Color::White,
    nodes: &[20, 400, 8902, 197_281],
};

/// Castling, pins and en passant in one middlegame ("kiwipete").
pub const KIWIPETE: PerftReference = PerftReference {
    name: "kiwipete",
    diagram: [
        "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
        "R...K..R",
    ],
    side_to_move: Color::White,
    nodes: &[48, 2039, 97_862],
};

/// Sparse endgame where en passant can expose a king along its rank.
pub const ROOK_ENDGAME: PerftReference = PerftReference {
    name: "rook_endgame",
    diagram: [
        "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
        "........",
    ],
    side_to_move: Color::White,
    nodes: &[14, 191, 2812, 43_238, 674_624],
};

pub const REFERENCE_POSITIONS: [PerftReference; 3] = [START_POSITION, KIWIPETE, ROOK_ENDGAME];

pub fn perft(
    board: &Board,
    side_to_move: Color,
    en_passant_target: Option<Square>,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, to) in all_legal_moves(board, side_to_move, en_passant_target) {
        let (next, effects) = apply_move(board, from, to, side_to_move, en_passant_target)?;
        let opponent = side_to_move.opposite();

        if depth == 1 {
            total.nodes += 1;
            if effects.is_capture() {
                total.captures += 1;
            }
            if effects.en_passant {
                total.en_passant += 1;
            }
            if effects.castling.is_some() {
                total.castles += 1;
            }
            if effects.promotion.is_some() {
                total.promotions += 1;
            }
            if is_king_in_check(&next, opponent) {
                total.checks += 1;
                if !has_any_legal_move(&next, opponent, effects.next_en_passant_target) {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft(
                &next,
                opponent,
                effects.next_en_passant_target,
                depth - 1,
            )?);
        }
    }

    Ok(total)
}
