//! Canonical chess-rule constants.
//!
//! Board geometry, the standard starting layout and the offset/direction sets
//! used by the attack tables and the move generator.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_SIZE: usize = 8;

pub const BLACK_BACK_ROW: u8 = 0;
pub const BLACK_PAWN_START_ROW: u8 = 1;
pub const WHITE_PAWN_START_ROW: u8 = 6;
pub const WHITE_BACK_ROW: u8 = 7;

/// Column the king starts on (e-file).
pub const KING_START_COL: u8 = 4;

/// Back-rank layout from the a-file to the h-file, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// (row, col) deltas.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
