//! The record of one applied move, appended to the game history.

use std::fmt;

use crate::game_state::chess_types::{CastlingSide, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_capture: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub notation: String,
    pub castling: Option<CastlingSide>,
    pub en_passant: bool,
    pub promotion: Option<PieceKind>,
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}
