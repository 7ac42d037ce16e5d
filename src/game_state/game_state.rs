//! Snapshot of a game: the board plus everything needed to continue play.
//!
//! `GameState` is owned by `ChessGame`; consumers get it by reference or as a
//! clone and never mutate the live game through it.

use crate::game_state::chess_types::{Board, ChessMove, Color, GameStatus, Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    /// Applied moves in play order. Append-only.
    pub move_history: Vec<ChessMove>,
    pub status: GameStatus,
    pub en_passant_target: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            current_player: Color::White,
            move_history: Vec::new(),
            status: GameStatus::Playing,
            en_passant_target: None,
        }
    }

    /// Half-moves played so far.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.move_history.len()
    }

    /// Full-move number as shown in a score sheet, starting at 1.
    #[inline]
    pub fn fullmove_number(&self) -> usize {
        self.ply_count() / 2 + 1
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_history.last()
    }

    /// Pieces captured by `by`, in capture order.
    pub fn captured_pieces(&self, by: Color) -> Vec<Piece> {
        self.move_history
            .iter()
            .filter(|mv| mv.piece.color == by)
            .filter_map(|mv| mv.captured_piece)
            .collect()
    }
}
