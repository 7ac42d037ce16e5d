//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type of the crate. Rule violations during
//! play (illegal move, wrong side, game already over) are reported through it
//! by `ChessGame::try_move`; the boolean `attempt_move` wrapper simply discards
//! the reason. Variants describing a corrupted board (`KingCount`) indicate a
//! logic error upstream and are not expected during normal play.

use thiserror::Error;

use crate::game_state::chess_types::{Color, GameStatus, Square};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Row or column outside `0..8`.
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    InvalidSquare { row: i32, col: i32 },

    /// A coordinate string such as `"e4"` could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),

    /// A move was requested from a square holding no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on the origin square belongs to the side not on move.
    #[error("the piece on {square} does not belong to {expected}, who is to move")]
    NotYourTurn { square: Square, expected: Color },

    /// The destination is not among the legal moves of the piece.
    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },

    /// The game already reached a terminal status.
    #[error("the game is over ({0})")]
    GameOver(GameStatus),

    /// A color does not have exactly one king on the board.
    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },

    /// The side not on move is in check, so its king could be captured.
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),

    /// An en passant target that no double step could have produced.
    #[error("{0} cannot be an en passant target in this position")]
    InvalidEnPassantTarget(Square),

    /// A textual board diagram was malformed.
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
