//! The 8x8 mailbox board.
//!
//! `Board` is a plain value: every edit returns a new board and leaves the
//! receiver untouched, so generation and legality checks can simulate moves
//! freely on copies. Occupancy masks are derived on demand for the
//! ray-tracing attack helpers in `moves`.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, BOARD_SIZE, KING_START_COL};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard initial position, white on rows 6 and 7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            for color in [Color::White, Color::Black] {
                board.squares[color.back_row() as usize][col] = Some(Piece::new(*kind, color));
                board.squares[color.pawn_start_row() as usize][col] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Build a board from eight rows of eight characters, row 0 (black's back
    /// rank) first. `.` marks an empty square, `PNBRQK` white pieces and
    /// `pnbrqk` black ones.
    ///
    /// Kings and rooks away from their home squares, and pawns away from their
    /// start row, are marked as already moved. Pawns on either back rank are
    /// rejected.
    pub fn from_diagram(rows: &[&str; BOARD_SIZE]) -> ChessResult<Self> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(ChessError::InvalidDiagram(format!(
                    "row {row} has {} squares, expected {BOARD_SIZE}",
                    chars.len()
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let (color, kind) = PieceKind::from_diagram_char(ch).ok_or_else(|| {
                    ChessError::InvalidDiagram(format!("unknown piece character {ch:?}"))
                })?;
                if kind == PieceKind::Pawn && (row == 0 || row == BOARD_SIZE - 1) {
                    return Err(ChessError::InvalidDiagram(format!(
                        "pawn {ch:?} on back rank row {row}"
                    )));
                }
                let mut piece = Piece::new(kind, color);
                piece.has_moved = !is_home_square(color, kind, row as u8, col as u8);
                board.squares[row][col] = Some(piece);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// In-bounds test for raw coordinates.
    #[inline]
    pub const fn is_in_bounds(row: i32, col: i32) -> bool {
        Square::is_in_bounds(row, col)
    }

    /// Copy of this board with `square` set to `piece`.
    #[must_use]
    pub fn with_piece(&self, square: Square, piece: Option<Piece>) -> Self {
        let mut next = *self;
        next.set(square, piece);
        next
    }

    #[must_use]
    pub fn place_piece(&self, square: Square, piece: Piece) -> Self {
        self.with_piece(square, Some(piece))
    }

    #[must_use]
    pub fn remove_piece(&self, square: Square) -> Self {
        self.with_piece(square, None)
    }

    /// In-place write, only for code that already owns a fresh copy.
    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Every occupied square with its piece, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(move |index| {
            let square = Square::from_index(index);
            self.piece_at(square).map(|piece| (square, piece))
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Mask of every occupied square.
    pub fn occupancy(&self) -> u64 {
        self.pieces().fold(0u64, |acc, (sq, _)| acc | sq.bit())
    }

    /// Mask of the squares holding `kind` pieces of `color`.
    pub fn mask_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces()
            .filter(|(_, piece)| piece.is(color, kind))
            .fold(0u64, |acc, (sq, _)| acc | sq.bit())
    }

    /// First king of `color` in index order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(color, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.mask_of(color, kind).count_ones() as usize
    }

    /// Checks the one-king-per-color invariant.
    pub fn validate_kings(&self) -> ChessResult<()> {
        for color in [Color::White, Color::Black] {
            let count = self.count(color, PieceKind::King);
            if count != 1 {
                return Err(ChessError::KingCount { color, count });
            }
        }
        Ok(())
    }
}

fn is_home_square(color: Color, kind: PieceKind, row: u8, col: u8) -> bool {
    match kind {
        PieceKind::Pawn => row == color.pawn_start_row(),
        PieceKind::King => row == color.back_row() && col == KING_START_COL,
        PieceKind::Rook => row == color.back_row() && (col == 0 || col == BOARD_SIZE as u8 - 1),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => {
            row == color.back_row() && BACK_RANK_LAYOUT[col as usize] == kind
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
