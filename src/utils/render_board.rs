//! Unicode board diagrams.
//!
//! Rank 8 is printed on top, matching row 0 of `Board`. Each rank line is
//! framed by its rank digit on both sides and the file letters head and foot
//! the diagram.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Board, Piece, Square};

const FILE_LABELS: &str = "  a b c d e f g h";
const EMPTY_GLYPH: char = '·';

/// Glyphs indexed by `[Color::index()][PieceKind::index()]`.
const GLYPHS: [[char; 6]; 2] = [
    ['♙', '♘', '♗', '♖', '♕', '♔'],
    ['♟', '♞', '♝', '♜', '♛', '♚'],
];

#[inline]
fn glyph(piece: Piece) -> char {
    GLYPHS[piece.color.index()][piece.kind.index()]
}

fn rank_line(board: &Board, row: usize) -> String {
    let rank = BOARD_SIZE - row;
    let cells: Vec<String> = (0..BOARD_SIZE)
        .map(|col| {
            board
                .piece_at(Square::from_index(row * BOARD_SIZE + col))
                .map_or(EMPTY_GLYPH, glyph)
                .to_string()
        })
        .collect();
    format!("{rank} {} {rank}", cells.join(" "))
}

/// Multi-line diagram of `board`, ten lines without a trailing newline.
pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(BOARD_SIZE + 2);
    lines.push(FILE_LABELS.to_owned());
    lines.extend((0..BOARD_SIZE).map(|row| rank_line(board, row)));
    lines.push(FILE_LABELS.to_owned());
    lines.join("\n")
}
