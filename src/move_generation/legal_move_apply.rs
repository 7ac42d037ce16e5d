//! Move execution.
//!
//! Castling, en passant and promotion are implied by move geometry: a king
//! moving two columns castles, a pawn landing on the en passant target
//! captures en passant, and a pawn reaching its promotion row becomes a queen.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, CastlingSide, Color, Piece, PieceKind, Square};

/// Side effects of an applied move, used to build the move record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffects {
    /// Snapshot of the moving piece before the move.
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub castling: Option<CastlingSide>,
    pub en_passant: bool,
    pub promotion: Option<PieceKind>,
    /// En passant target for the next ply.
    pub next_en_passant_target: Option<Square>,
}

impl MoveEffects {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

/// Apply `from -> to` for `mover` and return the new board with the move's
/// effects. The move is not checked for legality; the caller validates it.
pub fn apply_move(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
    en_passant_target: Option<Square>,
) -> ChessResult<(Board, MoveEffects)> {
    let moved_piece = board
        .piece_at(from)
        .ok_or(ChessError::EmptySquare(from))?;
    if moved_piece.color != mover {
        return Err(ChessError::NotYourTurn {
            square: from,
            expected: mover,
        });
    }

    let mut next = *board;
    let mut captured_piece = board.piece_at(to);
    let mut castling = None;
    let mut en_passant = false;
    let mut promotion = None;

    let col_delta = to.col() as i32 - from.col() as i32;
    let row_delta = to.row() as i32 - from.row() as i32;

    match moved_piece.kind {
        PieceKind::King if col_delta.abs() == 2 => {
            let side = if col_delta > 0 {
                CastlingSide::Kingside
            } else {
                CastlingSide::Queenside
            };
            let rook_from = from.with_col(side.rook_col());
            let rook_to = from.with_col((from.col() + to.col()) / 2);
            let rook = next.piece_at(rook_from);
            next.set(rook_from, None);
            next.set(rook_to, rook.map(Piece::moved));
            castling = Some(side);
        }
        PieceKind::Pawn if en_passant_target == Some(to) && col_delta != 0 => {
            // The captured pawn sits beside the origin, not on the target.
            let victim_sq = from.with_col(to.col());
            captured_piece = next.piece_at(victim_sq);
            next.set(victim_sq, None);
            en_passant = true;
        }
        _ => {}
    }

    let mut landed = moved_piece.moved();
    if moved_piece.kind == PieceKind::Pawn && to.row() == mover.promotion_row() {
        landed.kind = PieceKind::Queen;
        promotion = Some(PieceKind::Queen);
    }

    next.set(from, None);
    next.set(to, Some(landed));

    let next_en_passant_target = if moved_piece.kind == PieceKind::Pawn && row_delta.abs() == 2 {
        from.offset(row_delta / 2, 0)
    } else {
        None
    };

    Ok((
        next,
        MoveEffects {
            moved_piece,
            captured_piece,
            castling,
            en_passant,
            promotion,
            next_en_passant_target,
        },
    ))
}
