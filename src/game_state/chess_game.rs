//! The game state machine.
//!
//! `ChessGame` owns the authoritative `GameState` and is the only place it
//! changes. A move request is validated against the legal move set, executed
//! on a copy of the board, and the opponent's status (check, checkmate,
//! stalemate) is derived from the new position before the record is appended
//! and the turn passes.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{
    Board, ChessMove, Color, GameState, GameStatus, PieceKind, Square, SquareHighlight, SquareSet,
};
use crate::game_state::game_config::GameConfig;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    all_legal_moves, has_any_legal_move, is_legal_move, legal_moves,
};
use crate::utils::notation::standard_algebraic;

#[derive(Debug, Clone, Default)]
pub struct ChessGame {
    state: GameState,
    config: GameConfig,
}

impl ChessGame {
    /// A new game from the standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new_game(),
            config,
        }
    }

    /// Start from an arbitrary position. The status is computed immediately,
    /// so a position that is already mate or stalemate reports it.
    pub fn from_position(
        board: Board,
        to_move: Color,
        en_passant_target: Option<Square>,
        config: GameConfig,
    ) -> ChessResult<Self> {
        board.validate_kings()?;
        if is_king_in_check(&board, to_move.opposite()) {
            return Err(ChessError::OpponentInCheck(to_move.opposite()));
        }
        if let Some(target) = en_passant_target {
            validate_en_passant_target(&board, to_move, target)?;
        }

        let status = derive_status(&board, to_move, en_passant_target);
        Ok(Self {
            state: GameState {
                board,
                current_player: to_move,
                move_history: Vec::new(),
                status,
                en_passant_target,
            },
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    pub fn history(&self) -> &[ChessMove] {
        &self.state.move_history
    }

    /// Legal destinations for the piece on `square`; empty unless it belongs
    /// to the side to move.
    pub fn legal_moves(&self, square: Square) -> SquareSet {
        legal_moves(
            &self.state.board,
            square,
            self.state.current_player,
            self.state.en_passant_target,
        )
    }

    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        all_legal_moves(
            &self.state.board,
            self.state.current_player,
            self.state.en_passant_target,
        )
    }

    /// Apply the move if it is legal. Returns `false`, leaving the state
    /// untouched, otherwise.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Apply the move if it is legal and return its record.
    pub fn try_move(&mut self, from: Square, to: Square) -> ChessResult<&ChessMove> {
        let state = &self.state;
        if state.status.is_terminal() {
            return Err(ChessError::GameOver(state.status));
        }

        let mover = state.current_player;
        let piece = state
            .board
            .piece_at(from)
            .ok_or(ChessError::EmptySquare(from))?;
        if piece.color != mover {
            return Err(ChessError::NotYourTurn {
                square: from,
                expected: mover,
            });
        }
        if !is_legal_move(&state.board, from, to, mover, state.en_passant_target) {
            return Err(ChessError::IllegalMove { from, to });
        }

        let (board, effects) = apply_move(&state.board, from, to, mover, state.en_passant_target)?;
        let opponent = mover.opposite();
        let status = derive_status(&board, opponent, effects.next_en_passant_target);

        let mut record = ChessMove {
            from,
            to,
            piece: effects.moved_piece,
            captured_piece: effects.captured_piece,
            is_capture: effects.is_capture(),
            is_check: matches!(status, GameStatus::Check | GameStatus::Checkmate),
            is_checkmate: status == GameStatus::Checkmate,
            notation: String::new(),
            castling: effects.castling,
            en_passant: effects.en_passant,
            promotion: effects.promotion,
        };
        record.notation = standard_algebraic(&record, &self.config);

        let state = &mut self.state;
        state.board = board;
        state.current_player = opponent;
        state.en_passant_target = effects.next_en_passant_target;
        state.status = status;
        state.move_history.push(record);

        let index = state.move_history.len() - 1;
        Ok(&state.move_history[index])
    }

    /// Highlight for `square` given the presentation layer's current
    /// selection. Precedence: selected, valid target, king in check, normal.
    pub fn square_highlight(&self, square: Square, selected: Option<Square>) -> SquareHighlight {
        if selected == Some(square) {
            return SquareHighlight::Selected;
        }
        if let Some(from) = selected {
            if self.legal_moves(from).contains(square) {
                return SquareHighlight::Valid;
            }
        }
        if matches!(self.state.status, GameStatus::Check | GameStatus::Checkmate) {
            let king_in_check = self
                .state
                .board
                .piece_at(square)
                .is_some_and(|p| p.is(self.state.current_player, PieceKind::King));
            if king_in_check {
                return SquareHighlight::Check;
            }
        }
        SquareHighlight::Normal
    }

    /// Back to the starting position, keeping the configuration.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
    }
}

/// Status of `side` to move on `board`.
fn derive_status(board: &Board, side: Color, en_passant_target: Option<Square>) -> GameStatus {
    let in_check = is_king_in_check(board, side);
    let can_move = has_any_legal_move(board, side, en_passant_target);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}

/// The target must be the empty square directly behind a pawn of the side
/// that just moved, on the row that pawn crossed with its double step.
fn validate_en_passant_target(board: &Board, to_move: Color, target: Square) -> ChessResult<()> {
    let pusher = to_move.opposite();
    let crossed_row = pusher.pawn_start_row() as i32 + pusher.forward();
    let pawn_sq = target.offset(pusher.forward(), 0);
    let pawn_present = pawn_sq
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|p| p.is(pusher, PieceKind::Pawn));

    if target.row() as i32 == crossed_row && board.is_empty_at(target) && pawn_present {
        Ok(())
    } else {
        Err(ChessError::InvalidEnPassantTarget(target))
    }
}
