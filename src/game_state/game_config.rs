//! Behavior switches for a `ChessGame`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Append `+`/`#` to `O-O`/`O-O-O` when castling gives check or mate.
    /// Off by default: castling notation carries no suffix.
    pub annotate_castling_checks: bool,
}
