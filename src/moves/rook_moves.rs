use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::Square;
use crate::moves::sliding_rays::trace_rays;

/// Orthogonal rays from `square`, each stopping at (and including) the first
/// occupied square.
#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    trace_rays(square, &ROOK_DIRECTIONS, occupancy)
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::chess_types::Square;

    fn sq(name: &str) -> Square {
        name.parse().expect("square should parse")
    }

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        assert_eq!(rook_attacks(sq("d4"), 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let attacks = rook_attacks(sq("a1"), sq("a4").bit());
        assert_ne!(attacks & sq("a4").bit(), 0);
        assert_eq!(attacks & sq("a5").bit(), 0);
        assert_ne!(attacks & sq("h1").bit(), 0);
    }
}
