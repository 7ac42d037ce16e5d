use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::Square;
use crate::moves::sliding_rays::trace_rays;

/// Diagonal rays from `square`, each stopping at (and including) the first
/// occupied square.
#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    trace_rays(square, &BISHOP_DIRECTIONS, occupancy)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::Square;

    fn sq(name: &str) -> Square {
        name.parse().expect("square should parse")
    }

    #[test]
    fn bishop_on_d4_sees_thirteen_squares() {
        assert_eq!(bishop_attacks(sq("d4"), 0).count_ones(), 13);
    }

    #[test]
    fn bishop_blocker_stops_diagonal() {
        let attacks = bishop_attacks(sq("c1"), sq("e3").bit());
        assert_ne!(attacks & sq("e3").bit(), 0);
        assert_eq!(attacks & sq("f4").bit(), 0);
        assert_ne!(attacks & sq("a3").bit(), 0);
    }
}
