use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn queen_on_d4_sees_twenty_seven_squares() {
        let d4: Square = "d4".parse().expect("d4 should parse");
        assert_eq!(queen_attacks(d4, 0).count_ones(), 27);
    }
}
