//! Pawn capture patterns. A pawn attacks the two diagonal squares one row
//! forward; the straight advance is never an attack.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding_rays::offset_table;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = offset_table(&[(-1, -1), (-1, 1)]);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = offset_table(&[(1, -1), (1, 1)]);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("square should parse")
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        assert_eq!(
            pawn_attacks(Color::White, sq("e2")),
            sq("d3").bit() | sq("f3").bit()
        );
    }

    #[test]
    fn black_pawn_attacks_from_a7() {
        assert_eq!(pawn_attacks(Color::Black, sq("a7")), sq("b6").bit());
    }
}
