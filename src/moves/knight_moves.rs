//! Knight attack table. Knights jump, so the pattern ignores occupancy.

use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Square;
use crate::moves::sliding_rays::offset_table;

pub const KNIGHT_ATTACKS: [u64; 64] = offset_table(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}
