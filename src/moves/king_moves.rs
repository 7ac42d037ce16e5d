//! King attack table: the eight adjacent squares.

use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::Square;
use crate::moves::sliding_rays::offset_table;

pub const KING_ATTACKS: [u64; 64] = offset_table(&KING_OFFSETS);

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}
