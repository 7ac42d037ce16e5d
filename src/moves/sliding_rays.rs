//! Ray tracing and table construction shared by the per-piece attack modules.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

/// Squares reached from `square` by stepping `(row_step, col_step)` until the
/// board edge or the first occupied square, which is included.
pub fn trace_ray(square: Square, row_step: i32, col_step: i32, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut current = square;

    while let Some(next) = current.offset(row_step, col_step) {
        let bit = next.bit();
        attacks |= bit;
        if occupancy & bit != 0 {
            break;
        }
        current = next;
    }

    attacks
}

/// Union of [`trace_ray`] over a direction set.
pub fn trace_rays(square: Square, directions: &[(i32, i32)], occupancy: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, &(dr, dc)| acc | trace_ray(square, dr, dc, occupancy))
}

/// Per-square mask of the fixed `(row, col)` offsets that stay on the board.
pub const fn offset_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < BOARD_SIZE * BOARD_SIZE {
        let row = (sq / BOARD_SIZE) as i32;
        let col = (sq % BOARD_SIZE) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let (dr, dc) = offsets[i];
            attacks |= set_if_valid(row + dr, col + dc);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> u64 {
    if !Square::is_in_bounds(row, col) {
        return 0;
    }

    let square = (row as usize) * BOARD_SIZE + (col as usize);
    1u64 << square
}
