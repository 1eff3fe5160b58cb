//! Path clearance for sliding moves.
//!
//! A sliding move is legal only along a shared row, column, or diagonal,
//! and only if every strictly-intermediate square is empty. The origin and
//! target squares themselves are not examined here; move codes that care
//! about target emptiness test it separately.

use crate::core::{Board, Pos};

/// Whether a slide from `from` to `to` is geometrically legal and clear.
///
/// Returns `false` outright when the two positions share no row, column,
/// or diagonal (this is a legality guard, not just an obstruction check).
/// Otherwise walks unit steps from `from` toward `to`, failing on the first
/// occupied intermediate square. `is_clear(board, p, p)` is vacuously true:
/// there are no intermediate squares to check.
#[must_use]
pub fn is_clear(board: &Board, from: Pos, to: Pos) -> bool {
    let row_delta = to.row as isize - from.row as isize;
    let col_delta = to.col as isize - from.col as isize;

    if row_delta != 0 && col_delta != 0 && row_delta.abs() != col_delta.abs() {
        return false;
    }

    let row_step = row_delta.signum();
    let col_step = col_delta.signum();

    let mut row = from.row as isize + row_step;
    let mut col = from.col as isize + col_step;
    while (row, col) != (to.row as isize, to.col as isize) {
        if !board.is_empty_at(Pos::new(row as usize, col as usize)) {
            return false;
        }
        row += row_step;
        col += col_step;
    }

    true
}
