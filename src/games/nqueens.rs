//! The n-queens puzzle.
//!
//! Queens start packed into the first row and redistribute by swapping
//! vertically within their column. Solved means no two queens share a row,
//! column, or diagonal.

use crate::core::{Board, Cell, ConfigError, MoveTemplate, Pos};
use crate::rules::RuleSet;

/// The queen's move template: swap one square up or down.
///
/// The center `s` is part of the original template; it swaps the queen with
/// her own square, producing a parent-equal successor the visited sets
/// discard.
#[must_use]
pub fn queen_template() -> MoveTemplate {
    MoveTemplate::from_tags(&[&["", "s", ""], &["", "s", ""], &["", "s", ""]])
        .expect("queen template is a valid 3x3 matrix")
}

/// The starting layout: one queen in every column of the first row.
pub fn initial_board(size: usize) -> Result<Board, ConfigError> {
    let mut board = Board::empty(size)?;
    for col in 0..size {
        board.set_cell(Pos::new(0, col), Cell::mobile_piece("Q", queen_template()));
    }
    Ok(board)
}

/// A board with queens at exactly the given positions.
pub fn board_with_queens(size: usize, queens: &[Pos]) -> Result<Board, ConfigError> {
    let mut board = Board::empty(size)?;
    for &pos in queens {
        board.set_cell(pos, Cell::mobile_piece("Q", queen_template()));
    }
    Ok(board)
}

/// Goal test for n-queens; the heuristic is uninformative (always 0).
#[derive(Clone, Copy, Debug, Default)]
pub struct NQueensRules;

impl NQueensRules {
    fn attack(a: Pos, b: Pos) -> bool {
        let row_delta = (a.row as isize - b.row as isize).abs();
        let col_delta = (a.col as isize - b.col as isize).abs();
        row_delta == 0 || col_delta == 0 || row_delta == col_delta
    }
}

impl RuleSet for NQueensRules {
    fn goal(&self, board: &Board) -> bool {
        let queens: Vec<Pos> = board.occupied_positions().collect();

        for (i, &a) in queens.iter().enumerate() {
            for &b in &queens[i + 1..] {
                if Self::attack(a, b) {
                    return false;
                }
            }
        }
        true
    }

    fn distance(&self, _board: &Board) -> u32 {
        0
    }
}
