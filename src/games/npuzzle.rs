//! The n-puzzle (8-puzzle, 15-puzzle, ...).
//!
//! Tiles `1..n²-1` slide within an `n × n` frame; the blank square is the
//! mobile piece, swapping with an orthogonal neighbor each move. Solved
//! means tiles read in row-major order with the blank last.

use crate::core::{Board, Cell, ConfigError, MoveTemplate, Pos, ShuffleRng};
use crate::rules::RuleSet;

/// The blank's move template: swap with any orthogonal neighbor.
#[must_use]
pub fn blank_template() -> MoveTemplate {
    MoveTemplate::from_tags(&[&["", "s", ""], &["s", "", "s"], &["", "s", ""]])
        .expect("blank template is a valid 3x3 matrix")
}

/// The solved layout: `1 2 3 / 4 5 6 / 7 8 _` for size 3.
pub fn solved_board(size: usize) -> Result<Board, ConfigError> {
    let mut board = Board::empty(size)?;
    let total = size * size;

    let mut value = 1;
    for pos in board.positions().collect::<Vec<_>>() {
        let cell = if value < total {
            Cell::piece(value as u32)
        } else {
            Cell::mobile_blank(blank_template())
        };
        board.set_cell(pos, cell);
        value += 1;
    }

    Ok(board)
}

/// A shuffled starting board.
///
/// Shuffling swaps `2·n²` random square pairs, matching the original
/// initializer. Pair swaps ignore slide legality, so roughly half of all
/// shuffles land in the unsolvable parity class; searches on those exhaust
/// their component and report not-found.
pub fn shuffled_board(size: usize, rng: &mut ShuffleRng) -> Result<Board, ConfigError> {
    let mut board = solved_board(size)?;

    for _ in 0..(2 * size * size) {
        let a = Pos::new(rng.index(size), rng.index(size));
        let b = Pos::new(rng.index(size), rng.index(size));
        board.swap_cells(a, b);
    }

    Ok(board)
}

/// Goal test and mismatch-count heuristic for the n-puzzle.
#[derive(Clone, Copy, Debug, Default)]
pub struct NPuzzleRules;

impl RuleSet for NPuzzleRules {
    fn goal(&self, board: &Board) -> bool {
        let total = (board.size() * board.size()) as u32;

        let mut expected = 1u32;
        for pos in board.positions() {
            match &board.cell(pos).identity {
                Some(token) if token.as_number() == Some(expected) => expected += 1,
                None if expected == total => return true,
                _ => return false,
            }
        }
        // Only reachable on boards without a blank.
        expected == total + 1
    }

    fn distance(&self, board: &Board) -> u32 {
        let total = (board.size() * board.size()) as u32;

        let mut mismatches = 0;
        let mut expected = 1u32;
        for pos in board.positions() {
            match &board.cell(pos).identity {
                Some(token) => {
                    if token.as_number().is_some_and(|v| v != expected) {
                        mismatches += 1;
                    }
                }
                None => {
                    if expected != total {
                        mismatches += 1;
                    }
                }
            }
            expected += 1;
        }
        mismatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_board_layout() {
        let board = solved_board(3).unwrap();

        assert_eq!(
            board.cell(Pos::new(0, 0)).identity.as_ref().unwrap().as_str(),
            "1"
        );
        assert_eq!(
            board.cell(Pos::new(2, 1)).identity.as_ref().unwrap().as_str(),
            "8"
        );
        assert!(board.is_empty_at(Pos::new(2, 2)));
        assert!(board.cell(Pos::new(2, 2)).is_mobile());
    }

    #[test]
    fn test_goal_accepts_solved() {
        assert!(NPuzzleRules.goal(&solved_board(3).unwrap()));
        assert!(NPuzzleRules.goal(&solved_board(4).unwrap()));
    }

    #[test]
    fn test_goal_rejects_one_slide_away() {
        let board = solved_board(3).unwrap().with_swap(Pos::new(2, 2), Pos::new(2, 1));
        assert!(!NPuzzleRules.goal(&board));
    }

    #[test]
    fn test_goal_rejects_blank_elsewhere() {
        let board = solved_board(3).unwrap().with_swap(Pos::new(0, 0), Pos::new(2, 2));
        assert!(!NPuzzleRules.goal(&board));
    }

    #[test]
    fn test_distance_zero_when_solved() {
        assert_eq!(NPuzzleRules.distance(&solved_board(3).unwrap()), 0);
    }

    #[test]
    fn test_distance_counts_both_ends_of_a_swap() {
        // Swapping the blank with tile 8 misplaces both squares.
        let board = solved_board(3).unwrap().with_swap(Pos::new(2, 2), Pos::new(2, 1));
        assert_eq!(NPuzzleRules.distance(&board), 2);
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let a = shuffled_board(4, &mut ShuffleRng::new(7)).unwrap();
        let b = shuffled_board(4, &mut ShuffleRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_preserves_tile_set() {
        let board = shuffled_board(3, &mut ShuffleRng::new(1)).unwrap();

        let mut tiles: Vec<u32> = board
            .positions()
            .filter_map(|p| board.cell(p).identity.as_ref().and_then(|t| t.as_number()))
            .collect();
        tiles.sort_unstable();
        assert_eq!(tiles, (1..=8).collect::<Vec<_>>());

        // Exactly one blank, and it kept its template through the swaps.
        let blanks: Vec<Pos> = board.positions().filter(|&p| board.is_empty_at(p)).collect();
        assert_eq!(blanks.len(), 1);
        assert!(board.cell(blanks[0]).is_mobile());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(solved_board(0).is_err());
        assert!(shuffled_board(0, &mut ShuffleRng::new(0)).is_err());
    }
}
