//! Rule providers: the pluggable goal test and heuristic for a puzzle.
//!
//! The search core knows nothing about n-puzzles or n-queens. A puzzle
//! variant implements [`RuleSet`] and supplies its own boards; the engine
//! only ever asks "is this a goal?" and "how far does this look?".
//!
//! ## Implementation Notes
//!
//! - Both methods must be pure: no shared mutable state between calls.
//! - `distance` is a heuristic indicator cached on each
//!   [`SearchNode`](crate::core::SearchNode); the uninformed strategies in
//!   this crate never order by it, so a constant `0` is a valid
//!   implementation.

use crate::core::Board;

/// Goal test and heuristic distance for one puzzle variant.
pub trait RuleSet {
    /// Whether `board` is a goal configuration.
    fn goal(&self, board: &Board) -> bool;

    /// Heuristic distance from `board` to a goal (0 means "looks solved").
    fn distance(&self, board: &Board) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell};

    struct AlwaysSolved;

    impl RuleSet for AlwaysSolved {
        fn goal(&self, _board: &Board) -> bool {
            true
        }
        fn distance(&self, _board: &Board) -> u32 {
            0
        }
    }

    #[test]
    fn test_rule_set_is_object_safe() {
        let rules: Box<dyn RuleSet> = Box::new(AlwaysSolved);
        let board = Board::from_rows(vec![vec![Cell::empty()]]).unwrap();

        assert!(rules.goal(&board));
        assert_eq!(rules.distance(&board), 0);
    }
}
