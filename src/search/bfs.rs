//! Breadth-first search.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;

use crate::core::{Board, SearchNode};
use crate::rules::RuleSet;

use super::successors::successors;
use super::SearchOutcome;

/// Explore outward from `initial` in non-decreasing cost order.
///
/// The frontier is a FIFO queue; boards are marked visited when enqueued,
/// so no configuration is ever queued twice. Because every edge costs 1,
/// the first goal popped is a shortest solution.
#[must_use]
pub fn bfs(rules: &dyn RuleSet, initial: SearchNode) -> SearchOutcome {
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    let mut frontier: VecDeque<SearchNode> = VecDeque::new();

    visited.insert(initial.board().clone());
    frontier.push_back(initial);

    while let Some(node) = frontier.pop_front() {
        if rules.goal(node.board()) {
            debug!("bfs: goal at cost {}", node.cost());
            return SearchOutcome::solved(node);
        }

        for child in successors(&node, rules) {
            if visited.insert(child.board().clone()) {
                frontier.push_back(child);
            }
        }
    }

    debug!("bfs: frontier exhausted, {} states visited", visited.len());
    SearchOutcome::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::npuzzle::{solved_board, NPuzzleRules};

    #[test]
    fn test_bfs_on_solved_root_is_cost_zero() {
        let root = SearchNode::root(solved_board(3).unwrap(), &NPuzzleRules);
        let outcome = bfs(&NPuzzleRules, root);

        assert!(outcome.found());
        assert_eq!(outcome.cost, Some(0));
    }

    #[test]
    fn test_bfs_exhausts_unsolvable_component() {
        // Transposing two tiles flips solvability parity; BFS must sweep
        // the whole 12-state component and come back empty-handed.
        let mut board = solved_board(2).unwrap();
        board.swap_cells(
            crate::core::Pos::new(0, 0),
            crate::core::Pos::new(0, 1),
        );

        let root = SearchNode::root(board, &NPuzzleRules);
        let outcome = bfs(&NPuzzleRules, root);

        assert!(!outcome.found());
        assert_eq!(outcome.cost, None);
    }
}
