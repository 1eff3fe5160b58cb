//! Iterative-deepening search.

use log::debug;
use rustc_hash::FxHashSet;

use crate::core::{Board, SearchNode};
use crate::rules::RuleSet;

use super::successors::successors;
use super::SearchOutcome;

/// Repeated depth-limited depth-first search with a rising depth bound.
///
/// Each outer iteration starts from scratch: fresh stack, fresh visited
/// set, bound one deeper than the last. Nodes popped at exactly the bound
/// are goal-tested but never expanded.
///
/// The exhaustion accumulator starts true each iteration and flips false
/// the moment any not-yet-visited child is pushed below the bound; an
/// iteration that discovers no new children at all proves there is nothing
/// left beneath any bound, and the search stops with failure instead of
/// deepening forever.
#[must_use]
pub fn ids(rules: &dyn RuleSet, initial: SearchNode) -> SearchOutcome {
    let mut target_depth: u32 = 1;

    loop {
        let mut visited: FxHashSet<Board> = FxHashSet::default();
        let mut stack: Vec<SearchNode> = vec![initial.clone()];
        let mut visited_all_available = true;

        while let Some(node) = stack.pop() {
            if rules.goal(node.board()) {
                debug!("ids: goal at cost {} (bound {})", node.cost(), target_depth);
                return SearchOutcome::solved(node);
            }

            visited.insert(node.board().clone());

            if node.cost() == target_depth {
                // Depth bound reached: goal-tested above, not expanded.
                continue;
            }

            for child in successors(&node, rules) {
                if !visited.contains(child.board()) {
                    visited_all_available = false;
                    stack.push(child);
                }
            }
        }

        if visited_all_available {
            debug!(
                "ids: no new children below bound {}, state space exhausted",
                target_depth
            );
            return SearchOutcome::not_found();
        }

        target_depth += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Pos};
    use crate::games::npuzzle::{solved_board, NPuzzleRules};

    #[test]
    fn test_ids_on_solved_root_is_cost_zero() {
        let root = SearchNode::root(solved_board(3).unwrap(), &NPuzzleRules);
        let outcome = ids(&NPuzzleRules, root);

        assert!(outcome.found());
        assert_eq!(outcome.cost, Some(0));
    }

    #[test]
    fn test_ids_finds_minimal_cost() {
        // One slide from solved: minimal cost 1.
        let board = solved_board(3).unwrap().with_swap(Pos::new(2, 2), Pos::new(2, 1));
        let root = SearchNode::root(board, &NPuzzleRules);
        let outcome = ids(&NPuzzleRules, root);

        assert_eq!(outcome.cost, Some(1));
    }

    #[test]
    fn test_ids_stops_when_root_has_no_successors() {
        // All pieces immobile: the first iteration pushes nothing and the
        // exhaustion flag survives, so IDS reports failure immediately.
        let board = crate::core::Board::from_rows(vec![
            vec![Cell::piece("a"), Cell::piece("b")],
            vec![Cell::piece("c"), Cell::piece("d")],
        ])
        .unwrap();

        let root = SearchNode::root(board, &NPuzzleRules);
        let outcome = ids(&NPuzzleRules, root);

        assert!(!outcome.found());
    }
}
