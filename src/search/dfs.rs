//! Depth-first search.

use log::debug;
use rustc_hash::FxHashSet;

use crate::core::{Board, SearchNode};
use crate::rules::RuleSet;

use super::successors::successors;
use super::SearchOutcome;

/// Explore from `initial` with a LIFO stack.
///
/// Marking is late: a board joins the visited set only when popped without
/// being the goal, so the same configuration can sit on the stack more than
/// once before its first pop. Pushes are filtered against already-popped
/// boards only. No shortest-path guarantee; termination is bounded by the
/// finite state space and visited-set pruning.
#[must_use]
pub fn dfs(rules: &dyn RuleSet, initial: SearchNode) -> SearchOutcome {
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    let mut stack: Vec<SearchNode> = vec![initial];

    while let Some(node) = stack.pop() {
        if rules.goal(node.board()) {
            debug!("dfs: goal at cost {}", node.cost());
            return SearchOutcome::solved(node);
        }

        visited.insert(node.board().clone());

        for child in successors(&node, rules) {
            if !visited.contains(child.board()) {
                stack.push(child);
            }
        }
    }

    debug!("dfs: stack exhausted, {} states visited", visited.len());
    SearchOutcome::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pos;
    use crate::games::npuzzle::{solved_board, NPuzzleRules};

    #[test]
    fn test_dfs_on_solved_root_is_cost_zero() {
        let root = SearchNode::root(solved_board(3).unwrap(), &NPuzzleRules);
        let outcome = dfs(&NPuzzleRules, root);

        assert!(outcome.found());
        assert_eq!(outcome.cost, Some(0));
    }

    #[test]
    fn test_dfs_solves_small_component() {
        // 2x2 puzzle: the solvable component has 12 states, so DFS always
        // terminates and finds some solution, not necessarily shortest.
        let board = solved_board(2).unwrap().with_swap(Pos::new(1, 1), Pos::new(1, 0));

        let root = SearchNode::root(board, &NPuzzleRules);
        let outcome = dfs(&NPuzzleRules, root);

        assert!(outcome.found());
        assert!(outcome.cost.unwrap() >= 1);
    }

    #[test]
    fn test_dfs_exhausts_unsolvable_component() {
        let board = solved_board(2).unwrap().with_swap(Pos::new(0, 0), Pos::new(0, 1));

        let root = SearchNode::root(board, &NPuzzleRules);
        let outcome = dfs(&NPuzzleRules, root);

        assert!(!outcome.found());
    }
}
