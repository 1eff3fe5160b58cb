//! Search nodes: immutable board snapshots with path cost and heuristic.
//!
//! A node is a board plus the accumulated path cost from the start and the
//! rule set's heuristic distance, computed once at construction and cached.
//! Node equality and hashing delegate to the board, so two nodes reaching
//! the same configuration by different paths are interchangeable for
//! visited-set purposes.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::rules::RuleSet;

/// An immutable search node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    board: Board,
    cost: u32,
    distance: u32,
}

impl SearchNode {
    /// Wrap a starting board as a zero-cost node.
    #[must_use]
    pub fn root(board: Board, rules: &dyn RuleSet) -> Self {
        let distance = rules.distance(&board);
        Self {
            board,
            cost: 0,
            distance,
        }
    }

    /// Wrap a successor board one move deeper than this node.
    #[must_use]
    pub fn child(&self, board: Board, rules: &dyn RuleSet) -> Self {
        let distance = rules.distance(&board);
        Self {
            board,
            cost: self.cost + 1,
            distance,
        }
    }

    /// The board configuration this node snapshots.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Path length from the start node.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Cached heuristic distance from the rule set.
    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Consume the node, yielding its board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}

// Board-only identity: cost and distance are path artifacts, not state.
impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}
