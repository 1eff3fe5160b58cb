//! Traversal strategies over the implicit board graph.
//!
//! All four strategies consume the successor generator and a
//! [`RuleSet`](crate::rules::RuleSet) goal test, track visited boards by
//! structural identity, and report a [`SearchOutcome`]. They never mutate
//! their input nodes. Runs are single-threaded and run to completion; a
//! caller wanting a timeout wraps the call externally.
//!
//! | Strategy | Frontier | Visited marking | Shortest path? |
//! |----------|----------|-----------------|----------------|
//! | [`bfs`]  | FIFO     | at enqueue      | yes            |
//! | [`dfs`]  | LIFO     | at pop (late)   | no             |
//! | [`ids`]  | LIFO, depth-bounded, restarted | at pop, per iteration | yes |
//! | [`bidirectional`] | two FIFOs in lockstep | at enqueue, per side | meeting indicator only |

pub mod bfs;
pub mod bidirectional;
pub mod clearance;
pub mod dfs;
pub mod ids;
pub mod successors;

pub use bfs::bfs;
pub use bidirectional::bidirectional;
pub use clearance::is_clear;
pub use dfs::dfs;
pub use ids::ids;
pub use successors::{successor_boards, successors};

use serde::{Deserialize, Serialize};

use crate::core::{Board, ConfigError, SearchNode};
use crate::rules::RuleSet;

/// Which traversal strategy to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    Bidirectional,
}

impl Strategy {
    /// Parse a strategy name as used by the sweep harness and CSV output.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bfs" => Some(Self::BreadthFirst),
            "dfs" => Some(Self::DepthFirst),
            "ids" => Some(Self::IterativeDeepening),
            "bds" => Some(Self::Bidirectional),
            _ => None,
        }
    }

    /// Short name for CSV rows and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::IterativeDeepening => "ids",
            Self::Bidirectional => "bds",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the two waves of a bidirectional run met.
///
/// `this_side_depth` belongs to the wave that popped the meeting node,
/// `other_side_depth` to the wave that had already admitted its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub this_side_depth: u32,
    pub other_side_depth: u32,
}

impl Meeting {
    /// Sum of both sides' depths at the meeting point.
    #[must_use]
    pub fn combined_depth(&self) -> u32 {
        self.this_side_depth + self.other_side_depth
    }
}

/// What a strategy run produced.
///
/// "Not found" is a normal outcome, not an error: `cost` and `solution`
/// are simply absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Cost of the solution node, when one was found. For bidirectional
    /// runs this is the meeting node's own one-sided path cost.
    pub cost: Option<u32>,

    /// The solved (or meeting) board, for rendering.
    pub solution: Option<Board>,

    /// Meeting-point depths; bidirectional runs only.
    pub meeting: Option<Meeting>,
}

impl SearchOutcome {
    /// A successful outcome for `node`.
    #[must_use]
    pub fn solved(node: SearchNode) -> Self {
        Self {
            cost: Some(node.cost()),
            solution: Some(node.into_board()),
            meeting: None,
        }
    }

    /// A failed outcome: the frontier(s) drained without a goal.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            cost: None,
            solution: None,
            meeting: None,
        }
    }

    /// Attach bidirectional meeting instrumentation.
    #[must_use]
    pub fn with_meeting(mut self, meeting: Meeting) -> Self {
        self.meeting = Some(meeting);
        self
    }

    /// Whether a goal was found.
    #[must_use]
    pub fn found(&self) -> bool {
        self.cost.is_some()
    }
}

/// Run `strategy` from `initial`.
///
/// `goal` is required by [`Strategy::Bidirectional`] (it seeds the backward
/// wave) and ignored by the other strategies; invoking bidirectional search
/// without one is a configuration error.
pub fn run(
    strategy: Strategy,
    rules: &dyn RuleSet,
    initial: SearchNode,
    goal: Option<SearchNode>,
) -> Result<SearchOutcome, ConfigError> {
    match strategy {
        Strategy::BreadthFirst => Ok(bfs(rules, initial)),
        Strategy::DepthFirst => Ok(dfs(rules, initial)),
        Strategy::IterativeDeepening => Ok(ids(rules, initial)),
        Strategy::Bidirectional => {
            let goal = goal.ok_or(ConfigError::MissingGoalBoard)?;
            Ok(bidirectional(rules, initial, goal))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::npuzzle::{solved_board, NPuzzleRules};

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in [
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::IterativeDeepening,
            Strategy::Bidirectional,
        ] {
            assert_eq!(Strategy::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(Strategy::from_name("astar"), None);
    }

    #[test]
    fn test_run_dispatches_all_strategies() {
        let board = solved_board(3).unwrap();

        for strategy in [
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::IterativeDeepening,
        ] {
            let root = SearchNode::root(board.clone(), &NPuzzleRules);
            let outcome = run(strategy, &NPuzzleRules, root, None).unwrap();
            assert_eq!(outcome.cost, Some(0), "{strategy} should report cost 0");
        }
    }

    #[test]
    fn test_bidirectional_requires_goal_node() {
        let root = SearchNode::root(solved_board(3).unwrap(), &NPuzzleRules);
        let result = run(Strategy::Bidirectional, &NPuzzleRules, root, None);

        assert_eq!(result.unwrap_err(), ConfigError::MissingGoalBoard);
    }
}
