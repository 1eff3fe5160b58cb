//! Bidirectional search: two breadth-first waves in lockstep.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{Board, SearchNode};
use crate::rules::RuleSet;

use super::successors::successors;
use super::{Meeting, SearchOutcome};

/// One direction's frontier and visited map (board -> depth when admitted).
struct Wave {
    frontier: VecDeque<SearchNode>,
    visited: FxHashMap<Board, u32>,
}

impl Wave {
    fn seeded(node: SearchNode) -> Self {
        let mut visited = FxHashMap::default();
        visited.insert(node.board().clone(), node.cost());
        let mut frontier = VecDeque::new();
        frontier.push_back(node);
        Self { frontier, visited }
    }

    /// Pop one node; if the opposing wave has already admitted its board,
    /// report the meeting, else expand it breadth-first style.
    fn step(&mut self, other: &Wave, rules: &dyn RuleSet) -> Option<SearchOutcome> {
        let node = self.frontier.pop_front()?;

        if let Some(&other_depth) = other.visited.get(node.board()) {
            let meeting = Meeting {
                this_side_depth: node.cost(),
                other_side_depth: other_depth,
            };
            debug!(
                "bidirectional: waves met at depths {} + {}",
                meeting.this_side_depth, meeting.other_side_depth
            );
            // The reported cost is the meeting node's own path cost, a
            // lower-bound indicator rather than a certified shortest path.
            return Some(SearchOutcome::solved(node).with_meeting(meeting));
        }

        for child in successors(&node, rules) {
            if !self.visited.contains_key(child.board()) {
                self.visited.insert(child.board().clone(), child.cost());
                self.frontier.push_back(child);
            }
        }

        None
    }
}

/// Expand one wave from `initial` and one from `goal`, alternating one pop
/// per side, until a popped board is found in the other side's visited map
/// or both frontiers drain.
#[must_use]
pub fn bidirectional(rules: &dyn RuleSet, initial: SearchNode, goal: SearchNode) -> SearchOutcome {
    let mut forward = Wave::seeded(initial);
    let mut backward = Wave::seeded(goal);

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        if let Some(outcome) = forward.step(&backward, rules) {
            return outcome;
        }
        if let Some(outcome) = backward.step(&forward, rules) {
            return outcome;
        }
    }

    debug!(
        "bidirectional: frontiers exhausted ({} forward / {} backward states)",
        forward.visited.len(),
        backward.visited.len()
    );
    SearchOutcome::not_found()
}
