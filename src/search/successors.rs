//! Successor generation: every legal next board from a given board.
//!
//! For each template-carrying cell in row-major scan order, the piece's
//! template is overlaid onto the board and each projected move code is
//! applied according to its semantics. Every legal application clones the
//! board, applies that single move, and wraps the result as a child node
//! one cost step deeper.
//!
//! The enumeration order (outer loop over board cells row-major, inner loop
//! over projected codes row-major) is deterministic and part of the
//! contract: it fixes DFS and IDS exploration order.

use log::trace;

use crate::core::{Board, MoveCode, Pos, SearchNode};
use crate::rules::RuleSet;

use super::clearance::is_clear;

/// Enumerate all successor nodes of `node`, in deterministic order.
#[must_use]
pub fn successors(node: &SearchNode, rules: &dyn RuleSet) -> Vec<SearchNode> {
    let mut children = Vec::new();

    for board in successor_boards(node.board()) {
        children.push(node.child(board, rules));
    }

    trace!(
        "expanded node at cost {}: {} successors",
        node.cost(),
        children.len()
    );
    children
}

/// Enumerate all successor boards of `board`, in deterministic order.
///
/// Exposed separately so benches and tests can exercise move generation
/// without a rule set.
#[must_use]
pub fn successor_boards(board: &Board) -> Vec<Board> {
    let mut boards = Vec::new();

    for origin in board.positions() {
        let Some(template) = board.cell(origin).template.clone() else {
            continue;
        };

        for (target, code) in template.overlay(board.size(), origin.row, origin.col) {
            if let Some(next) = apply_move(board, origin, target, code) {
                boards.push(next);
            }
        }
    }

    boards
}

/// Apply one projected move code, if its conditions hold.
///
/// A swap with the piece's own square is legal and yields a board equal to
/// the parent; visited sets are what keep such states from being explored
/// twice.
fn apply_move(board: &Board, origin: Pos, target: Pos, code: MoveCode) -> Option<Board> {
    if code.needs_clear_path() && !is_clear(board, origin, target) {
        return None;
    }
    if code.needs_empty_target() && !board.is_empty_at(target) {
        return None;
    }

    match code {
        MoveCode::Swap | MoveCode::SwapClear => Some(board.with_swap(origin, target)),
        MoveCode::Replace | MoveCode::ReplaceClear | MoveCode::MoveClear | MoveCode::MoveFree => {
            Some(board.with_displacement(origin, target))
        }
    }
}
