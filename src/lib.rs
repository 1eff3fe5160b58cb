//! # grid-search
//!
//! A state-space search engine for grid puzzles.
//!
//! Boards are square grids of cells; each piece carries a small move
//! template describing its legal relative destinations. Successor
//! generation overlays templates onto the board, applies path-clearance and
//! swap/replace/move semantics, and yields every legal next configuration.
//! Four uninformed strategies explore that implicit graph: breadth-first,
//! depth-first, iterative-deepening, and bidirectional.
//!
//! ## Design Principles
//!
//! 1. **Puzzle-Agnostic Core**: the engine knows moves and boards, not
//!    puzzles. Variants plug in through the [`RuleSet`](rules::RuleSet)
//!    goal/heuristic trait and supply their own boards.
//!
//! 2. **Structural Identity**: boards hash and compare by their identity
//!    layout alone. Visited sets therefore treat the state space as a
//!    graph, never expanding the same configuration twice per strategy's
//!    marking rules.
//!
//! 3. **Copy-on-Write States**: successor application clones the board and
//!    applies one move. Grids are persistent (`im`) structures, so a clone
//!    is structural sharing, not a deep copy.
//!
//! ## Modules
//!
//! - `core`: cells, move codes/templates, boards, search nodes, RNG
//! - `rules`: the pluggable goal-test + heuristic trait
//! - `search`: successor generation, path clearance, the four strategies
//! - `games`: concrete rule providers (n-puzzle, n-queens)
//! - `render`: fixed-width board rendering
//!
//! ## Example
//!
//! ```
//! use grid_search::core::SearchNode;
//! use grid_search::games::npuzzle::{solved_board, NPuzzleRules};
//! use grid_search::search::{run, Strategy};
//!
//! let board = solved_board(3)?;
//! let root = SearchNode::root(board, &NPuzzleRules);
//! let outcome = run(Strategy::BreadthFirst, &NPuzzleRules, root, None)?;
//!
//! assert_eq!(outcome.cost, Some(0));
//! # Ok::<(), grid_search::core::ConfigError>(())
//! ```

pub mod core;
pub mod games;
pub mod render;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, ConfigError, MoveCode, MoveTemplate, Pos, SearchNode, ShuffleRng, Token,
};
pub use crate::render::render_board;
pub use crate::rules::RuleSet;
pub use crate::search::{
    bfs, bidirectional, dfs, ids, is_clear, run, successor_boards, successors, Meeting,
    SearchOutcome, Strategy,
};
