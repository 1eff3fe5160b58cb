//! Core engine types: cells, move templates, boards, search nodes, RNG.
//!
//! Everything here is puzzle-agnostic. Concrete puzzles plug in through the
//! [`RuleSet`](crate::rules::RuleSet) trait and build their boards from
//! these types.

pub mod board;
pub mod cell;
pub mod error;
pub mod node;
pub mod rng;
pub mod template;

pub use board::{Board, Pos};
pub use cell::{Cell, MoveCode, Token};
pub use error::ConfigError;
pub use node::SearchNode;
pub use rng::ShuffleRng;
pub use template::{MoveTemplate, OverlayHit, OverlayHits};
