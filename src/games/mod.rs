//! Concrete puzzle rule providers.
//!
//! Each puzzle supplies a [`RuleSet`](crate::rules::RuleSet) implementation
//! plus board initializers and the move templates its pieces use. The
//! search core stays puzzle-agnostic.

pub mod npuzzle;
pub mod nqueens;

pub use npuzzle::NPuzzleRules;
pub use nqueens::NQueensRules;
