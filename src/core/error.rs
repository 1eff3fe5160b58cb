//! Configuration errors.
//!
//! These cover construction-time precondition violations only. A search
//! that finds no goal is a normal outcome, not an error; malformed move
//! codes inside templates are silently treated as "no move" at parse time.

use std::fmt;

/// A board or template was constructed in a shape the engine cannot search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero-cell board.
    EmptyBoard,
    /// Board rows of unequal length.
    NonSquareBoard { rows: usize, cols: usize },
    /// A zero-sized move template.
    EmptyTemplate,
    /// A move template with an even dimension (no unique center cell).
    EvenTemplate { dim: usize },
    /// A move template whose rows do not match its height.
    NonSquareTemplate { rows: usize, cols: usize },
    /// Bidirectional search invoked without a goal board.
    MissingGoalBoard,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "board has no cells"),
            ConfigError::NonSquareBoard { rows, cols } => {
                write!(f, "board is not square: {rows} rows but a row of {cols} cells")
            }
            ConfigError::EmptyTemplate => write!(f, "move template has no cells"),
            ConfigError::EvenTemplate { dim } => {
                write!(f, "move template dimension {dim} is even; no unique center cell")
            }
            ConfigError::NonSquareTemplate { rows, cols } => {
                write!(
                    f,
                    "move template is not square: {rows} rows but a row of {cols} cells"
                )
            }
            ConfigError::MissingGoalBoard => {
                write!(f, "bidirectional search requires a goal board")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
