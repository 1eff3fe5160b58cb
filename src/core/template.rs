//! Move templates: per-piece matrices of move codes.
//!
//! A template is a small odd × odd matrix centered on the piece. Each cell
//! holds an optional [`MoveCode`](super::cell::MoveCode) describing what the
//! piece may do at that relative offset. Overlaying the template onto the
//! board projects those relative offsets to absolute coordinates.
//!
//! Odd dimensions are required so a unique center cell aligns with the
//! piece's own square; the constructor rejects anything else up front.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Pos;
use super::cell::MoveCode;
use super::error::ConfigError;

/// One projected template cell: an absolute board position and its code.
pub type OverlayHit = (Pos, MoveCode);

/// Projected moves for a single piece.
///
/// Small enough to stay on the stack for the common 3×3 templates.
pub type OverlayHits = SmallVec<[OverlayHit; 8]>;

/// An odd × odd matrix of optional move codes, centered on the piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTemplate {
    cells: Vec<Vec<Option<MoveCode>>>,
    dim: usize,
}

impl MoveTemplate {
    /// Build a template from a code matrix.
    ///
    /// Fails fast on a template that is empty, non-square, or of even
    /// dimension; those are caller bugs the engine refuses to index with.
    pub fn new(cells: Vec<Vec<Option<MoveCode>>>) -> Result<Self, ConfigError> {
        let dim = cells.len();
        if dim == 0 {
            return Err(ConfigError::EmptyTemplate);
        }
        if let Some(row) = cells.iter().find(|row| row.len() != dim) {
            return Err(ConfigError::NonSquareTemplate {
                rows: dim,
                cols: row.len(),
            });
        }
        if dim % 2 == 0 {
            return Err(ConfigError::EvenTemplate { dim });
        }
        Ok(Self { cells, dim })
    }

    /// Build a template from string tags (`"s"`, `"sc"`, `"r"`, `"rc"`,
    /// `"c"`, `"f"`).
    ///
    /// Unknown tags (including `""`) become "no move" cells; malformed
    /// templates degrade silently rather than erroring.
    pub fn from_tags(rows: &[&[&str]]) -> Result<Self, ConfigError> {
        let cells = rows
            .iter()
            .map(|row| row.iter().map(|tag| MoveCode::from_tag(tag)).collect())
            .collect();
        Self::new(cells)
    }

    /// Template dimension (always odd).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The code at a template cell.
    #[must_use]
    pub fn code_at(&self, row: usize, col: usize) -> Option<MoveCode> {
        self.cells[row][col]
    }

    /// Project this template onto a `board_size` × `board_size` board for a
    /// piece at `(piece_row, piece_col)`.
    ///
    /// The template's center cell aligns with the piece's position:
    /// `board_row = piece_row - dim/2 + template_row`, likewise for columns.
    /// Template cells that land outside the board are dropped silently;
    /// out-of-bounds is a normal condition near edges, not an error.
    ///
    /// Hits come back in row-major order of the projected board positions,
    /// which is the enumeration order successor generation is specified in.
    #[must_use]
    pub fn overlay(&self, board_size: usize, piece_row: usize, piece_col: usize) -> OverlayHits {
        let half = (self.dim / 2) as isize;
        let mut hits = OverlayHits::new();

        for (t_row, row) in self.cells.iter().enumerate() {
            for (t_col, code) in row.iter().enumerate() {
                let Some(code) = *code else {
                    continue;
                };
                let board_row = piece_row as isize - half + t_row as isize;
                let board_col = piece_col as isize - half + t_col as isize;
                if board_row < 0
                    || board_row >= board_size as isize
                    || board_col < 0
                    || board_col >= board_size as isize
                {
                    continue;
                }
                hits.push((
                    Pos::new(board_row as usize, board_col as usize),
                    code,
                ));
            }
        }

        hits
    }
}
