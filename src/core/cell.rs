//! Cells: the atomic unit of board content.
//!
//! A cell pairs an optional identity token with an optional move template.
//! An empty square is a cell with no identity; an immobile piece is a cell
//! with an identity but no template.
//!
//! ## Equality
//!
//! Cell equality and hashing cover the identity ONLY. The move template is a
//! property of the piece type sitting on the square, not of the board state,
//! so two boards with the same identity layout compare equal even if their
//! templates differ.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::template::MoveTemplate;

/// Identity token for a piece (a label such as `"Q"` or `"7"`).
///
/// Token meaning is domain-specific; the engine only ever compares tokens
/// for equality and renders them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token(pub String);

impl Token {
    /// Create a token from anything string-like.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the label as a number, if it is one.
    ///
    /// Used by rule sets whose tokens are tile numbers (n-puzzle).
    #[must_use]
    pub fn as_number(&self) -> Option<u32> {
        self.0.parse().ok()
    }
}

impl From<&str> for Token {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One square's content: an optional piece identity plus its move template.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    /// Piece identity; `None` means the square is empty.
    pub identity: Option<Token>,

    /// Move template; `None` means the piece (if any) is immobile.
    pub template: Option<MoveTemplate>,
}

impl Cell {
    /// An empty square.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            identity: None,
            template: None,
        }
    }

    /// An immobile piece.
    #[must_use]
    pub fn piece(identity: impl Into<Token>) -> Self {
        Self {
            identity: Some(identity.into()),
            template: None,
        }
    }

    /// A piece that moves according to `template`.
    #[must_use]
    pub fn mobile_piece(identity: impl Into<Token>, template: MoveTemplate) -> Self {
        Self {
            identity: Some(identity.into()),
            template: Some(template),
        }
    }

    /// An identity-less cell that still carries a template.
    ///
    /// The n-puzzle blank is exactly this: the empty square is the thing
    /// that "moves" by swapping with its orthogonal neighbors.
    #[must_use]
    pub fn mobile_blank(template: MoveTemplate) -> Self {
        Self {
            identity: None,
            template: Some(template),
        }
    }

    /// Whether the square holds a piece identity.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether successor generation should scan this cell's moves.
    ///
    /// Matches the original rule set: a cell takes part in move generation
    /// whenever it carries a template, occupied or not (the n-puzzle blank
    /// relies on this).
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.template.is_some()
    }
}

// Identity-only equality; templates are piece-type metadata, not state.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

/// A move code: what applying a template cell to the board means.
///
/// Codes parse from the template tag language via [`MoveCode::from_tag`];
/// unknown tags mean "no move" rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCode {
    /// `s`: swap piece and target contents unconditionally.
    Swap,
    /// `sc`: swap, conditional on a clear path.
    SwapClear,
    /// `r`: target becomes the piece, origin becomes empty; the target's
    /// prior occupant is destroyed.
    Replace,
    /// `rc`: replace, conditional on a clear path.
    ReplaceClear,
    /// `c`: move, conditional on a clear path AND an empty target.
    MoveClear,
    /// `f`: move to an empty target with no path requirement (a leap).
    MoveFree,
}

impl MoveCode {
    /// Parse a template tag.
    ///
    /// Unknown tags yield `None` ("no move"), preserving the permissive
    /// handling of malformed templates: a bad tag silently disables that
    /// offset instead of failing the run.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "s" => Some(Self::Swap),
            "sc" => Some(Self::SwapClear),
            "r" => Some(Self::Replace),
            "rc" => Some(Self::ReplaceClear),
            "c" => Some(Self::MoveClear),
            "f" => Some(Self::MoveFree),
            _ => None,
        }
    }

    /// The tag this code parses from.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Swap => "s",
            Self::SwapClear => "sc",
            Self::Replace => "r",
            Self::ReplaceClear => "rc",
            Self::MoveClear => "c",
            Self::MoveFree => "f",
        }
    }

    /// Whether this code requires a clear path between origin and target.
    #[must_use]
    pub fn needs_clear_path(self) -> bool {
        matches!(self, Self::SwapClear | Self::ReplaceClear | Self::MoveClear)
    }

    /// Whether this code requires the target square to be empty.
    #[must_use]
    pub fn needs_empty_target(self) -> bool {
        matches!(self, Self::MoveClear | Self::MoveFree)
    }
}
