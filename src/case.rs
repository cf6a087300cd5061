//! Identifier re-casing.
//!
//! Every convention is a zero-sized type implementing [`Case`]. A conversion
//! splits the input with [`split`](crate::split::split), writes each piece
//! through [`Case::push_piece`] and puts [`Case::joiner`] between pieces.
//!
//! Casing is ASCII-only: non-ASCII characters are copied through unchanged.

pub mod camel;
pub mod sentence;
pub mod snake;

pub use camel::{LowerCamelCase, UpperCamelCase};
pub use sentence::{Humanize, Titleize};
pub use snake::{Constantize, Hyphenate, Underscore};

use crate::split::{SplitError, split};
use thiserror::Error;

/// Public error type for every case converter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("invalid input for `{0}`: {1}")]
    InvalidInput(&'static str, #[source] SplitError),
}

/// A target identifier convention.
pub trait Case: Send + Sync {
    /// Human-readable name, used in error messages.
    fn name(&self) -> &'static str;

    /// Inserted between consecutive pieces.
    fn joiner(&self) -> &'static str;

    /// Write `piece` (the `index`-th piece) into `out` in this convention.
    fn push_piece(&self, index: usize, piece: &str, out: &mut String);

    /// Re-case a whole identifier. Fails only when `text` has no pieces.
    fn convert(&self, text: &str) -> Result<String, CaseError> {
        let pieces = split(text).map_err(|e| CaseError::InvalidInput(self.name(), e))?;
        let joiner = self.joiner();

        let mut out = String::with_capacity(text.len() + pieces.len() * joiner.len());
        for (index, piece) in pieces.iter().enumerate() {
            if index > 0 {
                out.push_str(joiner);
            }
            self.push_piece(index, piece, &mut out);
        }
        Ok(out)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-piece helpers
// ─────────────────────────────────────────────────────────────────────────────

/// First character upper-cased, the rest copied.
#[inline]
pub(crate) fn push_capitalized(piece: &str, out: &mut String) {
    let mut chars = piece.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
}

/// First character lower-cased, the rest copied.
#[inline]
pub(crate) fn push_decapitalized(piece: &str, out: &mut String) {
    let mut chars = piece.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_lowercase());
        out.push_str(chars.as_str());
    }
}

#[inline]
pub(crate) fn push_lowercase(piece: &str, out: &mut String) {
    out.extend(piece.chars().map(|c| c.to_ascii_lowercase()));
}

#[inline]
pub(crate) fn push_uppercase(piece: &str, out: &mut String) {
    out.extend(piece.chars().map(|c| c.to_ascii_uppercase()));
}
