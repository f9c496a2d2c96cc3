//! Edit script value types.
//!
//! A diff between two sequences of code points is expressed as an ordered
//! list of [`Edit`] values, one per code point. The list is a complete
//! script: replaying it reproduces either input in full, so downstream
//! consumers never need the original strings alongside the diff.

use serde::{Deserialize, Serialize};

/// How a single code point differs between the old and new sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// The code point is present in both sequences.
    Keep,
    /// The code point exists only in the new sequence.
    Insert,
    /// The code point exists only in the old sequence.
    Delete,
}

/// One step of an edit script, carrying the code point it applies to.
///
/// An ordered `Vec<Edit>` reconstructs both inputs: concatenating the
/// values of `Keep` and `Delete` edits yields the old sequence, and
/// concatenating the values of `Keep` and `Insert` edits yields the new
/// one. For `Keep` the value is drawn from the old sequence; the matching
/// code point in the new sequence is identical by definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The operation performed at this position.
    pub kind: EditKind,
    /// The code point the operation applies to.
    pub value: char,
}

impl Edit {
    /// Creates a `Keep` edit for a code point common to both sequences.
    #[must_use]
    pub const fn keep(value: char) -> Self {
        Self {
            kind: EditKind::Keep,
            value,
        }
    }

    /// Creates an `Insert` edit for a code point added by the new sequence.
    #[must_use]
    pub const fn insert(value: char) -> Self {
        Self {
            kind: EditKind::Insert,
            value,
        }
    }

    /// Creates a `Delete` edit for a code point removed from the old sequence.
    #[must_use]
    pub const fn delete(value: char) -> Self {
        Self {
            kind: EditKind::Delete,
            value,
        }
    }

    /// Returns `true` if this edit modifies the old sequence.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self.kind, EditKind::Keep)
    }
}
