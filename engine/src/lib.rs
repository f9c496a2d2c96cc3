//! Character-level diffing with Myers' shortest-edit-script algorithm.
//!
//! This crate compares two strings code point by code point and produces a
//! minimal edit script: the fewest insertions and deletions that turn one
//! into the other, with unchanged code points carried through as context.
//! The script can be rendered as a single annotated line where insertions
//! appear as `[+text]` and deletions as `[-text]`.
//!
//! ```
//! use chardiff_engine::{diff, render};
//!
//! let edits = diff("ac", "abc");
//! assert_eq!(render(&edits), "a[+b]c");
//! ```
//!
//! # Granularity
//!
//! Comparison happens on Unicode scalar values exactly as they appear in
//! the input. No normalization, case folding or grapheme clustering is
//! applied: `"é"` and `"e\u{301}"` are different sequences and diff as a
//! substitution, and a combining mark can be inserted or deleted on its
//! own. Astral code points such as emoji are single units, never split.
//!
//! ```
//! use chardiff_engine::{diff, render};
//!
//! let edits = diff("é", "e\u{301}");
//! assert_eq!(render(&edits), "[-é][+e\u{301}]");
//! ```
//!
//! # Resource usage
//!
//! The search runs in O((N + M) * D) time and space for inputs of combined
//! length N + M at edit distance D, which reaches O((N + M)²) when the
//! inputs have little in common. The engine itself never truncates or
//! rejects input; callers comparing untrusted data should bound input
//! sizes before diffing, as the bundled command line tool does.

pub mod edit;
pub mod format;
pub mod myers;

pub use edit::{Edit, EditKind};
pub use format::render;
pub use myers::MyersDiff;

/// Strategy interface for edit script computation.
///
/// Implementations are stateless or internally synchronized (`Send + Sync`)
/// so a single instance can serve concurrent callers. Inputs are borrowed
/// string slices; the returned script owns its code points and stays valid
/// after the inputs are dropped.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the edit script that turns `old` into `new`.
    fn diff(&self, old: &str, new: &str) -> Vec<Edit>;
}

/// Diffs two strings with [`MyersDiff`], the default algorithm.
///
/// Convenience wrapper for callers that do not need to choose an
/// implementation through [`DiffAlgorithm`].
#[must_use]
pub fn diff(old: &str, new: &str) -> Vec<Edit> {
    MyersDiff::new().diff(old, new)
}
