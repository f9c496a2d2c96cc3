//! Inline rendering of edit scripts.

use crate::edit::{Edit, EditKind};

/// Renders an edit script as one annotated line.
///
/// Adjacent edits of the same kind are grouped into runs: kept text appears
/// verbatim, inserted runs as `[+text]` and deleted runs as `[-text]`.
/// The bracket characters are not escaped when they occur in the diffed
/// text itself, so the output is meant for human eyes rather than for
/// parsing back into a script.
///
/// ```
/// use chardiff_engine::{diff, render};
///
/// let edits = diff("abc", "abd");
/// assert_eq!(render(&edits), "ab[-c][+d]");
/// ```
#[must_use]
pub fn render(edits: &[Edit]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut kind = EditKind::Keep;

    for edit in edits {
        if edit.kind != kind {
            flush_run(&mut out, kind, &mut run);
            kind = edit.kind;
        }
        run.push(edit.value);
    }
    flush_run(&mut out, kind, &mut run);

    out
}

/// Writes the finished run in its bracket notation and clears it.
fn flush_run(out: &mut String, kind: EditKind, run: &mut String) {
    if run.is_empty() {
        return;
    }
    match kind {
        EditKind::Keep => out.push_str(run),
        EditKind::Insert => {
            out.push_str("[+");
            out.push_str(run);
            out.push(']');
        }
        EditKind::Delete => {
            out.push_str("[-");
            out.push_str(run);
            out.push(']');
        }
    }
    run.clear();
}
