//! Forward Myers search and the backtrace that recovers the edit script.

use crate::DiffAlgorithm;
use crate::edit::Edit;
use crate::myers::trace::{Frontier, Trace};

/// Myers' greedy shortest-edit-script algorithm over code points.
///
/// Implements the forward variant described in "An O(ND) Difference
/// Algorithm and Its Variations" (Myers, 1986). `N` is the combined input
/// length and `D` the number of differences, so runtime degrades toward
/// quadratic only when the inputs share little content.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl MyersDiff {
    /// Creates a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for MyersDiff {
    fn diff(&self, old: &str, new: &str) -> Vec<Edit> {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        compute(&old, &new)
    }
}

/// Computes a shortest edit script turning `old` into `new`.
///
/// The script is minimal: no script with fewer `Insert` and `Delete` edits
/// exists for the pair. Among equally short scripts, deletions are emitted
/// before the insertions that replace them, so substitutions render as
/// "remove, then add". Both inputs may be empty.
#[must_use]
pub fn compute(old: &[char], new: &[char]) -> Vec<Edit> {
    if old.is_empty() && new.is_empty() {
        return Vec::new();
    }
    if old.is_empty() {
        return new.iter().map(|&value| Edit::insert(value)).collect();
    }
    if new.is_empty() {
        return old.iter().map(|&value| Edit::delete(value)).collect();
    }

    let trace = search(old, new);
    backtrace(old, new, &trace)
}

/// Runs the forward pass, recording one frontier snapshot per distance.
///
/// Distance `d` extends the endpoints of distance `d - 1` by one edit and
/// then slides down the diagonal while the sequences agree. The pass for
/// the distance that reaches `(n, m)` is still recorded before the search
/// stops, so the trace always ends with the snapshot the backtrace starts
/// from.
fn search(old: &[char], new: &[char]) -> Trace {
    let n = old.len();
    let m = new.len();
    let max = n + m;

    let mut frontier = Frontier::new(max);
    let mut trace = Trace::default();

    for d in 0..=max {
        let d = d as isize;
        let mut reached_end = false;

        for k in (-d..=d).step_by(2) {
            // Extend whichever neighbouring diagonal reaches further: a
            // move down from k + 1 keeps its x, a move right from k - 1
            // advances x by one. The k == -d and k == d arms have only one
            // in-bounds neighbour.
            let mut x = if k == -d || (k != d && frontier[k - 1] < frontier[k + 1]) {
                frontier[k + 1]
            } else {
                frontier[k - 1] + 1
            };
            // y >= 0 holds for every reachable endpoint, so the cast is safe.
            let mut y = (x as isize - k) as usize;

            while x < n && y < m && old[x] == new[y] {
                x += 1;
                y += 1;
            }

            frontier[k] = x;

            if x == n && y == m {
                reached_end = true;
                break;
            }
        }

        trace.record(&frontier);
        if reached_end {
            break;
        }
    }

    trace
}

/// Replays the trace from `(n, m)` back to the origin, emitting edits.
///
/// Each snapshot contributes the snake walked at that distance (as `Keep`
/// edits) plus the single `Insert` or `Delete` that preceded it. Edits are
/// collected in reverse and flipped once at the end. The snapshot for
/// distance zero has no preceding edit; its bounds checks suppress the
/// emission.
fn backtrace(old: &[char], new: &[char], trace: &Trace) -> Vec<Edit> {
    let mut x = old.len() as isize;
    let mut y = new.len() as isize;
    let mut edits = Vec::new();

    for (d, frontier) in trace.snapshots().iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;

        let prev_k = if k == -d || (k != d && frontier[k - 1] < frontier[k + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = frontier[prev_k] as isize;
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            if x > 0 && y > 0 {
                edits.push(Edit::keep(old[(x - 1) as usize]));
            }
            x -= 1;
            y -= 1;
        }

        if y > prev_y {
            if y > 0 {
                edits.push(Edit::insert(new[(y - 1) as usize]));
            }
            y -= 1;
        } else if x > prev_x {
            if x > 0 {
                edits.push(Edit::delete(old[(x - 1) as usize]));
            }
            x -= 1;
        }
    }

    edits.reverse();
    edits
}
