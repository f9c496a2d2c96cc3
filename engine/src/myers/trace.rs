//! Search state for the forward pass: the frontier of furthest-reaching
//! paths and the per-distance history the backtrace replays.

use std::ops;

/// Furthest-reaching x-coordinates, indexable by diagonal.
///
/// A diagonal is `k = x - y`. For two sequences of lengths `n` and `m` the
/// search touches diagonals in `-(n + m)..=(n + m)`, so slots are stored in
/// a flat array offset by `n + m`. Slot `k` holds the x-coordinate (the
/// position in the old sequence) of the furthest endpoint reached on that
/// diagonal; the matching y-coordinate is recovered as `x - k`.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    offset: isize,
    slots: Vec<usize>,
}

impl Frontier {
    /// Creates a frontier covering diagonals `-max..=max`, all at x = 0.
    pub(crate) fn new(max: usize) -> Self {
        Self {
            offset: max as isize,
            slots: vec![0; 2 * max + 1],
        }
    }
}

impl ops::Index<isize> for Frontier {
    type Output = usize;

    fn index(&self, k: isize) -> &Self::Output {
        &self.slots[(k + self.offset) as usize]
    }
}

impl ops::IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        &mut self.slots[(k + self.offset) as usize]
    }
}

/// Frontier snapshots recorded by the forward pass, one per edit distance.
///
/// Snapshot `d` is the frontier as it stood after the pass for distance `d`
/// finished. Recording copies the frontier, so later passes never disturb
/// what the backtrace will read.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    snapshots: Vec<Frontier>,
}

impl Trace {
    /// Appends a copy of the frontier as the snapshot for the next distance.
    pub(crate) fn record(&mut self, frontier: &Frontier) {
        self.snapshots.push(frontier.clone());
    }

    /// The recorded snapshots, indexed by edit distance.
    pub(crate) fn snapshots(&self) -> &[Frontier] {
        &self.snapshots
    }
}
