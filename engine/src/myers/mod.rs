//! Myers shortest-edit-script diff.
//!
//! The search walks edit distances outward from zero. For each distance it
//! records which position in the old sequence the furthest-reaching path on
//! every diagonal has arrived at, then slides along matching code points
//! for free. Once the end of both sequences is reached, the recorded
//! snapshots are replayed backwards to reconstruct one shortest script.
//!
//! Time and space are O((N + M) * D) for inputs of length N and M at edit
//! distance D: cheap for similar inputs, quadratic for unrelated ones.

pub mod algorithm;
mod trace;

pub use algorithm::{MyersDiff, compute};
