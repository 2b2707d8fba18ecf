//! Neighbor Topology: CSR vertex rings and face adjacency.
//!
//! Purpose
//! - Turn the edge index into (a) a compact per-vertex neighbor table whose
//!   slices are sorted into rotational order around the vertex normal, and
//!   (b) a per-face table of the faces across each local edge slot.
//!
//! Ring ordering
//! - Greedy: starting from a seed neighbor, repeatedly pick the first remaining
//!   neighbor `k` that forms a face with the center and the previous neighbor
//!   and turns positively, i.e. `n · ((p_prev - p) × (p_k - p)) > 0`.
//! - Boundary vertices seed with the neighbor that opens their fan (the one
//!   whose boundary face runs `center → neighbor`), so open fans sweep fully.
//! - When no candidate qualifies the slice keeps its tail in insertion order
//!   and the vertex reports `RingStatus::Gap { at }`. Consumers of ring order
//!   must check the status; only `Closed` and `Open` rings are fully sorted.
//!
//! Snapshots
//! - `Topology` is rebuilt as a whole; nothing here is patched incrementally.

mod build;
mod types;
mod validate;

pub use types::{FaceAdjacency, NeighborTable, RingStatus, Topology};
pub use validate::{validate, ValidationReport, Violation};

#[cfg(test)]
mod tests;
