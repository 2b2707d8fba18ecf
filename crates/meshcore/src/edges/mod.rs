//! Edge Index: undirected edge → incident-face map.
//!
//! Purpose
//! - Canonicalize every face edge to `(min, max)` and record which faces use it
//!   and through which local slot (the corner opposite the edge).
//! - Classify edges as boundary (1 face), interior (2) or non-manifold (>2).
//!
//! Policy
//! - Faces are scanned in ascending id, so the two retained incidences of a
//!   non-manifold edge are the two lowest face ids. Further incidences only bump
//!   a counter; `incidence_count()` still reports the true total.
//! - Faces that repeat a vertex index contribute no edges and are listed in
//!   `degenerate_faces()`.
//! - An out-of-range vertex index is the one hard error.

mod build;
mod types;

pub use types::{EdgeId, EdgeIndex, EdgeKey, EdgeRecord, Incidence};
