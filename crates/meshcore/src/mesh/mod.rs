//! Mesh aggregate: vertices, faces and their topology snapshot.
//!
//! Purpose
//! - Own the vertex and face vectors and keep the derived `Topology` in sync.
//! - Offer the only mutation entry points (`rebuild`, `recompute_normals`), each
//!   of which replaces the snapshot wholesale.
//!
//! Concurrency
//! - Queries take `&self`, rebuilding takes `&mut self`; wrap a `Mesh` in an
//!   `RwLock` to share it between threads.

mod types;
mod weld;

pub use types::{face_edge, Face, Mesh, Vertex};
