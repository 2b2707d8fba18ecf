//! Shortest-Path Search on the vertex graph and the face dual graph.
//!
//! Purpose
//! - One lazy-deletion Dijkstra (`shortest_path`) over any `SearchGraph`, with
//!   two mesh graphs: vertices joined by edges (Euclidean edge length) and
//!   faces joined across interior edges (barycenter distance).
//!
//! Conventions
//! - A `Path` lists nodes from source to target, excluding the source and
//!   including the target. `src == dst` gives an empty path of length 0; an
//!   unreachable target gives an empty path of length `+inf`.
//! - The search stops when the target is settled or the frontier empties.

mod dijkstra;
mod graphs;

pub use dijkstra::{shortest_path, Path};
pub use graphs::{FaceGraph, SearchGraph, VertexGraph};

use crate::error::Result;
use crate::mesh::Mesh;

impl Mesh {
    /// Vertex-graph shortest path from `src` to `dst`.
    pub fn shortest_path(&self, src: usize, dst: usize) -> Result<Path> {
        let src = self.check_vertex(src)?;
        let dst = self.check_vertex(dst)?;
        Ok(shortest_path(&VertexGraph::new(self), src, dst))
    }

    /// Face-dual-graph shortest path from face `src` to face `dst`.
    pub fn face_shortest_path(&self, src: usize, dst: usize) -> Result<Path> {
        let src = self.check_face(src)?;
        let dst = self.check_face(dst)?;
        Ok(shortest_path(&FaceGraph::new(self), src, dst))
    }
}
