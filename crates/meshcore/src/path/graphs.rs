//! Weighted graph views over a mesh.

use crate::mesh::Mesh;

/// Non-negative weighted graph with dense `u32` node ids.
pub trait SearchGraph {
    fn node_count(&self) -> usize;

    /// Call `f(neighbor, weight)` for every edge leaving `node`.
    fn for_each_neighbor<F: FnMut(u32, f64)>(&self, node: u32, f: F);
}

/// Vertices and mesh edges, weighted by Euclidean length.
#[derive(Clone, Copy, Debug)]
pub struct VertexGraph<'a> {
    mesh: &'a Mesh,
}

impl<'a> VertexGraph<'a> {
    #[inline]
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }
}

impl SearchGraph for VertexGraph<'_> {
    #[inline]
    fn node_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    fn for_each_neighbor<F: FnMut(u32, f64)>(&self, node: u32, mut f: F) {
        let p = self.mesh.position(node);
        for &w in self.mesh.neighbors(node) {
            f(w, (self.mesh.position(w) - p).norm());
        }
    }
}

/// Faces joined across interior edges, weighted by barycenter distance.
#[derive(Clone, Copy, Debug)]
pub struct FaceGraph<'a> {
    mesh: &'a Mesh,
}

impl<'a> FaceGraph<'a> {
    #[inline]
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }
}

impl SearchGraph for FaceGraph<'_> {
    #[inline]
    fn node_count(&self) -> usize {
        self.mesh.face_count()
    }

    fn for_each_neighbor<F: FnMut(u32, f64)>(&self, node: u32, mut f: F) {
        let c = self.mesh.face_barycenter(node);
        for g in self.mesh.face_adjacency().neighbors(node) {
            f(g, (self.mesh.face_barycenter(g) - c).norm());
        }
    }
}
