//! Vertex, face and the owning `Mesh`.

use nalgebra::{Vector2, Vector3};

use crate::cfg::TopologyCfg;
use crate::edges::EdgeIndex;
use crate::error::{MeshError, Result};
use crate::geometry::{Aabb, Triangle};
use crate::topology::{FaceAdjacency, NeighborTable, RingStatus, Topology};

/// Triangle as three vertex indices; the order is the winding.
///
/// Local edge `k` is opposite corner `k` and joins corners `(k+1)%3 → (k+2)%3`.
pub type Face = [u32; 3];

/// Directed edge at local slot `slot`: `(face[(slot+1)%3], face[(slot+2)%3])`.
#[inline]
pub fn face_edge(face: &Face, slot: usize) -> (u32, u32) {
    (face[(slot + 1) % 3], face[(slot + 2) % 3])
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub uv: Option<Vector2<f64>>,
}

impl Vertex {
    #[inline]
    pub fn new(position: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            normal,
            uv: None,
        }
    }
}

/// Triangle mesh plus derived connectivity.
///
/// Invariants:
/// - Every face index is `< vertices.len()`.
/// - `topology` was built from exactly the current `vertices` and `faces`.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    topology: Topology,
    cfg: TopologyCfg,
}

impl Mesh {
    /// Validate indices and build the topology with default options.
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>) -> Result<Self> {
        Self::with_cfg(vertices, faces, TopologyCfg::default())
    }

    pub fn with_cfg(vertices: Vec<Vertex>, faces: Vec<Face>, cfg: TopologyCfg) -> Result<Self> {
        let topology = Topology::build(&vertices, &faces, cfg)?;
        Ok(Self {
            vertices,
            faces,
            topology,
            cfg,
        })
    }

    /// Replace geometry and snapshot. On error the mesh is left untouched.
    pub fn rebuild(&mut self, vertices: Vec<Vertex>, faces: Vec<Face>) -> Result<()> {
        let topology = Topology::build(&vertices, &faces, self.cfg)?;
        self.vertices = vertices;
        self.faces = faces;
        self.topology = topology;
        Ok(())
    }

    /// Area-weighted vertex normals from incident faces, then re-sort rings.
    ///
    /// Vertices without a non-degenerate incident face get a zero normal.
    pub fn recompute_normals(&mut self) {
        let mut acc = vec![Vector3::zeros(); self.vertices.len()];
        for f in 0..self.faces.len() {
            let n = self.triangle(f as u32).scaled_normal();
            for &v in &self.faces[f] {
                acc[v as usize] += n;
            }
        }
        for (vertex, n) in self.vertices.iter_mut().zip(acc) {
            vertex.normal = n.try_normalize(0.0).unwrap_or_else(Vector3::zeros);
        }
        self.topology
            .refresh_rings(&self.vertices, &self.faces, self.cfg);
    }

    #[inline]
    pub fn cfg(&self) -> TopologyCfg {
        self.cfg
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[inline]
    pub fn position(&self, v: u32) -> Vector3<f64> {
        self.vertices[v as usize].position
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn edges(&self) -> &EdgeIndex {
        &self.topology.edges
    }

    #[inline]
    pub fn neighbor_table(&self) -> &NeighborTable {
        &self.topology.neighbors
    }

    /// Rotationally ordered neighbors of `v` (see `ring`).
    #[inline]
    pub fn neighbors(&self, v: u32) -> &[u32] {
        self.topology.neighbors.of(v)
    }

    #[inline]
    pub fn ring(&self, v: u32) -> RingStatus {
        self.topology.ring(v)
    }

    #[inline]
    pub fn face_adjacency(&self) -> &FaceAdjacency {
        &self.topology.face_adjacency
    }

    #[inline]
    pub fn face_neighbors(&self, f: u32) -> [Option<u32>; 3] {
        self.topology.face_adjacency.of(f)
    }

    #[inline]
    pub fn triangle(&self, f: u32) -> Triangle {
        let [a, b, c] = self.faces[f as usize];
        Triangle::new(self.position(a), self.position(b), self.position(c))
    }

    #[inline]
    pub fn face_barycenter(&self, f: u32) -> Vector3<f64> {
        self.triangle(f).barycenter()
    }

    /// Bounds of all vertex positions; `None` without vertices.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }

    /// Bounds-checked vertex id for query entry points.
    pub(crate) fn check_vertex(&self, v: usize) -> Result<u32> {
        if v < self.vertices.len() {
            Ok(v as u32)
        } else {
            Err(MeshError::VertexOutOfRange {
                index: v,
                vertex_count: self.vertices.len(),
            })
        }
    }

    pub(crate) fn check_face(&self, f: usize) -> Result<u32> {
        if f < self.faces.len() {
            Ok(f as u32)
        } else {
            Err(MeshError::FaceOutOfRange {
                index: f,
                face_count: self.faces.len(),
            })
        }
    }

    /// Give back the owned geometry, dropping the snapshot.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<Face>) {
        (self.vertices, self.faces)
    }
}
