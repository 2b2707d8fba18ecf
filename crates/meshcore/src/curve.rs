//! Surface curves: picked points and vertex polylines along mesh edges.
//!
//! A `VertexCurve` is the concatenation of vertex-graph shortest paths between
//! user waypoints. Its measures (length, turning angles) are computed against
//! the mesh it was built on; passing another mesh is a logic error that
//! `check_consistency` detects.

use nalgebra::Vector3;

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;
use crate::scene::{Scene, SceneHit};

/// A picked point on a scene surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub mesh: usize,
    pub face: u32,
    pub u: f64,
    pub v: f64,
    pub position: Vector3<f64>,
}

impl SurfacePoint {
    pub fn from_hit(scene: &Scene, hit: &SceneHit) -> Result<Self> {
        let mesh = scene.mesh(hit.mesh)?;
        mesh.check_face(hit.hit.face as usize)?;
        Ok(Self {
            mesh: hit.mesh,
            face: hit.hit.face,
            u: hit.hit.hit.u,
            v: hit.hit.hit.v,
            position: hit.hit.point(mesh),
        })
    }
}

/// Polyline through mesh vertices of scene mesh `mesh`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexCurve {
    pub mesh: usize,
    pub vertices: Vec<u32>,
}

impl VertexCurve {
    /// Join consecutive `waypoints` by vertex shortest paths.
    ///
    /// Repeated consecutive waypoints add nothing. Errors on an out-of-range
    /// waypoint or when two consecutive waypoints are not connected.
    pub fn through(mesh_id: usize, mesh: &Mesh, waypoints: &[usize]) -> Result<Self> {
        let mut vertices = Vec::new();
        let Some((&first, rest)) = waypoints.split_first() else {
            return Ok(Self {
                mesh: mesh_id,
                vertices,
            });
        };
        let mut from = mesh.check_vertex(first)?;
        vertices.push(from);
        for &w in rest {
            let path = mesh.shortest_path(from as usize, w)?;
            let to = w as u32;
            if !path.is_reachable() {
                return Err(MeshError::UnreachableWaypoint { from, to });
            }
            vertices.extend_from_slice(&path.nodes);
            from = to;
        }
        tracing::debug!(
            waypoints = waypoints.len(),
            vertices = vertices.len(),
            "curve built"
        );
        Ok(Self {
            mesh: mesh_id,
            vertices,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Indices `i` where `vertices[i]` and `vertices[i + 1]` share no edge.
    pub fn check_consistency(&self, mesh: &Mesh) -> Vec<usize> {
        let edges = mesh.edges();
        self.vertices
            .windows(2)
            .enumerate()
            .filter(|(_, w)| !edges.contains(w[0], w[1]))
            .map(|(i, _)| i)
            .collect()
    }

    /// Sum of segment lengths.
    pub fn length(&self, mesh: &Mesh) -> f64 {
        self.vertices
            .windows(2)
            .map(|w| (mesh.position(w[1]) - mesh.position(w[0])).norm())
            .sum()
    }

    /// Angle in `[0, pi]` between incoming and outgoing segment at each
    /// interior vertex; zero-length segments give 0.
    pub fn turning_angles(&self, mesh: &Mesh) -> Vec<f64> {
        self.vertices
            .windows(3)
            .map(|w| {
                let p = mesh.position(w[1]);
                let a = p - mesh.position(w[0]);
                let b = mesh.position(w[2]) - p;
                if a.norm_squared() == 0.0 || b.norm_squared() == 0.0 {
                    0.0
                } else {
                    a.angle(&b)
                }
            })
            .collect()
    }
}
