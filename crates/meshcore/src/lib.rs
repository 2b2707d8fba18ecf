//! Mesh topology and connectivity engine.
//!
//! Turns a triangle soup (positions, normals, faces) into a queryable
//! structure: an undirected edge index, rotationally ordered vertex rings,
//! face-to-face adjacency, ray picking, boundary extraction, and shortest
//! paths on the vertex graph and on the face dual graph.
//!
//! API Policy
//! - A `Mesh` owns its topology snapshot. Every change goes through
//!   `Mesh::rebuild` or `Mesh::recompute_normals`, which replace the snapshot
//!   wholesale; queries borrow `&self`.
//! - Bad indices are errors (`MeshError`). Geometric and topological anomalies
//!   (misses, non-manifold edges, ring gaps, unreachable targets) are reported
//!   in return values and logged through `tracing`.
//! - The library never installs a tracing subscriber.

pub mod boundary;
pub mod cfg;
pub mod curve;
pub mod edges;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod path;
pub mod pick;
pub mod scene;
pub mod shapes;
pub mod topology;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{TopologyCfg, ORIENT_EPS};
pub use error::{MeshError, Result};
pub use mesh::{Face, Mesh, Vertex};
pub use topology::RingStatus;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{boundary_edges, boundary_loops, BoundaryLoop};
    pub use crate::curve::{SurfacePoint, VertexCurve};
    pub use crate::edges::{EdgeIndex, EdgeKey};
    pub use crate::geometry::{intersect, Aabb, Hit, Ray, Triangle};
    pub use crate::mesh::{Face, Mesh, Vertex};
    pub use crate::path::Path;
    pub use crate::pick::MeshHit;
    pub use crate::scene::{Scene, SceneHit};
    pub use crate::topology::{validate, RingStatus, ValidationReport};
    pub use crate::{MeshError, TopologyCfg};
    pub use nalgebra::Vector3 as Vec3;
}
