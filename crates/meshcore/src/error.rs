//! Error type for structural violations.
//!
//! Geometric and topological anomalies (parallel rays, non-manifold edges,
//! incomplete rings, unreachable targets) are not errors; they degrade locally
//! and are reported through return values. Only bad indices surface here.

use thiserror::Error;

/// Result alias for fallible mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A face references a vertex that does not exist.
    #[error("face {face} corner {corner} references vertex {index} (mesh has {vertex_count} vertices)")]
    VertexIndexOutOfRange {
        face: usize,
        corner: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A query names a vertex that does not exist.
    #[error("invalid vertex index: {index} (mesh has {vertex_count} vertices)")]
    VertexOutOfRange { index: usize, vertex_count: usize },

    /// A query names a face that does not exist.
    #[error("invalid face index: {index} (mesh has {face_count} faces)")]
    FaceOutOfRange { index: usize, face_count: usize },

    /// A scene query names a mesh that does not exist.
    #[error("invalid mesh index: {index} (scene has {mesh_count} meshes)")]
    MeshOutOfRange { index: usize, mesh_count: usize },

    /// Two consecutive curve waypoints lie in different components.
    #[error("no path between waypoints {from} and {to}")]
    UnreachableWaypoint { from: u32, to: u32 },
}
