//! Picking: closest ray hit on a mesh.
//!
//! A linear sweep over all faces keeping the smallest `t`; no acceleration
//! structure. Equal `t` keeps the lower face id.

use nalgebra::Vector3;

use crate::geometry::{intersect, nearest_corner, Hit, Ray};
use crate::mesh::Mesh;

/// Closest hit on one mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshHit {
    pub face: u32,
    pub hit: Hit,
}

impl MeshHit {
    /// Hit position reconstructed from the barycentrics.
    #[inline]
    pub fn point(&self, mesh: &Mesh) -> Vector3<f64> {
        mesh.triangle(self.face).point_at(self.hit.u, self.hit.v)
    }

    /// Vertex of the hit face closest to the hit point.
    pub fn nearest_vertex(&self, mesh: &Mesh) -> u32 {
        let tri = mesh.triangle(self.face);
        let corner = nearest_corner(&tri, &tri.point_at(self.hit.u, self.hit.v));
        mesh.faces()[self.face as usize][corner]
    }
}

impl Mesh {
    /// Closest face hit by `ray`, if any. O(F).
    pub fn intersect(&self, ray: &Ray) -> Option<MeshHit> {
        let mut best: Option<MeshHit> = None;
        for f in 0..self.face_count() as u32 {
            let Some(hit) = intersect(ray, &self.triangle(f)) else {
                continue;
            };
            if best.map_or(true, |b| hit.t < b.hit.t) {
                best = Some(MeshHit { face: f, hit });
            }
        }
        best
    }
}
