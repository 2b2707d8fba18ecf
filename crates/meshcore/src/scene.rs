//! Multi-mesh scene and scene-level picking.

use crate::error::{MeshError, Result};
use crate::geometry::{Aabb, Ray};
use crate::mesh::Mesh;
use crate::pick::MeshHit;

/// Closest hit across a scene, tagged with the owning mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneHit {
    pub mesh: usize,
    pub hit: MeshHit,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub meshes: Vec<Mesh>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append and return the new mesh id.
    pub fn add(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn mesh(&self, id: usize) -> Result<&Mesh> {
        self.meshes.get(id).ok_or(MeshError::MeshOutOfRange {
            index: id,
            mesh_count: self.meshes.len(),
        })
    }

    /// Minimum-`t` hit over all meshes; ties keep the lower mesh id.
    pub fn intersect(&self, ray: &Ray) -> Option<SceneHit> {
        let mut best: Option<SceneHit> = None;
        for (id, mesh) in self.meshes.iter().enumerate() {
            let Some(hit) = mesh.intersect(ray) else {
                continue;
            };
            if best.map_or(true, |b| hit.hit.t < b.hit.hit.t) {
                best = Some(SceneHit { mesh: id, hit });
            }
        }
        best
    }

    /// Bounds over every non-empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        self.meshes
            .iter()
            .filter_map(Mesh::bounds)
            .reduce(|a, b| a.merge(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Vertex;
    use crate::shapes;
    use nalgebra::{vector, Vector3};

    fn quad_at(z: f64) -> Mesh {
        let v = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .iter()
            .map(|&(x, y)| Vertex::new(vector![x, y, z], Vector3::z()))
            .collect();
        Mesh::new(v, vec![[0, 1, 2], [0, 2, 3]]).unwrap()
    }

    #[test]
    fn closest_mesh_wins_regardless_of_order() {
        let ray = Ray::new(vector![0.1, 0.2, 10.0], vector![0.0, 0.0, -1.0]);

        let mut near_first = Scene::new();
        near_first.add(quad_at(2.0));
        near_first.add(quad_at(-3.0));
        let h = near_first.intersect(&ray).unwrap();
        assert_eq!(h.mesh, 0);
        assert!((h.hit.hit.t - 8.0).abs() < 1e-12);

        let mut far_first = Scene::new();
        far_first.add(quad_at(-3.0));
        far_first.add(quad_at(2.0));
        let h = far_first.intersect(&ray).unwrap();
        assert_eq!(h.mesh, 1);
        assert!((h.hit.hit.t - 8.0).abs() < 1e-12);
    }

    #[test]
    fn empty_scene_and_misses() {
        let ray = Ray::new(vector![0.0, 0.0, 10.0], vector![0.0, 0.0, -1.0]);
        assert!(Scene::new().intersect(&ray).is_none());
        assert!(Scene::new().bounds().is_none());
        let mut s = Scene::new();
        s.add(quad_at(0.0));
        let sideways = Ray::new(vector![5.0, 5.0, 10.0], vector![0.0, 0.0, -1.0]);
        assert!(s.intersect(&sideways).is_none());
    }

    #[test]
    fn bounds_merge_meshes() {
        let mut s = Scene::new();
        s.add(shapes::cube(1.0).unwrap());
        s.add(quad_at(5.0));
        let b = s.bounds().unwrap();
        assert_eq!(b.min, vector![-1.0, -1.0, -1.0]);
        assert_eq!(b.max, vector![1.0, 1.0, 5.0]);
        assert!(s.mesh(1).is_ok());
        assert!(matches!(
            s.mesh(2),
            Err(MeshError::MeshOutOfRange { index: 2, mesh_count: 2 })
        ));
    }
}
