//! Triangle soup → indexed mesh with welded vertices and averaged normals.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::error::Result;
use crate::geometry::Triangle;

use super::types::{Face, Mesh, Vertex};

/// Bit pattern key; `-0.0` is folded onto `0.0` before hashing.
fn weld_key(p: &Vector3<f64>) -> [u64; 3] {
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

impl Mesh {
    /// Weld bit-identical corners into shared vertices.
    ///
    /// Each corner contributes `(p × q) / (|p|² |q|²)` to its vertex normal, with
    /// `p`, `q` the two edges leaving that corner; sums are normalized at the end.
    /// Corners with a zero-length edge contribute nothing.
    pub fn from_triangle_soup(triangles: &[Triangle]) -> Result<Self> {
        let mut index: HashMap<[u64; 3], u32> = HashMap::with_capacity(triangles.len());
        let mut vertices: Vec<Vertex> = Vec::with_capacity(triangles.len());
        let mut faces: Vec<Face> = Vec::with_capacity(triangles.len());

        for tri in triangles {
            let mut face: Face = [0; 3];
            for j in 0..3 {
                let k = (j + 1) % 3;
                let l = (j + 2) % 3;
                let p = tri.vertex[k] - tri.vertex[j];
                let q = tri.vertex[l] - tri.vertex[j];
                let denom = p.norm_squared() * q.norm_squared();
                let n = if denom > 0.0 {
                    p.cross(&q) / denom
                } else {
                    Vector3::zeros()
                };
                let id = *index.entry(weld_key(&tri.vertex[j])).or_insert_with(|| {
                    vertices.push(Vertex::new(tri.vertex[j], Vector3::zeros()));
                    (vertices.len() - 1) as u32
                });
                vertices[id as usize].normal += n;
                face[j] = id;
            }
            faces.push(face);
        }
        for v in vertices.iter_mut() {
            v.normal = v.normal.try_normalize(0.0).unwrap_or_else(Vector3::zeros);
        }
        Mesh::new(vertices, faces)
    }
}
