//! Small closed and open meshes for tests, benches and the CLI.
//!
//! Closed solids are centered at the origin with outward winding and radial
//! vertex normals. Grids lie in `z = 0` with `+z` normals, wound CCW from above.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::mesh::{Face, Mesh, Vertex};

/// Regular tetrahedron with circumradius `sqrt(3)`.
pub fn tetrahedron() -> Result<Mesh> {
    let p = vec![
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, -1.0, -1.0),
        Vector3::new(-1.0, 1.0, -1.0),
        Vector3::new(-1.0, -1.0, 1.0),
    ];
    let f = vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
    solid(p, f)
}

/// Octahedron with vertices at `±e_i`.
pub fn octahedron() -> Result<Mesh> {
    let p = vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, -1.0),
    ];
    let mut f = Vec::with_capacity(8);
    for &x in &[0u32, 1] {
        for &y in &[2u32, 3] {
            for &z in &[4u32, 5] {
                f.push([x, y, z]);
            }
        }
    }
    solid(p, f)
}

/// Axis-aligned cube `[-h, h]^3`, two triangles per side.
pub fn cube(h: f64) -> Result<Mesh> {
    let mut p = Vec::with_capacity(8);
    for i in 0..8u32 {
        let c = |bit: u32| if i & bit != 0 { h } else { -h };
        p.push(Vector3::new(c(1), c(2), c(4)));
    }
    // corners of each side, cyclic
    let sides: [[u32; 4]; 6] = [
        [0, 1, 3, 2],
        [4, 5, 7, 6],
        [0, 1, 5, 4],
        [2, 3, 7, 6],
        [0, 2, 6, 4],
        [1, 3, 7, 5],
    ];
    let mut f = Vec::with_capacity(12);
    for [a, b, c, d] in sides {
        f.push([a, b, c]);
        f.push([a, c, d]);
    }
    solid(p, f)
}

/// `nx × ny` cells of size `spacing`, two triangles per cell.
///
/// Vertex `(i, j)` has index `j * (nx + 1) + i`.
pub fn grid(nx: usize, ny: usize, spacing: f64) -> Result<Mesh> {
    let (p, f) = grid_parts(nx, ny, spacing);
    let vertices = p
        .into_iter()
        .map(|x| Vertex::new(x, Vector3::z()))
        .collect();
    Mesh::new(vertices, f)
}

/// Grid with seeded in-plane and height jitter, normals recomputed.
///
/// `amplitude` is a fraction of `spacing`, clamped to `[0, 0.2]` so no cell folds.
pub fn jittered_grid(nx: usize, ny: usize, spacing: f64, amplitude: f64, seed: u64) -> Result<Mesh> {
    let amp = amplitude.clamp(0.0, 0.2) * spacing;
    let mut rng = StdRng::seed_from_u64(seed);
    let (p, f) = grid_parts(nx, ny, spacing);
    let vertices = p
        .into_iter()
        .map(|x| {
            let d = if amp > 0.0 {
                Vector3::new(
                    rng.gen_range(-amp..=amp),
                    rng.gen_range(-amp..=amp),
                    rng.gen_range(-amp..=amp),
                )
            } else {
                Vector3::zeros()
            };
            Vertex::new(x + d, Vector3::z())
        })
        .collect();
    let mut mesh = Mesh::new(vertices, f)?;
    mesh.recompute_normals();
    Ok(mesh)
}

/// Two tetrahedra sharing nothing; the second is shifted by `+5` along x.
///
/// Vertices `0..4` form the first island, `4..8` the second.
pub fn two_islands() -> Result<Mesh> {
    let (v, f) = tetrahedron()?.into_parts();
    let n = v.len() as u32;
    let mut vertices = v.clone();
    vertices.extend(v.into_iter().map(|mut x| {
        x.position.x += 5.0;
        x
    }));
    let mut faces = f.clone();
    faces.extend(f.into_iter().map(|[a, b, c]| [a + n, b + n, c + n]));
    Mesh::new(vertices, faces)
}

fn grid_parts(nx: usize, ny: usize, spacing: f64) -> (Vec<Vector3<f64>>, Vec<Face>) {
    let stride = nx + 1;
    let mut p = Vec::with_capacity(stride * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            p.push(Vector3::new(i as f64 * spacing, j as f64 * spacing, 0.0));
        }
    }
    let mut f = Vec::with_capacity(2 * nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let v00 = (j * stride + i) as u32;
            let v10 = v00 + 1;
            let v01 = v00 + stride as u32;
            let v11 = v01 + 1;
            f.push([v00, v10, v11]);
            f.push([v00, v11, v01]);
        }
    }
    (p, f)
}

/// Flip faces to point away from the centroid; radial normals.
fn solid(p: Vec<Vector3<f64>>, mut f: Vec<Face>) -> Result<Mesh> {
    let center = p.iter().sum::<Vector3<f64>>() / p.len() as f64;
    for face in f.iter_mut() {
        let [a, b, c] = face.map(|i| p[i as usize]);
        let n = (b - a).cross(&(c - a));
        if n.dot(&((a + b + c) / 3.0 - center)) < 0.0 {
            face.swap(1, 2);
        }
    }
    let vertices = p
        .into_iter()
        .map(|x| Vertex::new(x, (x - center).normalize()))
        .collect();
    Mesh::new(vertices, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::validate;

    #[test]
    fn solids_are_closed_and_valid() {
        for (mesh, v, f) in [
            (tetrahedron().unwrap(), 4, 4),
            (octahedron().unwrap(), 6, 8),
            (cube(1.0).unwrap(), 8, 12),
        ] {
            assert_eq!(mesh.vertex_count(), v);
            assert_eq!(mesh.face_count(), f);
            assert!(mesh.edges().iter().all(|r| r.is_interior()));
            let report = validate(&mesh);
            assert!(report.is_ok(), "{:?}", report.violations);
        }
    }

    #[test]
    fn grid_counts() {
        let g = grid(3, 2, 1.0).unwrap();
        assert_eq!(g.vertex_count(), 12);
        assert_eq!(g.face_count(), 12);
        // E = V + F - 1 for a disk
        assert_eq!(g.edges().len(), 23);
    }

    #[test]
    fn jittered_grid_is_reproducible() {
        let a = jittered_grid(4, 4, 1.0, 0.2, 9).unwrap();
        let b = jittered_grid(4, 4, 1.0, 0.2, 9).unwrap();
        let c = jittered_grid(4, 4, 1.0, 0.2, 10).unwrap();
        assert_eq!(a.vertices(), b.vertices());
        assert_ne!(a.vertices(), c.vertices());
    }

    #[test]
    fn islands_do_not_share_vertices() {
        let m = two_islands().unwrap();
        assert_eq!(m.vertex_count(), 8);
        for r in m.edges().iter() {
            assert_eq!(r.key.lo < 4, r.key.hi < 4);
        }
    }
}
