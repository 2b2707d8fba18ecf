//! Boundary extraction: edges with exactly one incident face.
//!
//! Edges are oriented along their single face, so on a consistently wound
//! mesh every loop runs with the surface on its left.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::edges::EdgeKey;
use crate::mesh::{face_edge, Mesh};

/// Boundary vertices chained edge to edge.
///
/// For a closed loop the edge from the last vertex back to the first is
/// implied and not repeated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryLoop {
    pub vertices: Vec<u32>,
    pub closed: bool,
}

impl BoundaryLoop {
    /// Number of boundary edges covered.
    #[inline]
    pub fn edge_count(&self) -> usize {
        if self.closed {
            self.vertices.len()
        } else {
            self.vertices.len().saturating_sub(1)
        }
    }
}

/// Boundary edges as position pairs, in edge index order. O(E).
pub fn boundary_edges(mesh: &Mesh) -> Vec<[Vector3<f64>; 2]> {
    directed_boundary(mesh)
        .into_iter()
        .map(|(a, b)| [mesh.position(a), mesh.position(b)])
        .collect()
}

/// Boundary edges as undirected keys, in edge index order.
pub fn boundary_edge_keys(mesh: &Mesh) -> Vec<EdgeKey> {
    mesh.edges().boundary_edges().map(|r| r.key).collect()
}

/// Chain boundary edges into loops by shared endpoints.
///
/// Chains start at vertices with more outgoing than incoming boundary edges,
/// so open chains are walked from their beginning. At branching vertices the
/// first unused edge in index order is taken.
pub fn boundary_loops(mesh: &Mesh) -> Vec<BoundaryLoop> {
    let directed = directed_boundary(mesh);
    let mut outgoing: HashMap<u32, Vec<usize>> = HashMap::new();
    let mut balance: HashMap<u32, i64> = HashMap::new();
    for (i, &(a, b)) in directed.iter().enumerate() {
        outgoing.entry(a).or_default().push(i);
        *balance.entry(a).or_default() += 1;
        *balance.entry(b).or_default() -= 1;
    }

    let mut order: Vec<usize> = (0..directed.len())
        .filter(|&i| balance[&directed[i].0] > 0)
        .collect();
    order.extend((0..directed.len()).filter(|&i| balance[&directed[i].0] <= 0));

    let mut used = vec![false; directed.len()];
    let mut loops = Vec::new();
    for start_edge in order {
        if used[start_edge] {
            continue;
        }
        let start = directed[start_edge].0;
        let mut vertices = vec![start];
        let mut cur = start_edge;
        let closed = loop {
            used[cur] = true;
            let b = directed[cur].1;
            if b == start {
                break true;
            }
            vertices.push(b);
            let next = outgoing
                .get(&b)
                .and_then(|out| out.iter().copied().find(|&e| !used[e]));
            match next {
                Some(e) => cur = e,
                None => break false,
            }
        };
        loops.push(BoundaryLoop { vertices, closed });
    }
    tracing::debug!(
        edges = directed.len(),
        loops = loops.len(),
        "boundary loops chained"
    );
    loops
}

fn directed_boundary(mesh: &Mesh) -> Vec<(u32, u32)> {
    let faces = mesh.faces();
    mesh.edges()
        .boundary_edges()
        .filter_map(|r| r.first())
        .map(|inc| face_edge(&faces[inc.face as usize], inc.slot as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Vertex;
    use crate::shapes;
    use proptest::prelude::*;

    #[test]
    fn closed_solids_have_no_boundary() {
        for mesh in [
            shapes::tetrahedron().unwrap(),
            shapes::octahedron().unwrap(),
            shapes::cube(2.0).unwrap(),
            shapes::two_islands().unwrap(),
        ] {
            assert!(boundary_edges(&mesh).is_empty());
            assert!(boundary_edge_keys(&mesh).is_empty());
            assert!(boundary_loops(&mesh).is_empty());
        }
    }

    #[test]
    fn grid_boundary_is_one_ccw_loop() {
        let mesh = shapes::grid(3, 2, 1.0).unwrap();
        assert_eq!(boundary_edges(&mesh).len(), 10);
        let loops = boundary_loops(&mesh);
        assert_eq!(loops.len(), 1);
        let l = &loops[0];
        assert!(l.closed);
        assert_eq!(l.edge_count(), 10);
        // shoelace: positive area means counter-clockwise from +z
        let n = l.vertices.len();
        let area: f64 = (0..n)
            .map(|i| {
                let p = mesh.position(l.vertices[i]);
                let q = mesh.position(l.vertices[(i + 1) % n]);
                p.x * q.y - q.x * p.y
            })
            .sum::<f64>()
            * 0.5;
        assert!((area - 6.0).abs() < 1e-12);
    }

    #[test]
    fn single_triangle_is_its_own_loop() {
        let v = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]
            .iter()
            .map(|&(x, y)| Vertex::new(Vector3::new(x, y, 0.0), Vector3::z()))
            .collect();
        let mesh = Mesh::new(v, vec![[0, 1, 2]]).unwrap();
        let loops = boundary_loops(&mesh);
        assert_eq!(loops, vec![BoundaryLoop { vertices: vec![1, 2, 0], closed: true }]);
    }

    #[test]
    fn non_manifold_fin_leaves_an_open_chain() {
        // three faces on edge (0, 1)
        let p = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.5, 1.0, 0.0),
            Vector3::new(0.5, 0.0, 1.0),
            Vector3::new(0.5, -1.0, 0.0),
        ];
        let v = p.iter().map(|&x| Vertex::new(x, Vector3::z())).collect();
        let mesh = Mesh::new(v, vec![[0, 1, 2], [0, 1, 3], [1, 0, 4]]).unwrap();
        assert!(mesh.edges().is_non_manifold(0, 1));
        assert_eq!(boundary_edge_keys(&mesh).len(), 6);

        let loops = boundary_loops(&mesh);
        assert_eq!(loops.len(), 2);
        assert_eq!(loops[0], BoundaryLoop { vertices: vec![1, 2, 0, 4], closed: true });
        assert_eq!(loops[1], BoundaryLoop { vertices: vec![1, 3, 0], closed: false });
        let covered: usize = loops.iter().map(BoundaryLoop::edge_count).sum();
        assert_eq!(covered, 6);
    }

    #[test]
    fn cube_with_missing_side_has_square_hole() {
        let (v, mut f) = shapes::cube(1.0).unwrap().into_parts();
        f.truncate(10);
        let mesh = Mesh::new(v, f).unwrap();
        let loops = boundary_loops(&mesh);
        assert_eq!(loops.len(), 1);
        assert!(loops[0].closed);
        assert_eq!(loops[0].vertices.len(), 4);
    }

    proptest! {
        #[test]
        fn jittered_grid_boundary_forms_one_polyline(
            nx in 1usize..6, ny in 1usize..6, seed in 0u64..500,
        ) {
            let mesh = shapes::jittered_grid(nx, ny, 1.0, 0.2, seed).unwrap();
            let segments = boundary_edges(&mesh);
            prop_assert_eq!(segments.len(), 2 * (nx + ny));
            let loops = boundary_loops(&mesh);
            prop_assert_eq!(loops.len(), 1);
            prop_assert!(loops[0].closed);
            prop_assert_eq!(loops[0].edge_count(), segments.len());
        }
    }
}
