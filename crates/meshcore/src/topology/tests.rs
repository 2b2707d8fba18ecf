use super::*;
use crate::cfg::TopologyCfg;
use crate::mesh::{Face, Mesh, Vertex};
use crate::shapes;
use nalgebra::{vector, Vector3};

/// Closed ring: every consecutive pair (cyclically) spans a face with `v`.
fn assert_cyclic_fan(mesh: &Mesh, v: u32) {
    let ring = mesh.neighbors(v);
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        let shared = mesh
            .faces()
            .iter()
            .filter(|f| f.contains(&v) && f.contains(&a) && f.contains(&b))
            .count();
        assert_eq!(shared, 1, "vertex {v}: pair ({a},{b})");
    }
}

/// Hexagonal fan around vertex 0 with `+z` normals.
fn hex_fan() -> Mesh {
    let mut v = vec![Vertex::new(Vector3::zeros(), Vector3::z())];
    for k in 0..6 {
        let a = k as f64 * std::f64::consts::FRAC_PI_3;
        v.push(Vertex::new(vector![a.cos(), a.sin(), 0.0], Vector3::z()));
    }
    // deliberately shuffled face order
    let faces: Vec<Face> = vec![[0, 3, 4], [0, 1, 2], [0, 5, 6], [0, 2, 3], [0, 6, 1], [0, 4, 5]];
    Mesh::new(v, faces).unwrap()
}

#[test]
fn csr_offsets_are_prefix_sums() {
    let mesh = shapes::octahedron().unwrap();
    let t = mesh.neighbor_table();
    assert_eq!(t.offsets().len(), 7);
    assert_eq!(t.offsets()[0], 0);
    assert!(t.offsets().windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*t.offsets().last().unwrap() as usize, t.flat().len());
    // two entries per edge
    assert_eq!(t.flat().len(), 2 * mesh.edges().len());
    for v in 0..6 {
        assert_eq!(t.degree(v), 4);
    }
}

#[test]
fn interior_ring_is_closed_and_rotational() {
    let mesh = hex_fan();
    assert_eq!(mesh.ring(0), RingStatus::Closed);
    assert_cyclic_fan(&mesh, 0);
    // counter-clockwise seen from +z: successive angles increase mod 6
    let ring = mesh.neighbors(0);
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        assert_eq!(b, a % 6 + 1, "ring {ring:?}");
    }
}

#[test]
fn boundary_vertex_sweeps_open_fan() {
    let mesh = hex_fan();
    // outer vertex 1 sits on faces [0,1,2] and [0,6,1]
    assert_eq!(mesh.ring(1), RingStatus::Open);
    assert_eq!(mesh.neighbors(1), &[2, 0, 6]);
}

#[test]
fn flipped_normal_sorts_clockwise() {
    let mut v: Vec<Vertex> = hex_fan().vertices().to_vec();
    v[0].normal = -Vector3::z();
    let faces = hex_fan().faces().to_vec();
    let mesh = Mesh::new(v, faces).unwrap();
    assert_eq!(mesh.ring(0), RingStatus::Closed);
    let ring = mesh.neighbors(0);
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        assert_eq!(a, b % 6 + 1, "ring {ring:?}");
    }
}

#[test]
fn closed_solids_have_closed_rings() {
    for mesh in [
        shapes::tetrahedron().unwrap(),
        shapes::octahedron().unwrap(),
        shapes::cube(1.0).unwrap(),
    ] {
        for v in 0..mesh.vertex_count() as u32 {
            assert_eq!(mesh.ring(v), RingStatus::Closed);
            assert_cyclic_fan(&mesh, v);
        }
    }
}

#[test]
fn zero_normal_reports_gap() {
    let mut v: Vec<Vertex> = hex_fan().vertices().to_vec();
    v[0].normal = Vector3::zeros();
    let faces = hex_fan().faces().to_vec();
    let mesh = Mesh::new(v, faces).unwrap();
    assert_eq!(mesh.ring(0), RingStatus::Gap { at: 1 });
    assert_eq!(mesh.topology().gaps().collect::<Vec<_>>(), vec![(0, 1)]);
    // the tail is left as inserted, still a permutation of the neighbors
    let mut ring = mesh.neighbors(0).to_vec();
    ring.sort_unstable();
    assert_eq!(ring, vec![1, 2, 3, 4, 5, 6]);
    assert!(validate(&mesh).is_ok());
}

#[test]
fn bowtie_vertex_reports_gap_after_first_fan() {
    // two triangles touching only at vertex 0
    let v = vec![
        Vertex::new(vector![0.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![1.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![1.0, 1.0, 0.0], Vector3::z()),
        Vertex::new(vector![-1.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![-1.0, -1.0, 0.0], Vector3::z()),
    ];
    let mesh = Mesh::new(v, vec![[0, 1, 2], [0, 3, 4]]).unwrap();
    assert_eq!(mesh.ring(0), RingStatus::Gap { at: 2 });
    assert_eq!(&mesh.neighbors(0)[..2], &[1, 2]);
}

#[test]
fn isolated_and_unsorted_statuses() {
    let mut v: Vec<Vertex> = hex_fan().vertices().to_vec();
    v.push(Vertex::new(vector![9.0, 9.0, 0.0], Vector3::z()));
    let faces = hex_fan().faces().to_vec();
    let mesh = Mesh::new(v.clone(), faces.clone()).unwrap();
    assert_eq!(mesh.ring(7), RingStatus::Isolated);
    assert!(mesh.neighbors(7).is_empty());

    let cfg = TopologyCfg {
        orient_rings: false,
        validate: true,
    };
    let raw = Mesh::with_cfg(v, faces, cfg).unwrap();
    assert_eq!(raw.ring(0), RingStatus::Unsorted);
    assert_eq!(raw.ring(7), RingStatus::Isolated);
}

#[test]
fn face_adjacency_pairs_slots() {
    // square split along (0,2)
    let v = vec![
        Vertex::new(vector![0.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![1.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![1.0, 1.0, 0.0], Vector3::z()),
        Vertex::new(vector![0.0, 1.0, 0.0], Vector3::z()),
    ];
    let mesh = Mesh::new(v, vec![[0, 1, 2], [0, 2, 3]]).unwrap();
    // edge (2,0) is slot 1 of face 0, edge (0,2) is slot 2 of face 1
    assert_eq!(mesh.face_neighbors(0), [None, Some(1), None]);
    assert_eq!(mesh.face_neighbors(1), [None, None, Some(0)]);
    assert_eq!(mesh.face_adjacency().neighbors(0).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn non_manifold_edges_have_no_face_neighbors() {
    let v = vec![
        Vertex::new(vector![0.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![1.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![0.5, 1.0, 0.0], Vector3::z()),
        Vertex::new(vector![0.5, -1.0, 0.0], Vector3::z()),
        Vertex::new(vector![0.5, 0.0, 1.0], Vector3::z()),
    ];
    let mesh = Mesh::new(v, vec![[0, 1, 2], [1, 0, 3], [0, 1, 4]]).unwrap();
    for f in 0..3 {
        assert_eq!(mesh.face_neighbors(f), [None, None, None]);
    }
}

#[test]
fn validate_flags_inconsistent_winding() {
    let v = vec![
        Vertex::new(vector![0.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![1.0, 0.0, 0.0], Vector3::z()),
        Vertex::new(vector![1.0, 1.0, 0.0], Vector3::z()),
        Vertex::new(vector![0.0, 1.0, 0.0], Vector3::z()),
    ];
    // second face repeats the direction 0 → 2
    let mesh = Mesh::new(v, vec![[0, 1, 2], [0, 3, 2]]).unwrap();
    let report = validate(&mesh);
    assert!(report
        .violations
        .contains(&Violation::InconsistentWinding {
            edge: crate::edges::EdgeKey::new(0, 2)
        }));
}

#[test]
fn validate_detects_tampered_tables() {
    let mesh = shapes::octahedron().unwrap();
    let mut topo = mesh.topology().clone();
    topo.neighbors.offsets[3] = 0;
    topo.face_adjacency.across[0] = [Some(7), None, None];
    let report = validate::check(&topo, mesh.faces(), mesh.vertex_count());
    assert!(report
        .violations
        .iter()
        .any(|v| matches!(v, Violation::OffsetsDecreasing { vertex: 2 })));
    assert!(report
        .violations
        .contains(&Violation::FaceAdjacencyNotSymmetric { face: 0, slot: 0 }));
}

#[test]
fn validated_meshes_pass() {
    for mesh in [
        hex_fan(),
        shapes::grid(4, 3, 0.5).unwrap(),
        shapes::jittered_grid(6, 6, 1.0, 0.2, 3).unwrap(),
        shapes::two_islands().unwrap(),
    ] {
        let report = validate(&mesh);
        assert!(report.is_ok(), "{:?}", report.violations);
        assert!(mesh.topology().rings().iter().all(|r| r.is_complete()));
    }
}
