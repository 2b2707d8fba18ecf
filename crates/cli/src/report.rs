//! JSON-serializable summaries of library query results.

use meshcore::boundary::{boundary_edge_keys, boundary_loops};
use meshcore::curve::VertexCurve;
use meshcore::path::Path;
use meshcore::pick::MeshHit;
use meshcore::topology::validate;
use meshcore::{Mesh, RingStatus};
use nalgebra::Vector3;
use serde::Serialize;

fn arr(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct RingCounts {
    pub isolated: usize,
    pub unsorted: usize,
    pub closed: usize,
    pub open: usize,
    pub gap: usize,
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub vertices: usize,
    pub faces: usize,
    pub edges: usize,
    pub boundary_edges: usize,
    pub non_manifold_edges: usize,
    pub degenerate_faces: usize,
    pub rings: RingCounts,
    pub bounds: Option<[[f64; 3]; 2]>,
    pub radius: Option<f64>,
}

impl Stats {
    pub fn of(mesh: &Mesh) -> Self {
        let edges = mesh.edges();
        let mut rings = RingCounts::default();
        for status in mesh.topology().rings() {
            match status {
                RingStatus::Isolated => rings.isolated += 1,
                RingStatus::Unsorted => rings.unsorted += 1,
                RingStatus::Closed => rings.closed += 1,
                RingStatus::Open => rings.open += 1,
                RingStatus::Gap { .. } => rings.gap += 1,
            }
        }
        let bounds = mesh.bounds();
        Self {
            vertices: mesh.vertex_count(),
            faces: mesh.face_count(),
            edges: edges.len(),
            boundary_edges: edges.boundary_edges().count(),
            non_manifold_edges: edges.non_manifold_edges().count(),
            degenerate_faces: edges.degenerate_faces().len(),
            rings,
            bounds: bounds.map(|b| [arr(&b.min), arr(&b.max)]),
            radius: bounds.map(|b| b.radius()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub dual: bool,
    pub from: usize,
    pub to: usize,
    pub reachable: bool,
    /// `null` when unreachable.
    pub length: Option<f64>,
    pub nodes: Vec<u32>,
}

impl PathReport {
    pub fn new(dual: bool, from: usize, to: usize, path: Path) -> Self {
        let reachable = path.is_reachable();
        Self {
            dual,
            from,
            to,
            reachable,
            length: reachable.then_some(path.length),
            nodes: path.nodes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PickReport {
    pub face: u32,
    pub t: f64,
    pub u: f64,
    pub v: f64,
    pub point: [f64; 3],
    pub nearest_vertex: u32,
}

impl PickReport {
    pub fn new(mesh: &Mesh, hit: &MeshHit) -> Self {
        Self {
            face: hit.face,
            t: hit.hit.t,
            u: hit.hit.u,
            v: hit.hit.v,
            point: arr(&hit.point(mesh)),
            nearest_vertex: hit.nearest_vertex(mesh),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoopReport {
    pub closed: bool,
    pub vertices: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct BoundaryReport {
    pub edges: usize,
    pub loops: Vec<LoopReport>,
}

impl BoundaryReport {
    pub fn of(mesh: &Mesh) -> Self {
        Self {
            edges: boundary_edge_keys(mesh).len(),
            loops: boundary_loops(mesh)
                .into_iter()
                .map(|l| LoopReport {
                    closed: l.closed,
                    vertices: l.vertices,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub vertices: Vec<u32>,
    pub length: f64,
    pub turning_angles: Vec<f64>,
    pub inconsistent: Vec<usize>,
}

impl CurveReport {
    pub fn new(mesh: &Mesh, curve: VertexCurve) -> Self {
        Self {
            length: curve.length(mesh),
            turning_angles: curve.turning_angles(mesh),
            inconsistent: curve.check_consistency(mesh),
            vertices: curve.vertices,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub ok: bool,
    pub violations: Vec<String>,
}

impl ValidateReport {
    pub fn of(mesh: &Mesh) -> Self {
        let report = validate(mesh);
        Self {
            ok: report.is_ok(),
            violations: report.violations.iter().map(|v| format!("{v:?}")).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshcore::shapes;

    #[test]
    fn cube_stats() {
        let s = Stats::of(&shapes::cube(1.0).unwrap());
        assert_eq!((s.vertices, s.faces, s.edges), (8, 12, 18));
        assert_eq!(s.boundary_edges, 0);
        assert_eq!(s.rings.closed, 8);
        assert_eq!(s.bounds, Some([[-1.0; 3], [1.0; 3]]));
    }

    #[test]
    fn unreachable_path_serializes_null_length() {
        let mesh = shapes::two_islands().unwrap();
        let r = PathReport::new(false, 0, 5, mesh.shortest_path(0, 5).unwrap());
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["reachable"], false);
        assert!(v["length"].is_null());
        assert_eq!(v["nodes"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn grid_boundary_report() {
        let r = BoundaryReport::of(&shapes::grid(2, 2, 1.0).unwrap());
        assert_eq!(r.edges, 8);
        assert_eq!(r.loops.len(), 1);
        assert!(r.loops[0].closed);
    }
}
