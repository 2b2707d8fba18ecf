//! Topology construction: CSR neighbor table, ring ordering, face adjacency.

use nalgebra::Vector3;

use crate::cfg::{TopologyCfg, ORIENT_EPS};
use crate::edges::EdgeIndex;
use crate::error::Result;
use crate::mesh::{Face, Vertex};

use super::types::{FaceAdjacency, NeighborTable, RingStatus, Topology};
use super::validate::check;

impl Topology {
    /// Build every derived structure from scratch.
    ///
    /// Fails only if a face references a vertex outside `vertices`.
    pub fn build(vertices: &[Vertex], faces: &[Face], cfg: TopologyCfg) -> Result<Self> {
        let edges = EdgeIndex::build(faces, vertices.len())?;
        let face_adjacency = face_adjacency(&edges, faces.len());
        let mut topo = Self {
            edges,
            neighbors: NeighborTable::default(),
            rings: Vec::new(),
            face_adjacency,
        };
        topo.refresh_rings(vertices, faces, cfg);
        tracing::debug!(
            vertices = vertices.len(),
            faces = faces.len(),
            edges = topo.edges.len(),
            gaps = topo.gaps().count(),
            "topology rebuilt"
        );
        if cfg.validate {
            let report = check(&topo, faces, vertices.len());
            if let Some(first) = report.violations.first() {
                tracing::warn!(
                    violations = report.len(),
                    first = ?first,
                    "topology validation failed"
                );
            }
        }
        Ok(topo)
    }

    /// Replace the neighbor table and ring statuses (edges and adjacency stay).
    ///
    /// Used when only normals changed, since ordering depends on them.
    pub(crate) fn refresh_rings(&mut self, vertices: &[Vertex], faces: &[Face], cfg: TopologyCfg) {
        let mut neighbors = neighbor_table(&self.edges, vertices.len());
        let rings = if cfg.orient_rings {
            order_rings(&mut neighbors, vertices, faces, &self.edges)
        } else {
            (0..vertices.len() as u32)
                .map(|v| {
                    if neighbors.degree(v) == 0 {
                        RingStatus::Isolated
                    } else {
                        RingStatus::Unsorted
                    }
                })
                .collect()
        };
        self.neighbors = neighbors;
        self.rings = rings;
    }
}

/// Classic two-pass CSR: count per endpoint, prefix-sum, then scatter.
fn neighbor_table(edges: &EdgeIndex, vertex_count: usize) -> NeighborTable {
    let mut offsets = vec![0u32; vertex_count + 1];
    for r in edges.iter() {
        offsets[r.key.lo as usize + 1] += 1;
        offsets[r.key.hi as usize + 1] += 1;
    }
    for v in 0..vertex_count {
        offsets[v + 1] += offsets[v];
    }
    let mut cursor: Vec<u32> = offsets[..vertex_count].to_vec();
    let mut neighbors = vec![0u32; offsets[vertex_count] as usize];
    for r in edges.iter() {
        let (a, b) = (r.key.lo as usize, r.key.hi as usize);
        neighbors[cursor[a] as usize] = r.key.hi;
        cursor[a] += 1;
        neighbors[cursor[b] as usize] = r.key.lo;
        cursor[b] += 1;
    }
    NeighborTable { offsets, neighbors }
}

fn order_rings(
    table: &mut NeighborTable,
    vertices: &[Vertex],
    faces: &[Face],
    edges: &EdgeIndex,
) -> Vec<RingStatus> {
    let mut rings = Vec::with_capacity(vertices.len());
    for v in 0..vertices.len() {
        let lo = table.offsets[v] as usize;
        let hi = table.offsets[v + 1] as usize;
        let ring = &mut table.neighbors[lo..hi];
        rings.push(order_ring(v as u32, ring, vertices, faces, edges));
    }
    rings
}

/// Greedy rotational sort of one slice. O(degree²).
fn order_ring(
    center: u32,
    ring: &mut [u32],
    vertices: &[Vertex],
    faces: &[Face],
    edges: &EdgeIndex,
) -> RingStatus {
    if ring.is_empty() {
        return RingStatus::Isolated;
    }
    if let Some(seed) = ring.iter().position(|&m| opens_fan(center, m, faces, edges)) {
        ring.swap(0, seed);
    }
    let p = vertices[center as usize].position;
    let n = vertices[center as usize].normal;
    let follows = |a: u32, b: u32| {
        wedge_exists(edges, faces, center, a, b)
            && turns_positive(
                &n,
                &p,
                &vertices[a as usize].position,
                &vertices[b as usize].position,
            )
    };
    for j in 1..ring.len() {
        let prev = ring[j - 1];
        match (j..ring.len()).find(|&k| follows(prev, ring[k])) {
            Some(k) => ring.swap(j, k),
            None => {
                tracing::debug!(
                    vertex = center,
                    at = j,
                    degree = ring.len(),
                    "incomplete neighbor ring"
                );
                return RingStatus::Gap { at: j };
            }
        }
    }
    if ring.len() >= 3 && follows(ring[ring.len() - 1], ring[0]) {
        RingStatus::Closed
    } else {
        RingStatus::Open
    }
}

/// `n · ((a - p) × (b - p)) > ORIENT_EPS`.
#[inline]
fn turns_positive(n: &Vector3<f64>, p: &Vector3<f64>, a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    n.dot(&(a - p).cross(&(b - p))) > ORIENT_EPS
}

/// True iff `(a, b)` is an edge of a retained face that also contains `center`.
pub(crate) fn wedge_exists(edges: &EdgeIndex, faces: &[Face], center: u32, a: u32, b: u32) -> bool {
    edges.get(a, b).is_some_and(|r| {
        r.incidences()
            .any(|inc| faces[inc.face as usize].contains(&center))
    })
}

/// `(center, m)` is a boundary edge whose only face runs `center → m`.
fn opens_fan(center: u32, m: u32, faces: &[Face], edges: &EdgeIndex) -> bool {
    let Some(r) = edges.get(center, m) else {
        return false;
    };
    if !r.is_boundary() {
        return false;
    }
    let Some(inc) = r.first() else {
        return false;
    };
    let face = &faces[inc.face as usize];
    face.iter()
        .position(|&c| c == center)
        .is_some_and(|c| face[(c + 1) % 3] == m)
}

/// Pair the two retained incidences of every interior edge.
fn face_adjacency(edges: &EdgeIndex, face_count: usize) -> FaceAdjacency {
    let mut across = vec![[None; 3]; face_count];
    for r in edges.iter().filter(|r| r.is_interior()) {
        if let (Some(a), Some(b)) = (r.first(), r.second()) {
            across[a.face as usize][a.slot as usize] = Some(b.face);
            across[b.face as usize][b.slot as usize] = Some(a.face);
        }
    }
    FaceAdjacency { across }
}
