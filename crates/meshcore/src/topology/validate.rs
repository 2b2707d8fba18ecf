//! Structural invariant checks over a built topology.
//!
//! The report doubles as a runtime guard (see `TopologyCfg::validate`) and as
//! a test oracle. An empty report means every check passed; ring gaps are not
//! violations as long as the ordered prefix is consistent.

use crate::edges::EdgeKey;
use crate::mesh::{face_edge, Face, Mesh};

use super::build::wedge_exists;
use super::types::{RingStatus, Topology};

/// One broken invariant, with the offending ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    OffsetsLength { expected: usize, actual: usize },
    OffsetsStart { value: u32 },
    OffsetsDecreasing { vertex: u32 },
    OffsetsTotal { expected: usize, actual: usize },
    /// `neighbor` is listed for `vertex` but no edge joins them.
    NeighborNotAnEdge { vertex: u32, neighbor: u32 },
    /// `neighbor` is listed for `vertex` but not the other way round.
    NeighborNotSymmetric { vertex: u32, neighbor: u32 },
    /// Ordered ring entries `index - 1` and `index` do not span a face with
    /// `vertex`. `index == 0` refers to the wrap-around pair of a closed ring.
    RingNotAdjacent { vertex: u32, index: usize },
    /// The face's edge at `slot` is not `edge`.
    SlotMismatch { face: u32, slot: u8, edge: EdgeKey },
    /// `face` lists a neighbor across `slot` that does not list it back.
    FaceAdjacencyNotSymmetric { face: u32, slot: u8 },
    /// Both faces of an interior edge traverse it in the same direction.
    InconsistentWinding { edge: EdgeKey },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check every topology invariant of `mesh`.
pub fn validate(mesh: &Mesh) -> ValidationReport {
    check(mesh.topology(), mesh.faces(), mesh.vertex_count())
}

pub(crate) fn check(topo: &Topology, faces: &[Face], vertex_count: usize) -> ValidationReport {
    let mut out = Vec::new();
    if check_offsets(topo, vertex_count, &mut out) {
        check_neighbors(topo, vertex_count, &mut out);
        check_rings(topo, faces, vertex_count, &mut out);
    }
    check_slots(topo, faces, &mut out);
    check_face_adjacency(topo, &mut out);
    ValidationReport { violations: out }
}

/// Returns false when the table shape is too broken to index.
fn check_offsets(topo: &Topology, vertex_count: usize, out: &mut Vec<Violation>) -> bool {
    let offsets = topo.neighbors.offsets();
    if offsets.len() != vertex_count + 1 {
        out.push(Violation::OffsetsLength {
            expected: vertex_count + 1,
            actual: offsets.len(),
        });
        return false;
    }
    let mut ok = true;
    if offsets[0] != 0 {
        out.push(Violation::OffsetsStart { value: offsets[0] });
        ok = false;
    }
    for v in 0..vertex_count {
        if offsets[v + 1] < offsets[v] {
            out.push(Violation::OffsetsDecreasing { vertex: v as u32 });
            ok = false;
        }
    }
    let total = topo.neighbors.flat().len();
    if offsets[vertex_count] as usize != total {
        out.push(Violation::OffsetsTotal {
            expected: total,
            actual: offsets[vertex_count] as usize,
        });
        ok = false;
    }
    ok
}

fn check_neighbors(topo: &Topology, vertex_count: usize, out: &mut Vec<Violation>) {
    for v in 0..vertex_count as u32 {
        for &w in topo.neighbors.of(v) {
            if !topo.edges.contains(v, w) {
                out.push(Violation::NeighborNotAnEdge {
                    vertex: v,
                    neighbor: w,
                });
            }
            if (w as usize) >= vertex_count || !topo.neighbors.of(w).contains(&v) {
                out.push(Violation::NeighborNotSymmetric {
                    vertex: v,
                    neighbor: w,
                });
            }
        }
    }
}

fn check_rings(topo: &Topology, faces: &[Face], vertex_count: usize, out: &mut Vec<Violation>) {
    for v in 0..vertex_count as u32 {
        let ring = topo.neighbors.of(v);
        let status = topo.rings.get(v as usize).copied().unwrap_or(RingStatus::Unsorted);
        let ordered = status.ordered_len(ring.len()).min(ring.len());
        for i in 1..ordered {
            if !wedge_exists(&topo.edges, faces, v, ring[i - 1], ring[i]) {
                out.push(Violation::RingNotAdjacent {
                    vertex: v,
                    index: i,
                });
            }
        }
        if status == RingStatus::Closed
            && !wedge_exists(&topo.edges, faces, v, ring[ring.len() - 1], ring[0])
        {
            out.push(Violation::RingNotAdjacent {
                vertex: v,
                index: 0,
            });
        }
    }
}

fn check_slots(topo: &Topology, faces: &[Face], out: &mut Vec<Violation>) {
    for r in topo.edges.iter() {
        for inc in r.incidences() {
            let (a, b) = face_edge(&faces[inc.face as usize], inc.slot as usize);
            if EdgeKey::new(a, b) != r.key {
                out.push(Violation::SlotMismatch {
                    face: inc.face,
                    slot: inc.slot,
                    edge: r.key,
                });
            }
        }
        if let (Some(x), Some(y)) = (r.first(), r.second()) {
            let dx = face_edge(&faces[x.face as usize], x.slot as usize);
            let dy = face_edge(&faces[y.face as usize], y.slot as usize);
            if r.is_interior() && dx == dy {
                out.push(Violation::InconsistentWinding { edge: r.key });
            }
        }
    }
}

fn check_face_adjacency(topo: &Topology, out: &mut Vec<Violation>) {
    let adj = &topo.face_adjacency;
    for f in 0..adj.len() as u32 {
        for (slot, across) in adj.of(f).iter().enumerate() {
            let Some(g) = *across else {
                continue;
            };
            let back = (g as usize) < adj.len() && adj.of(g).contains(&Some(f));
            if !back {
                out.push(Violation::FaceAdjacencyNotSymmetric {
                    face: f,
                    slot: slot as u8,
                });
            }
        }
    }
}
