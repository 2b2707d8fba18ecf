//! Snapshot types produced by a topology build.

use crate::edges::EdgeIndex;

/// Compressed per-vertex neighbor lists.
///
/// Invariants:
/// - `offsets.len() == vertex_count + 1`, `offsets[0] == 0`, non-decreasing,
///   `offsets[vertex_count] == neighbors.len()`.
/// - `v`'s neighbors are `neighbors[offsets[v]..offsets[v + 1]]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborTable {
    pub(crate) offsets: Vec<u32>,
    pub(crate) neighbors: Vec<u32>,
}

impl NeighborTable {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Neighbors of `v` (rotationally ordered up to the ring's status).
    #[inline]
    pub fn of(&self, v: u32) -> &[u32] {
        let v = v as usize;
        &self.neighbors[self.offsets[v] as usize..self.offsets[v + 1] as usize]
    }

    #[inline]
    pub fn degree(&self, v: u32) -> usize {
        let v = v as usize;
        (self.offsets[v + 1] - self.offsets[v]) as usize
    }

    /// Raw offset array (`vertex_count + 1` entries).
    #[inline]
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Raw flat neighbor array.
    #[inline]
    pub fn flat(&self) -> &[u32] {
        &self.neighbors
    }
}

/// Outcome of the rotational ordering pass for one vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingStatus {
    /// No incident edges.
    Isolated,
    /// Ordering was disabled for this build.
    Unsorted,
    /// Fully ordered and the last neighbor wraps around to the first.
    Closed,
    /// Fully ordered fan that does not close (boundary vertex).
    Open,
    /// Ordering stopped at slice index `at`; `[at..]` is in insertion order.
    Gap { at: usize },
}

impl RingStatus {
    /// Length of the ordered prefix of a slice with `degree` entries.
    #[inline]
    pub fn ordered_len(&self, degree: usize) -> usize {
        match *self {
            RingStatus::Closed | RingStatus::Open => degree,
            RingStatus::Gap { at } => at,
            RingStatus::Isolated | RingStatus::Unsorted => 0,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, RingStatus::Closed | RingStatus::Open)
    }
}

/// Faces across each local edge slot; `None` for boundary or non-manifold edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceAdjacency {
    pub(crate) across: Vec<[Option<u32>; 3]>,
}

impl FaceAdjacency {
    #[inline]
    pub fn len(&self) -> usize {
        self.across.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.across.is_empty()
    }

    #[inline]
    pub fn of(&self, face: u32) -> [Option<u32>; 3] {
        self.across[face as usize]
    }

    /// Existing neighbor faces of `face`, in slot order.
    #[inline]
    pub fn neighbors(&self, face: u32) -> impl Iterator<Item = u32> + '_ {
        self.across[face as usize].iter().flatten().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[[Option<u32>; 3]] {
        &self.across
    }
}

/// Derived connectivity of one mesh. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Topology {
    pub(crate) edges: EdgeIndex,
    pub(crate) neighbors: NeighborTable,
    pub(crate) rings: Vec<RingStatus>,
    pub(crate) face_adjacency: FaceAdjacency,
}

impl Topology {
    #[inline]
    pub fn edges(&self) -> &EdgeIndex {
        &self.edges
    }

    #[inline]
    pub fn neighbors(&self) -> &NeighborTable {
        &self.neighbors
    }

    #[inline]
    pub fn rings(&self) -> &[RingStatus] {
        &self.rings
    }

    #[inline]
    pub fn ring(&self, v: u32) -> RingStatus {
        self.rings[v as usize]
    }

    #[inline]
    pub fn face_adjacency(&self) -> &FaceAdjacency {
        &self.face_adjacency
    }

    /// Vertices whose ordering pass stopped early.
    pub fn gaps(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.rings.iter().enumerate().filter_map(|(v, r)| match *r {
            RingStatus::Gap { at } => Some((v as u32, at)),
            _ => None,
        })
    }
}
