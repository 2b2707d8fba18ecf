//! Edge keys, per-edge incidence records and the index container.

use std::collections::HashMap;

/// Unordered vertex pair stored as `(lo, hi)` with `lo <= hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub lo: u32,
    pub hi: u32,
}

impl EdgeKey {
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn contains(&self, v: u32) -> bool {
        self.lo == v || self.hi == v
    }

    /// The endpoint that is not `v` (`v` must be an endpoint).
    #[inline]
    pub fn other(&self, v: u32) -> u32 {
        if self.lo == v {
            self.hi
        } else {
            self.lo
        }
    }
}

/// Position of an edge record in `EdgeIndex` (first-seen order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

/// One face using an edge, and the local slot (opposite corner) it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Incidence {
    pub face: u32,
    pub slot: u8,
}

/// Incidence record; at most two incidences are retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub key: EdgeKey,
    pub(crate) incidences: [Option<Incidence>; 2],
    pub(crate) extra: u32,
}

impl EdgeRecord {
    pub(crate) fn new(key: EdgeKey, first: Incidence) -> Self {
        Self {
            key,
            incidences: [Some(first), None],
            extra: 0,
        }
    }

    pub(crate) fn push(&mut self, inc: Incidence) {
        if self.incidences[1].is_none() {
            self.incidences[1] = Some(inc);
        } else {
            self.extra += 1;
        }
    }

    /// True number of faces using this edge, including dropped ones.
    #[inline]
    pub fn incidence_count(&self) -> usize {
        self.incidences.iter().flatten().count() + self.extra as usize
    }

    /// Retained incidences (one or two).
    #[inline]
    pub fn incidences(&self) -> impl Iterator<Item = Incidence> + '_ {
        self.incidences.iter().flatten().copied()
    }

    #[inline]
    pub fn first(&self) -> Option<Incidence> {
        self.incidences[0]
    }

    #[inline]
    pub fn second(&self) -> Option<Incidence> {
        self.incidences[1]
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.incidence_count() == 1
    }

    #[inline]
    pub fn is_interior(&self) -> bool {
        self.incidence_count() == 2
    }

    #[inline]
    pub fn is_non_manifold(&self) -> bool {
        self.incidence_count() > 2
    }
}

/// Edge index over a face list.
///
/// Invariants:
/// - `records[lookup[k].0].key == k` for every key.
/// - Every retained incidence names a face whose edge at `slot` is `key`.
#[derive(Clone, Debug, Default)]
pub struct EdgeIndex {
    pub(crate) records: Vec<EdgeRecord>,
    pub(crate) lookup: HashMap<EdgeKey, EdgeId>,
    pub(crate) degenerate: Vec<u32>,
}

impl EdgeIndex {
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn id(&self, a: u32, b: u32) -> Option<EdgeId> {
        self.lookup.get(&EdgeKey::new(a, b)).copied()
    }

    #[inline]
    pub fn get(&self, a: u32, b: u32) -> Option<&EdgeRecord> {
        self.id(a, b).map(|id| &self.records[id.0])
    }

    #[inline]
    pub fn record(&self, id: EdgeId) -> &EdgeRecord {
        &self.records[id.0]
    }

    #[inline]
    pub fn contains(&self, a: u32, b: u32) -> bool {
        self.lookup.contains_key(&EdgeKey::new(a, b))
    }

    /// True iff the edge exists and exactly one face uses it.
    #[inline]
    pub fn is_boundary(&self, a: u32, b: u32) -> bool {
        self.get(a, b).is_some_and(EdgeRecord::is_boundary)
    }

    #[inline]
    pub fn is_interior(&self, a: u32, b: u32) -> bool {
        self.get(a, b).is_some_and(EdgeRecord::is_interior)
    }

    #[inline]
    pub fn is_non_manifold(&self, a: u32, b: u32) -> bool {
        self.get(a, b).is_some_and(EdgeRecord::is_non_manifold)
    }

    /// Number of faces using the edge (0 when absent).
    #[inline]
    pub fn incidence_count(&self, a: u32, b: u32) -> usize {
        self.get(a, b).map_or(0, EdgeRecord::incidence_count)
    }

    /// Records in first-seen order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, EdgeRecord> {
        self.records.iter()
    }

    pub fn boundary_edges(&self) -> impl Iterator<Item = &EdgeRecord> + '_ {
        self.records.iter().filter(|r| r.is_boundary())
    }

    pub fn non_manifold_edges(&self) -> impl Iterator<Item = &EdgeRecord> + '_ {
        self.records.iter().filter(|r| r.is_non_manifold())
    }

    /// Faces skipped because they repeat a vertex index.
    #[inline]
    pub fn degenerate_faces(&self) -> &[u32] {
        &self.degenerate
    }
}
