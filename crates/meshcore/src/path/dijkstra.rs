//! Lazy-deletion Dijkstra with path reconstruction.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::graphs::SearchGraph;

/// Node sequence (source excluded, target included) and its total weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub nodes: Vec<u32>,
    pub length: f64,
}

impl Path {
    fn trivial() -> Self {
        Self {
            nodes: Vec::new(),
            length: 0.0,
        }
    }

    fn unreachable() -> Self {
        Self {
            nodes: Vec::new(),
            length: f64::INFINITY,
        }
    }

    /// False only when the target lies in another component.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.length.is_finite()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Heap entry; duplicates are allowed and skipped when stale.
#[derive(Clone, Copy, Debug)]
struct Entry {
    node: u32,
    dist: f64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal distances pop the lower node id first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Single-source, single-target shortest path on `graph`.
///
/// Complexity: O((V + E) log V) with lazy deletion.
/// Preconditions: `src` and `dst` are `< graph.node_count()`; weights are `>= 0`.
pub fn shortest_path<G: SearchGraph>(graph: &G, src: u32, dst: u32) -> Path {
    if src == dst {
        return Path::trivial();
    }
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![u32::MAX; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[src as usize] = 0.0;
    heap.push(Entry { node: src, dist: 0.0 });
    while let Some(Entry { node, dist: d }) = heap.pop() {
        if visited[node as usize] {
            continue;
        }
        visited[node as usize] = true;
        if node == dst {
            break;
        }
        graph.for_each_neighbor(node, |next, w| {
            let i = next as usize;
            if visited[i] {
                return;
            }
            let nd = d + w;
            if nd < dist[i] {
                dist[i] = nd;
                prev[i] = node;
                heap.push(Entry { node: next, dist: nd });
            }
        });
    }

    if !visited[dst as usize] {
        return Path::unreachable();
    }
    let mut nodes = Vec::new();
    let mut cur = dst;
    while cur != src {
        nodes.push(cur);
        cur = prev[cur as usize];
    }
    nodes.reverse();
    Path {
        nodes,
        length: dist[dst as usize],
    }
}
