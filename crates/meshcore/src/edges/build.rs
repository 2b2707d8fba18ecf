//! Edge index construction.

use std::collections::HashMap;

use crate::error::{MeshError, Result};
use crate::mesh::{face_edge, Face};

use super::types::{EdgeId, EdgeIndex, EdgeKey, EdgeRecord, Incidence};

impl EdgeIndex {
    /// Build from a face list over `vertex_count` vertices.
    ///
    /// Complexity: O(F) expected (one hash lookup per face edge).
    pub fn build(faces: &[Face], vertex_count: usize) -> Result<Self> {
        let mut records: Vec<EdgeRecord> = Vec::with_capacity(faces.len() * 3 / 2 + 3);
        let mut lookup: HashMap<EdgeKey, EdgeId> = HashMap::with_capacity(faces.len() * 3 / 2 + 3);
        let mut degenerate = Vec::new();

        for (f, face) in faces.iter().enumerate() {
            for (corner, &index) in face.iter().enumerate() {
                if index as usize >= vertex_count {
                    return Err(MeshError::VertexIndexOutOfRange {
                        face: f,
                        corner,
                        index,
                        vertex_count,
                    });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[2] == face[0] {
                degenerate.push(f as u32);
                continue;
            }
            for slot in 0..3u8 {
                let (a, b) = face_edge(face, slot as usize);
                let key = EdgeKey::new(a, b);
                let inc = Incidence {
                    face: f as u32,
                    slot,
                };
                match lookup.get(&key) {
                    Some(id) => records[id.0].push(inc),
                    None => {
                        lookup.insert(key, EdgeId(records.len()));
                        records.push(EdgeRecord::new(key, inc));
                    }
                }
            }
        }

        let index = Self {
            records,
            lookup,
            degenerate,
        };
        let non_manifold = index.non_manifold_edges().count();
        if non_manifold > 0 {
            tracing::warn!(
                non_manifold,
                "edges with more than two faces; keeping the two lowest face ids"
            );
        }
        if !index.degenerate.is_empty() {
            tracing::warn!(
                degenerate = index.degenerate.len(),
                "faces with repeated vertices skipped"
            );
        }
        Ok(index)
    }
}
