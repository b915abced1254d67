use super::{Hypergraph, VertexId};
use crate::union_find::UnionFind;

use std::collections::HashMap;
use tracing::instrument;

impl Hypergraph {
    /// Connected components of the hyperedge-incidence graph.
    ///
    /// Each component lists its vertices in insertion order, and components are ordered by
    /// their first vertex. Isolated vertices form singleton components.
    #[instrument(level = "debug", skip(self))]
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let index: HashMap<VertexId, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id, i))
            .collect();

        let mut uf = UnionFind::new(self.vertices.len());
        for hyperedge in &self.hyperedges {
            let mut members = hyperedge.vertices.iter().filter_map(|v| index.get(v));
            if let Some(&first) = members.next() {
                for &other in members {
                    uf.union(first, other);
                }
            }
        }

        uf.groups()
            .into_iter()
            .map(|group| group.into_iter().map(|i| self.vertices[i].id).collect())
            .collect()
    }

    /// Whether the hyperedge-incidence graph is connected. The empty hypergraph is connected.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }
}
