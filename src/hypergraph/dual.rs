use super::{EdgeId, Hypergraph, VertexId};
use crate::error::{HypergraphError, Result};

use std::collections::HashMap;
use tracing::{error, instrument};

/// The dual of a hypergraph, together with the correspondence between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dual {
    pub hypergraph: Hypergraph,
    /// Original hyperedge ↦ the dual vertex standing for it.
    pub vertex_of_edge: HashMap<EdgeId, VertexId>,
    /// Original vertex ↦ the dual hyperedge standing for it.
    pub edge_of_vertex: HashMap<VertexId, EdgeId>,
}

impl Hypergraph {
    /// Construct the dual hypergraph, swapping the roles of vertices and hyperedges.
    ///
    /// The dual has one hyperedge per original vertex (in vertex order) and one vertex per
    /// original hyperedge (in hyperedge order). The dual hyperedge for vertex `v` lists, in
    /// hyperedge order, the dual vertex of every hyperedge containing `v`, repeated as often as
    /// `v` is repeated in that hyperedge.
    ///
    /// # Errors
    ///
    /// [`HypergraphError::DanglingVertex`] if a hyperedge references a vertex missing from
    /// the vertex collection.
    #[instrument(level = "debug", skip(self))]
    pub fn dual(&self) -> Result<Dual> {
        let mut hypergraph = Hypergraph::empty();

        // One dual edge slot per original vertex, filled in below.
        let mut slots: Vec<Vec<VertexId>> = vec![Vec::new(); self.vertices.len()];
        let slot_of_vertex: HashMap<VertexId, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id, i))
            .collect();

        let mut vertex_of_edge = HashMap::with_capacity(self.hyperedges.len());
        for hyperedge in &self.hyperedges {
            let dual_vertex = hypergraph.add_vertex();
            for &v in &hyperedge.vertices {
                let Some(&slot) = slot_of_vertex.get(&v) else {
                    error!(edge = hyperedge.id.0, vertex = v.0, "dangling vertex in dual");
                    return Err(HypergraphError::DanglingVertex {
                        edge: hyperedge.id,
                        vertex: v,
                    });
                };
                slots[slot].push(dual_vertex);
            }
            vertex_of_edge.insert(hyperedge.id, dual_vertex);
        }

        let mut edge_of_vertex = HashMap::with_capacity(self.vertices.len());
        for (vertex, members) in self.vertices.iter().zip(slots) {
            let dual_edge = hypergraph.add_hyperedge(members)?;
            edge_of_vertex.insert(vertex.id, dual_edge);
        }

        Ok(Dual {
            hypergraph,
            vertex_of_edge,
            edge_of_vertex,
        })
    }
}
