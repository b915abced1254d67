use super::{Hypergraph, VertexId};

use tracing::instrument;

impl Hypergraph {
    /// An independent copy of this hypergraph with each vertex in `removals` removed.
    ///
    /// Removal follows [`Hypergraph::remove_vertex`]: the vertex is scrubbed from every
    /// hyperedge and no hyperedge is deleted. Ids absent from the graph are ignored, and ids in
    /// the copy match the original.
    #[instrument(level = "debug", skip(self))]
    pub fn sub_hypergraph(&self, removals: &[VertexId]) -> Hypergraph {
        let mut sub = self.clone();
        for &v in removals {
            sub.remove_vertex(v);
        }
        sub
    }
}
