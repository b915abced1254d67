use super::Hypergraph;

impl Hypergraph {
    /// Returns true if no vertex lies in more than one hyperedge.
    ///
    /// This is a simplified check (maximum degree at most 1), not full Berge-acyclicity, which
    /// would look for cycles in the bipartite incidence graph. Every hypergraph passing this
    /// check is Berge-acyclic, but not conversely.
    pub fn is_simple_acyclic(&self) -> bool {
        self.vertices.iter().all(|v| self.degree(v.id) <= 1)
    }
}
