//! Random hypergraph generation.
use crate::error::{HypergraphError, Result};
use crate::hypergraph::Hypergraph;

use rand::Rng;
use tracing::instrument;

/// Parameters for [`random_hypergraph`].
#[derive(Debug, Clone)]
pub struct RandomConfig {
    /// Number of vertices to create.
    /// Default: 10.
    pub vertex_count: usize,
    /// Number of hyperedges to create.
    /// Default: 5.
    pub edge_count: usize,
    /// Lower bound on the number of vertex references per hyperedge.
    /// Default: 2.
    pub min_edge_size: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            edge_count: 5,
            min_edge_size: 2,
        }
    }
}

/// Build a hypergraph with `config.vertex_count` vertices and `config.edge_count` hyperedges.
///
/// Each hyperedge has `max(min_edge_size, r)` references for `r` uniform in
/// `0..vertex_count`, each drawn uniformly with replacement from the vertices, so hyperedges
/// may repeat a vertex.
///
/// # Errors
///
/// [`HypergraphError::EmptyVertexSet`] if hyperedges are requested over zero vertices.
#[instrument(level = "debug", skip(rng))]
pub fn random_hypergraph<R: Rng>(config: &RandomConfig, rng: &mut R) -> Result<Hypergraph> {
    let RandomConfig {
        vertex_count,
        edge_count,
        min_edge_size,
    } = *config;

    if vertex_count == 0 && edge_count > 0 {
        return Err(HypergraphError::EmptyVertexSet);
    }

    let mut h = Hypergraph::empty();
    let vertices: Vec<_> = (0..vertex_count).map(|_| h.add_vertex()).collect();

    for _ in 0..edge_count {
        let size = min_edge_size.max(rng.gen_range(0..vertex_count));
        let members: Vec<_> = (0..size)
            .map(|_| vertices[rng.gen_range(0..vertex_count)])
            .collect();
        h.add_hyperedge(members)?;
    }

    Ok(h)
}
