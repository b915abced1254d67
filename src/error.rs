use crate::hypergraph::{EdgeId, VertexId};

/// Errors reported by hypergraph construction and algorithms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HypergraphError {
    /// A partition was requested with zero parts, or more parts than there are vertices.
    #[error("cannot split {vertices} vertices into {parts} parts")]
    InvalidPartitionCount { parts: usize, vertices: usize },

    /// A hyperedge referenced a vertex which is not in the hypergraph.
    #[error("vertex {0:?} is not in the hypergraph")]
    UnknownVertex(VertexId),

    /// A traversal was seeded with a hyperedge which is not in the hypergraph.
    #[error("hyperedge {0:?} is not in the hypergraph")]
    UnknownEdge(EdgeId),

    /// A hyperedge still references a vertex missing from the vertex collection.
    #[error("hyperedge {edge:?} references missing vertex {vertex:?}")]
    DanglingVertex { edge: EdgeId, vertex: VertexId },

    /// Random generation was asked to build hyperedges over an empty vertex set.
    #[error("cannot generate hyperedges without vertices")]
    EmptyVertexSet,
}

pub type Result<T, E = HypergraphError> = std::result::Result<T, E>;
