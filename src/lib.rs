//! # Incidence Hypergraphs
//!
//! A [Hypergraph](crate::hypergraph::Hypergraph) generalises a graph by letting each edge (a
//! *hyperedge*) connect any number of vertices. For example, the hypergraph with vertices
//! `0..4` and hyperedges `{0, 1}` and `{1, 2, 3}` can be depicted as:
//!
//! ```text
//!     ┌───────┐
//!     │ 0   1 │
//!     └─────┼─┘
//!         ┌─┼─────────┐
//!         │ 1   2   3 │
//!         └───────────┘
//! ```
//!
//! Vertex `1` is *incident* to both hyperedges, so it has degree 2.
//!
//! # Example
//!
//! ```rust
//! use incidence_hypergraphs::prelude::*;
//!
//! let mut h = Hypergraph::empty();
//! let v: Vec<VertexId> = (0..4).map(|_| h.add_vertex()).collect();
//! let e0 = h.add_hyperedge([v[0], v[1]]).unwrap();
//! h.add_hyperedge([v[1], v[2], v[3]]).unwrap();
//!
//! assert_eq!(h.degree(v[1]), 2);
//! assert!(!h.is_simple_acyclic());
//!
//! // Depth-first traversal from the first hyperedge reaches every vertex.
//! assert_eq!(h.dfs(e0).unwrap().len(), 4);
//!
//! // Removing vertex 1 scrubs it from both hyperedges.
//! h.remove_vertex(v[1]);
//! assert_eq!(h.to_string(), "{ 0 } { 2 3 }");
//! assert!(h.is_simple_acyclic());
//! ```
//!
//! # Ownership
//!
//! A [`Hypergraph`](crate::hypergraph::Hypergraph) owns its vertices and hyperedges.
//! Hyperedges refer to vertices by [`VertexId`](crate::hypergraph::VertexId), which the
//! hypergraph hands out densely from zero and never reuses. Operations producing new
//! hypergraphs ([`sub_hypergraph`](crate::hypergraph::Hypergraph::sub_hypergraph),
//! [`dual`](crate::hypergraph::Hypergraph::dual)) return fully independent values.
//!
//! # Logging
//!
//! Algorithms emit [`tracing`] spans and events (traversal visits at `trace` level); install a
//! subscriber to see them.

pub mod error;
pub mod hypergraph;
pub mod partition;
pub mod random;
pub mod union_find;

pub mod prelude {
    //! The hypergraph types, errors and partitioning in one import.
    pub use crate::error::{HypergraphError, Result};
    pub use crate::hypergraph::*;
    pub use crate::partition::{block_partition, Partition, PartitionBlock};
    pub use crate::random::{random_hypergraph, RandomConfig};
}
