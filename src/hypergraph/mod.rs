//! The [`Hypergraph`] aggregate and the algorithms defined on it.
//!
//! `object` holds the data model and incidence queries; each sibling module adds one
//! family of algorithms as further methods on [`Hypergraph`].
mod acyclic;
mod coloring;
mod components;
mod display;
mod dual;
mod object;
mod subgraph;
mod traversal;

pub use coloring::Coloring;
pub use dual::Dual;
pub use object::*;
pub use traversal::Visited;
