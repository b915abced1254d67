//! Depth- and breadth-first traversal of the hyperedge-incidence graph, where two vertices
//! are adjacent when some hyperedge contains both.
use super::{EdgeId, Hypergraph, VertexId};
use crate::error::{HypergraphError, Result};

use std::collections::{HashSet, VecDeque};
use tracing::{instrument, trace};

/// The vertices a traversal has reached, in visitation order.
///
/// A `Visited` can be passed to several traversals in turn; vertices visited by an earlier
/// call are skipped by later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visited {
    seen: HashSet<VertexId>,
    order: Vec<VertexId>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.seen.contains(&v)
    }

    /// Visitation order.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_order(self) -> Vec<VertexId> {
        self.order
    }

    // Marks `v`, returning false if it was already visited.
    fn visit(&mut self, v: VertexId) -> bool {
        if !self.seen.insert(v) {
            return false;
        }
        self.order.push(v);
        true
    }
}

// Explicit DFS stack frames. An `Edge` frame walks the vertices of a hyperedge; a `Vertex`
// frame walks the hyperedges incident to a newly visited vertex.
enum Frame {
    Edge { edge: usize, pos: usize },
    Vertex { vertex: VertexId, next_edge: usize },
}

impl Hypergraph {
    /// Depth-first traversal from hyperedge `start`, returning the visitation order.
    ///
    /// # Errors
    ///
    /// [`HypergraphError::UnknownEdge`] if `start` is not in this hypergraph.
    pub fn dfs(&self, start: EdgeId) -> Result<Vec<VertexId>> {
        let mut visited = Visited::new();
        self.dfs_from(start, &mut visited)?;
        Ok(visited.into_order())
    }

    /// Depth-first traversal from hyperedge `start`, accumulating into `visited`.
    ///
    /// For each unvisited vertex of the hyperedge, in stored order: mark it, then descend into
    /// every hyperedge containing it, in hyperedge order. The visitation order is that of the
    /// recursive formulation, but the recursion is kept on an explicit stack.
    ///
    /// # Errors
    ///
    /// [`HypergraphError::UnknownEdge`] if `start` is not in this hypergraph.
    #[instrument(level = "debug", skip(self, visited))]
    pub fn dfs_from(&self, start: EdgeId, visited: &mut Visited) -> Result<()> {
        let root = self
            .hyperedges
            .iter()
            .position(|h| h.id == start)
            .ok_or(HypergraphError::UnknownEdge(start))?;

        let mut stack = vec![Frame::Edge { edge: root, pos: 0 }];
        while let Some(top) = stack.last_mut() {
            let next = match top {
                Frame::Edge { edge, pos } => {
                    let vertices = &self.hyperedges[*edge].vertices;
                    match vertices.get(*pos) {
                        None => None,
                        Some(&v) => {
                            *pos += 1;
                            if visited.visit(v) {
                                trace!(vertex = v.0, "visited via DFS");
                                Some(Frame::Vertex {
                                    vertex: v,
                                    next_edge: 0,
                                })
                            } else {
                                continue;
                            }
                        }
                    }
                }
                Frame::Vertex { vertex, next_edge } => {
                    let found = self.hyperedges[*next_edge..]
                        .iter()
                        .position(|h| h.contains(*vertex))
                        .map(|offset| *next_edge + offset);
                    found.map(|edge| {
                        *next_edge = edge + 1;
                        Frame::Edge { edge, pos: 0 }
                    })
                }
            };

            match next {
                Some(frame) => stack.push(frame),
                None => {
                    stack.pop();
                }
            }
        }
        Ok(())
    }

    /// Breadth-first traversal seeded with the first hyperedge, returning the visitation
    /// order. Empty if there are no hyperedges.
    pub fn bfs(&self) -> Vec<VertexId> {
        let mut visited = Visited::new();
        self.bfs_into(&mut visited);
        visited.into_order()
    }

    /// Breadth-first traversal seeded with the first hyperedge, accumulating into `visited`.
    ///
    /// Each newly visited vertex enqueues every hyperedge containing it, including ones
    /// already processed; the visited set keeps each vertex to a single visit.
    #[instrument(level = "debug", skip(self, visited))]
    pub fn bfs_into(&self, visited: &mut Visited) {
        if self.hyperedges.is_empty() {
            return;
        }

        let mut queue = VecDeque::from([0]);
        while let Some(edge) = queue.pop_front() {
            for &v in &self.hyperedges[edge].vertices {
                if visited.visit(v) {
                    trace!(vertex = v.0, "visited via BFS");
                    queue.extend(self.incident_edge_indices(v));
                }
            }
        }
    }
}
