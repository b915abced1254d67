use super::{Hypergraph, VertexId};

use tracing::{instrument, trace};

/// Colors assigned by [`Hypergraph::coloring`], in vertex order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    pub assignments: Vec<(VertexId, usize)>,
}

impl Coloring {
    pub fn color_of(&self, v: VertexId) -> Option<usize> {
        self.assignments
            .iter()
            .find(|(u, _)| *u == v)
            .map(|&(_, c)| c)
    }

    /// Number of distinct colors used.
    pub fn color_count(&self) -> usize {
        let mut colors: Vec<usize> = self.assignments.iter().map(|&(_, c)| c).collect();
        colors.sort_unstable();
        colors.dedup();
        colors.len()
    }
}

impl Hypergraph {
    /// Greedily color every vertex so that no two distinct vertices sharing a hyperedge get
    /// the same color.
    ///
    /// Vertices are processed in insertion order with a single trial counter for the whole
    /// run: each vertex starts trying at one past the color given to the previous vertex, and
    /// the counter only moves forward. This is not minimum-color greedy coloring; on a fresh
    /// run every vertex ends up with a distinct color.
    ///
    /// Existing colors are cleared first, so the result depends only on the structure. Colors
    /// left by an earlier run always sit above the counter when a neighbor is checked, so the
    /// result is the same as a run that keeps them.
    #[instrument(level = "debug", skip(self))]
    pub fn coloring(&mut self) -> Coloring {
        for vertex in &mut self.vertices {
            vertex.color = None;
        }

        let mut color = 0;
        let mut assignments = Vec::with_capacity(self.vertices.len());
        for i in 0..self.vertices.len() {
            let v = self.vertices[i].id;
            let neighbors = self.neighbors(v);
            loop {
                color += 1;
                if !neighbors.iter().any(|&u| self.color(u) == Some(color)) {
                    break;
                }
            }

            self.vertices[i].color = Some(color);
            trace!(vertex = v.0, color, "colored");
            assignments.push((v, color));
        }

        Coloring { assignments }
    }

    /// True when every vertex is colored and no hyperedge contains two distinct vertices
    /// with the same color.
    pub fn is_properly_colored(&self) -> bool {
        if self.vertices.iter().any(|v| v.color.is_none()) {
            return false;
        }

        self.hyperedges.iter().all(|hyperedge| {
            hyperedge.vertices.iter().enumerate().all(|(i, &u)| {
                hyperedge.vertices[i + 1..]
                    .iter()
                    .all(|&w| u == w || self.color(u) != self.color(w))
            })
        })
    }
}
