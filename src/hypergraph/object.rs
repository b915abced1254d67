use crate::error::{HypergraphError, Result};

use tracing::debug;

/// Identity of a [`Vertex`] within the [`Hypergraph`] that created it.
///
/// Ids are handed out densely from zero in creation order and are never reused, even after
/// the vertex is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Identity of a [`Hyperedge`] within the [`Hypergraph`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    /// Color assigned by [`Hypergraph::coloring`]. Colors are positive; `None` until colored.
    pub color: Option<usize>,
}

/// An ordered list of vertex references.
/// Repeated vertices are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperedge {
    pub id: EdgeId,
    pub vertices: Vec<VertexId>,
}

impl Hyperedge {
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }
}

/// A hypergraph owning its vertices and hyperedges.
///
/// Both collections keep insertion order: vertex order drives [`Hypergraph::coloring`] and
/// [`Hypergraph::partition`], and the hyperedge at index 0 seeds [`Hypergraph::bfs`].
/// Hyperedges refer to vertices by [`VertexId`] only; the hypergraph itself acts as the
/// vertex factory, so ids are scoped to this instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hypergraph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) hyperedges: Vec<Hyperedge>,
    next_vertex: usize,
    next_edge: usize,
}

impl Hypergraph {
    /// The empty Hypergraph with no vertices or hyperedges.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a fresh uncolored vertex and append it to the vertex collection.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.push(Vertex { id, color: None });
        id
    }

    /// Append a hyperedge over `vertices`, kept in the given order and with any repeats.
    ///
    /// # Errors
    ///
    /// [`HypergraphError::UnknownVertex`] if some vertex is not in this hypergraph.
    pub fn add_hyperedge<I>(&mut self, vertices: I) -> Result<EdgeId>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let vertices: Vec<VertexId> = vertices.into_iter().collect();
        if let Some(&missing) = vertices.iter().find(|&&v| !self.contains_vertex(v)) {
            return Err(HypergraphError::UnknownVertex(missing));
        }

        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.hyperedges.push(Hyperedge { id, vertices });
        Ok(id)
    }

    /// Remove `v` from the vertex collection and scrub every occurrence of it from every
    /// hyperedge. Hyperedges are never deleted, even when left empty.
    ///
    /// Returns whether `v` was in the vertex collection; removing an absent vertex is a no-op.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        let before = self.vertices.len();
        self.vertices.retain(|vertex| vertex.id != v);
        for hyperedge in &mut self.hyperedges {
            hyperedge.vertices.retain(|&u| u != v);
        }

        let removed = self.vertices.len() != before;
        debug!(vertex = v.0, removed, "remove_vertex");
        removed
    }

    /// Remove hyperedge `e`. Vertices it referenced are untouched.
    ///
    /// Returns whether `e` was present; removing an absent hyperedge is a no-op.
    pub fn remove_hyperedge(&mut self, e: EdgeId) -> bool {
        let before = self.hyperedges.len();
        self.hyperedges.retain(|hyperedge| hyperedge.id != e);

        let removed = self.hyperedges.len() != before;
        debug!(edge = e.0, removed, "remove_hyperedge");
        removed
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn hyperedges(&self) -> &[Hyperedge] {
        &self.hyperedges
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.iter().map(|v| v.id).collect()
    }

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|vertex| vertex.id == v)
    }

    pub fn hyperedge(&self, e: EdgeId) -> Option<&Hyperedge> {
        self.hyperedges.iter().find(|hyperedge| hyperedge.id == e)
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertex(v).is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.hyperedges.len()
    }

    /// The color of `v`, if it is present and has been colored.
    pub fn color(&self, v: VertexId) -> Option<usize> {
        self.vertex(v).and_then(|vertex| vertex.color)
    }

    /// Number of hyperedges containing `v`.
    /// A hyperedge counts once no matter how often `v` is repeated inside it.
    pub fn degree(&self, v: VertexId) -> usize {
        self.incident_edges(v).count()
    }

    /// Whether vertex `v` occurs in hyperedge `e`. False if either is absent.
    pub fn is_incident(&self, v: VertexId, e: EdgeId) -> bool {
        self.hyperedge(e).is_some_and(|hyperedge| hyperedge.contains(v))
    }

    /// The vertex/hyperedge incidence relation as a dense boolean matrix, with rows in
    /// vertex order and columns in hyperedge order.
    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        let rows = self
            .vertices
            .iter()
            .map(|vertex| {
                self.hyperedges
                    .iter()
                    .map(|hyperedge| hyperedge.contains(vertex.id))
                    .collect()
            })
            .collect();

        IncidenceMatrix {
            vertices: self.vertex_ids(),
            edges: self.hyperedges.iter().map(|h| h.id).collect(),
            rows,
        }
    }

    /// Distinct vertices sharing at least one hyperedge with `v`, in first-seen order
    /// (hyperedge order, then position within the hyperedge). `v` itself is excluded.
    pub fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let mut result = Vec::new();
        for hyperedge in self.incident_edges(v) {
            for &u in &hyperedge.vertices {
                if u != v && !result.contains(&u) {
                    result.push(u);
                }
            }
        }
        result
    }

    /// Hyperedges containing `v`, in hyperedge order.
    pub(crate) fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = &Hyperedge> + '_ {
        self.hyperedges.iter().filter(move |h| h.contains(v))
    }

    /// Indices into the hyperedge collection of hyperedges containing `v`.
    pub(crate) fn incident_edge_indices(&self, v: VertexId) -> impl Iterator<Item = usize> + '_ {
        self.hyperedges
            .iter()
            .enumerate()
            .filter(move |(_, h)| h.contains(v))
            .map(|(i, _)| i)
    }
}

/// A snapshot of [`Hypergraph::incidence_matrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    /// Row labels.
    pub vertices: Vec<VertexId>,
    /// Column labels.
    pub edges: Vec<EdgeId>,
    /// `rows[i][j]` is true when `vertices[i]` occurs in `edges[j]`.
    pub rows: Vec<Vec<bool>>,
}

impl IncidenceMatrix {
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}
