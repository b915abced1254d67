//! Positional partitioning of ordered collections into contiguous blocks.
use crate::error::{HypergraphError, Result};
use crate::hypergraph::{Hypergraph, VertexId};

use tracing::{instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub blocks: Vec<PartitionBlock<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionBlock<T> {
    pub elements: Vec<T>,
}

impl<T> Partition<T> {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The blocks as plain vectors, in order.
    pub fn into_vecs(self) -> Vec<Vec<T>> {
        self.blocks.into_iter().map(|b| b.elements).collect()
    }
}

/// Split `elements` into `parts` contiguous blocks of `ceil(n / parts)` elements each.
///
/// Order is preserved. Trailing blocks may be shorter, or empty, when `parts` does not
/// divide `n` evenly; there are always exactly `parts` blocks.
///
/// # Errors
///
/// [`HypergraphError::InvalidPartitionCount`] when `parts` is zero or exceeds `n`.
pub fn block_partition<T: Clone>(elements: &[T], parts: usize) -> Result<Partition<T>> {
    let n = elements.len();
    if parts == 0 || parts > n {
        warn!(parts, vertices = n, "rejected partition count");
        return Err(HypergraphError::InvalidPartitionCount { parts, vertices: n });
    }

    let block_size = n.div_ceil(parts);
    let mut blocks: Vec<PartitionBlock<T>> = elements
        .chunks(block_size)
        .map(|chunk| PartitionBlock {
            elements: chunk.to_vec(),
        })
        .collect();
    blocks.resize_with(parts, || PartitionBlock {
        elements: Vec::new(),
    });

    Ok(Partition { blocks })
}

impl Hypergraph {
    /// Split the vertices, in insertion order, into `parts` contiguous blocks.
    ///
    /// Hyperedge structure is ignored; see [`block_partition`].
    ///
    /// # Errors
    ///
    /// [`HypergraphError::InvalidPartitionCount`] when `parts` is zero or exceeds the number
    /// of vertices.
    #[instrument(level = "debug", skip(self))]
    pub fn partition(&self, parts: usize) -> Result<Partition<VertexId>> {
        block_partition(&self.vertex_ids(), parts)
    }
}
