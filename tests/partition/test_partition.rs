use incidence_hypergraphs::prelude::*;

use crate::hypergraph::strategy::{arb_hypergraph, two_edges};
use proptest::prelude::*;
use proptest::proptest;

#[test]
fn test_partition_scenario() {
    let h = two_edges();
    let blocks = h.partition(3).unwrap().into_vecs();
    assert_eq!(
        blocks,
        vec![
            vec![VertexId(0), VertexId(1)],
            vec![VertexId(2), VertexId(3)],
            vec![],
        ]
    );
}

#[test]
fn test_partition_rejects_bad_counts() {
    let h = two_edges();
    assert_eq!(
        h.partition(0),
        Err(HypergraphError::InvalidPartitionCount {
            parts: 0,
            vertices: 4
        })
    );
    assert!(h.partition(5).is_err());
    assert!(Hypergraph::empty().partition(1).is_err());
}

proptest! {
    #[test]
    fn test_partition_blocks_cover_vertices_in_order(
        h in arb_hypergraph(12, 4),
        k in any::<prop::sample::Index>(),
    ) {
        let parts = k.index(h.vertex_count()) + 1;
        let partition = h.partition(parts).unwrap();
        assert_eq!(partition.len(), parts);

        let size = h.vertex_count().div_ceil(parts);
        assert!(partition.blocks.iter().all(|b| b.elements.len() <= size));

        // concatenation recovers the vertex order, so blocks are disjoint and cover everything
        let flat: Vec<VertexId> = partition.into_vecs().into_iter().flatten().collect();
        assert_eq!(flat, h.vertex_ids());
    }
}
