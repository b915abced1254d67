use incidence_hypergraphs::prelude::*;

use super::strategy::{arb_hypergraph, arb_hypergraph_and_vertex, two_edges};
use proptest::proptest;

#[test]
fn test_sub_hypergraph_leaves_original() {
    let h = two_edges();
    let sub = h.sub_hypergraph(&[VertexId(0), VertexId(1)]);

    assert_eq!(sub.vertex_ids(), vec![VertexId(2), VertexId(3)]);
    assert_eq!(sub.to_string(), "{ } { 2 3 }");
    assert_eq!(h.vertex_count(), 4);
    assert_eq!(h.to_string(), "{ 0 1 } { 1 2 3 }");
}

#[test]
fn test_sub_hypergraph_ignores_unknown_ids() {
    let h = two_edges();
    assert_eq!(h.sub_hypergraph(&[VertexId(17)]), h);
}

proptest! {
    #[test]
    fn test_empty_removal_is_identical(h in arb_hypergraph(10, 8)) {
        let sub = h.sub_hypergraph(&[]);
        assert_eq!(sub.vertex_ids(), h.vertex_ids());
        assert_eq!(sub.hyperedges(), h.hyperedges());
        assert_eq!(sub, h);
    }

    #[test]
    fn test_removal_matches_remove_vertex((h, v) in arb_hypergraph_and_vertex()) {
        let sub = h.sub_hypergraph(&[v]);
        let mut expected = h.clone();
        expected.remove_vertex(v);
        assert_eq!(sub, expected);
        assert!(h.contains_vertex(v));
    }
}
