use incidence_hypergraphs::prelude::*;

use super::strategy::{arb_hypergraph, build, two_edges};
use proptest::proptest;

#[test]
fn test_scenario_before_and_after_removal() {
    let mut h = two_edges();
    assert!(!h.is_simple_acyclic());
    h.remove_vertex(VertexId(1));
    assert!(h.is_simple_acyclic());
}

#[test]
fn test_empty_is_acyclic() {
    assert!(Hypergraph::empty().is_simple_acyclic());
    assert!(build(3, &[]).is_simple_acyclic());
}

#[test]
fn test_repeats_within_one_edge_are_fine() {
    assert!(build(2, &[vec![0, 0, 1]]).is_simple_acyclic());
}

proptest! {
    #[test]
    fn test_acyclic_iff_max_degree_one(h in arb_hypergraph(10, 6)) {
        let max_degree = h.vertices().iter().map(|v| h.degree(v.id)).max().unwrap_or(0);
        assert_eq!(h.is_simple_acyclic(), max_degree <= 1);
    }
}
