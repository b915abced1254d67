use incidence_hypergraphs::prelude::*;

use super::strategy::{arb_hypergraph, build, two_edges};
use proptest::proptest;
use std::collections::HashSet;

#[test]
fn test_dfs_scenario() {
    let h = two_edges();
    let order = h.dfs(EdgeId(0)).unwrap();
    assert_eq!(order, vec![VertexId(0), VertexId(1), VertexId(2), VertexId(3)]);
}

#[test]
fn test_bfs_without_edges_is_empty() {
    let h = build(3, &[]);
    assert!(h.bfs().is_empty());
}

#[test]
fn test_traversal_stays_in_component() {
    let h = build(5, &[vec![0, 1], vec![2, 3], vec![1, 4]]);
    let dfs: HashSet<_> = h.dfs(EdgeId(0)).unwrap().into_iter().collect();
    let bfs: HashSet<_> = h.bfs().into_iter().collect();

    let expected: HashSet<_> = [0, 1, 4].into_iter().map(VertexId).collect();
    assert_eq!(dfs, expected);
    assert_eq!(bfs, expected);
}

#[test]
fn test_bfs_resumes_with_visited() {
    let h = build(4, &[vec![0, 1], vec![2, 3]]);
    let mut visited = Visited::new();
    h.dfs_from(EdgeId(1), &mut visited).unwrap();
    h.bfs_into(&mut visited);
    assert_eq!(
        visited.order(),
        &[VertexId(2), VertexId(3), VertexId(0), VertexId(1)]
    );

    // both components are covered, so further calls add nothing
    h.bfs_into(&mut visited);
    h.dfs_from(EdgeId(0), &mut visited).unwrap();
    h.dfs_from(EdgeId(1), &mut visited).unwrap();
    assert_eq!(visited.len(), 4);
    let distinct: HashSet<_> = visited.order().iter().copied().collect();
    assert_eq!(distinct.len(), visited.len());
}

#[test]
fn test_bfs_skips_vertices_visited_earlier() {
    let h = build(4, &[vec![0, 1], vec![1, 2], vec![3]]);
    let mut visited = Visited::new();
    h.dfs_from(EdgeId(1), &mut visited).unwrap();
    h.bfs_into(&mut visited);
    h.dfs_from(EdgeId(2), &mut visited).unwrap();
    assert_eq!(
        visited.order(),
        &[VertexId(1), VertexId(0), VertexId(2), VertexId(3)]
    );
}

#[test]
fn test_dfs_after_removing_first_edge() {
    let mut h = two_edges();
    h.remove_hyperedge(EdgeId(0));
    assert_eq!(h.dfs(EdgeId(0)), Err(HypergraphError::UnknownEdge(EdgeId(0))));
    assert_eq!(h.bfs(), vec![VertexId(1), VertexId(2), VertexId(3)]);
}

#[test]
fn test_dfs_deep_chain() {
    // a long path would overflow a recursive traversal
    let n = 5_000;
    let edges: Vec<Vec<usize>> = (0..n - 1).map(|i| vec![i, i + 1]).collect();
    let h = build(n, &edges);
    assert_eq!(h.dfs(EdgeId(0)).unwrap().len(), n);
}

proptest! {
    #[test]
    fn test_dfs_and_bfs_visit_the_seed_component(h in arb_hypergraph(10, 8)) {
        let Some(first) = h.hyperedges().first() else {
            assert!(h.bfs().is_empty());
            return Ok(());
        };

        let dfs = h.dfs(first.id).unwrap();
        let bfs = h.bfs();

        let dfs_set: HashSet<_> = dfs.iter().copied().collect();
        let bfs_set: HashSet<_> = bfs.iter().copied().collect();

        // each vertex exactly once
        assert_eq!(dfs_set.len(), dfs.len());
        assert_eq!(bfs_set.len(), bfs.len());
        assert_eq!(dfs_set, bfs_set);

        let expected: HashSet<VertexId> = match first.vertices.first() {
            None => HashSet::new(),
            Some(&seed) => h
                .connected_components()
                .into_iter()
                .find(|c| c.contains(&seed))
                .unwrap()
                .into_iter()
                .collect(),
        };
        assert_eq!(dfs_set, expected);
    }

    #[test]
    fn test_components_partition_vertices(h in arb_hypergraph(10, 8)) {
        let components = h.connected_components();
        let flat: Vec<VertexId> = components.iter().flatten().copied().collect();
        let mut sorted = flat.clone();
        sorted.sort();
        assert_eq!(sorted, h.vertex_ids());
        assert_eq!(h.is_connected(), components.len() <= 1);
    }
}
