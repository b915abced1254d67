//! Generate a random hypergraph and run every algorithm on it.
//!
//! Run with `RUST_LOG=trace` to also see the traversal and coloring events.
use incidence_hypergraphs::prelude::*;

use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn ids(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|v| v.0.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut h = random_hypergraph(&RandomConfig::default(), &mut rng)?;

    println!("== Hypergraph structure");
    println!("Vertices: {}", ids(&h.vertex_ids()));
    println!("Hyperedges: {h}");

    println!("\n== Incidence matrix");
    print!("{}", h.incidence_matrix());

    println!("\n== DFS traversal");
    if let Some(first) = h.hyperedges().first() {
        println!("Visited: {}", ids(&h.dfs(first.id)?));
    }

    println!("\n== BFS traversal");
    println!("Visited: {}", ids(&h.bfs()));

    println!("\n== Coloring");
    for (v, color) in h.coloring().assignments {
        println!("Vertex {} colored with color {color}", v.0);
    }

    println!("\n== Partitioning");
    for (i, block) in h.partition(3)?.blocks.iter().enumerate() {
        println!("Partition {i} contains vertices: {}", ids(&block.elements));
    }

    println!("\n== Sub-hypergraph");
    let removals: Vec<VertexId> = h.vertex_ids().into_iter().take(2).collect();
    let sub = h.sub_hypergraph(&removals);
    println!("Vertices: {}", ids(&sub.vertex_ids()));
    println!("Hyperedges: {sub}");

    println!("\n== Dual hypergraph");
    let dual = h.dual()?;
    println!("Vertices: {}", ids(&dual.hypergraph.vertex_ids()));
    println!("Hyperedges: {}", dual.hypergraph);

    println!("\n== Acyclicity");
    if h.is_simple_acyclic() {
        println!("No vertex lies in more than one hyperedge.");
    } else {
        println!("Some vertex lies in more than one hyperedge.");
    }

    Ok(())
}
