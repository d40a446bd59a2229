// tests/graph_algorithms.rs
//! Shortest paths, PageRank and random walks on the scientist text.

mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use wordgraph_core::analysis::pagerank::{self, PageRankConfig};
use wordgraph_core::analysis::{random_walk, shortest_path, shortest_paths_from, PathOutcome};

#[test]
fn test_direct_edge_path() {
    let graph = common::scientist_graph();
    assert_eq!(
        shortest_path(&graph, "the", "findings").to_string(),
        "Shortest path: the -> findings\nLength: 1"
    );
}

#[test]
fn test_multi_hop_path() {
    let graph = common::scientist_graph();
    assert_eq!(
        shortest_path(&graph, "carefully", "report").to_string(),
        "Shortest path: carefully -> analyzed -> the -> report\nLength: 3"
    );
}

#[test]
fn test_heavy_edge_counts_in_length() {
    // shared -> the has weight 2.
    let graph = common::scientist_graph();
    let PathOutcome::Found(path) = shortest_path(&graph, "report", "data") else {
        panic!("expected a path");
    };
    assert_eq!(path.nodes, ["report", "and", "shared", "the", "data"]);
    assert_eq!(path.length, 5);
}

#[test]
fn test_no_path_from_dead_end() {
    let graph = common::scientist_graph();
    assert_eq!(
        shortest_path(&graph, "findings", "the").to_string(),
        "No path from \"findings\" to \"the\""
    );
}

#[test]
fn test_missing_word_in_path_query() {
    let graph = common::scientist_graph();
    assert_eq!(
        shortest_path(&graph, "the", "team").to_string(),
        "No \"team\" in the graph!"
    );
}

#[test]
fn test_paths_from_one_word_reach_everything() {
    let graph = common::scientist_graph();
    let paths = shortest_paths_from(&graph, "the").unwrap();
    assert_eq!(paths.len(), graph.node_count() - 1);
    assert!(paths.iter().all(|p| p.nodes.first().is_some_and(|w| w == "the")));
}

#[test]
fn test_pagerank_mass_with_dangling_word() {
    let graph = common::scientist_graph();
    let ranks = pagerank::compute(&graph, &PageRankConfig::default());

    assert_eq!(ranks.len(), graph.node_count());
    let total: f64 = ranks.values().sum();
    assert!((total - 1.0).abs() < 1e-6, "total {total}");
    assert!(ranks.values().all(|r| *r > 0.0));

    let ranked = pagerank::ranked(&ranks);
    assert_eq!(ranked.first().map(|(w, _)| w.as_str()), Some("the"));
}

#[test]
fn test_walk_respects_edges() {
    let graph = common::scientist_graph();
    for seed in 0..50 {
        let walk = random_walk(&graph, &mut StdRng::seed_from_u64(seed));
        assert!(!walk.is_empty());
        assert!(walk.len() <= graph.edge_count() + 1);

        let mut seen = HashSet::new();
        for pair in walk.windows(2) {
            assert!(graph.has_edge(&pair[0], &pair[1]), "no edge in {walk:?}");
            assert!(seen.insert((pair[0].clone(), pair[1].clone())), "repeated edge in {walk:?}");
        }
    }
}
