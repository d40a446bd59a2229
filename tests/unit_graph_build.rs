// tests/unit_graph_build.rs
//! Tests for word graph construction and ingestion.

mod common;

use std::fs;
use wordgraph_core::error::GraphError;
use wordgraph_core::graph::{dot, GraphBuilder};

#[test]
fn test_scientist_graph_edges() {
    let graph = common::scientist_graph();
    assert_eq!(graph.weight("the", "scientist"), Some(2));
    assert_eq!(graph.weight("shared", "the"), Some(2));
    assert_eq!(graph.weight("data", "the"), Some(1));
    assert_eq!(graph.weight("scientist", "the"), None);
    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.edge_count(), 12);
}

#[test]
fn test_terminal_word_is_source_node() {
    let graph = common::scientist_graph();
    assert!(graph.contains_as_source("findings"));
    assert!(graph.out_edges("findings").is_empty());
}

#[test]
fn test_every_destination_is_a_node() {
    let graph = common::scientist_graph();
    for (_, to, weight) in graph.edges() {
        assert!(graph.contains_as_source(to), "missing node {to}");
        assert!(weight >= 1);
    }
}

#[test]
fn test_from_file_matches_from_text() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("input.txt");
    fs::write(&path, common::SCIENTIST_TEXT).unwrap();

    let graph = GraphBuilder::from_file(&path).unwrap();
    assert_eq!(graph, common::scientist_graph());
}

#[test]
fn test_from_file_tolerates_invalid_utf8() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9 society").unwrap();

    let graph = GraphBuilder::from_file(&path).unwrap();
    assert_eq!(graph.weight("caf", "society"), Some(1));
}

#[test]
fn test_missing_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("nope.txt");

    let err = GraphBuilder::from_file(&path).unwrap_err();
    assert!(matches!(err, GraphError::Io { ref path, .. } if path.ends_with("nope.txt")));
}

#[test]
fn test_dot_written_to_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("graph.dot");
    let graph = GraphBuilder::from_text("red green");

    dot::write(&graph, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("digraph g {"));
    assert!(content.contains("\"red\" -> \"green\" [label=\"1\"];"));
    assert!(content.ends_with('}'));
}
