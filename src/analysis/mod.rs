// src/analysis/mod.rs
//! Read-only analyses over a built [`WordGraph`](crate::graph::WordGraph).

pub mod bridge;
pub mod pagerank;
pub mod path;
pub mod walk;

pub use bridge::{generate_new_text, query_bridge_words, BridgeOutcome};
pub use pagerank::PageRankConfig;
pub use path::{shortest_path, shortest_paths_from, PathOutcome, ShortestPath};
pub use walk::random_walk;
