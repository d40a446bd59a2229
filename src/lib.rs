//! Directed word-adjacency graphs built from free text.
//!
//! [`graph`] turns text into a weighted [`graph::WordGraph`]; [`analysis`]
//! runs bridge-word queries, text generation, shortest paths, `PageRank` and
//! random walks against it without mutating it.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod reporting;
