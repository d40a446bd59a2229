// tests/common/mod.rs
//! Shared fixtures for integration tests.

use wordgraph_core::graph::{GraphBuilder, WordGraph};

/// Two sentences ingested as one text, so "data" links to the second "the".
pub const SCIENTIST_TEXT: &str =
    "The scientist carefully analyzed the data\nThe scientist shared the report and shared the findings";

#[allow(dead_code)]
pub fn scientist_graph() -> WordGraph {
    GraphBuilder::from_text(SCIENTIST_TEXT)
}
