// src/graph/dot.rs
//! Graphviz description of a word graph.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use super::model::WordGraph;
use crate::error::{GraphError, Result};

/// Renders the graph as a `digraph`, one labelled edge per line.
#[must_use]
pub fn render(graph: &WordGraph) -> String {
    let mut out = String::from("digraph g {\n");
    for (from, to, weight) in graph.edges() {
        let _ = writeln!(out, "    \"{from}\" -> \"{to}\" [label=\"{weight}\"];");
    }
    out.push('}');
    out
}

/// Writes the rendered description to `path`.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn write(graph: &WordGraph, path: &Path) -> Result<()> {
    fs::write(path, render(graph)).map_err(|e| GraphError::io(e, path))
}
