// src/graph/builder.rs
//! Graph construction from text: the only place a `WordGraph` is mutated.

use std::fs;
use std::path::Path;

use log::debug;

use super::model::WordGraph;
use super::text;
use crate::error::{GraphError, Result};

/// Builds word graphs from token streams, strings and files.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds a graph from an ordered token sequence.
    ///
    /// Each adjacent pair adds one to the weight of `tokens[i] -> tokens[i + 1]`.
    /// The last token is registered even though it has no successor.
    #[must_use]
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> WordGraph {
        let mut graph = WordGraph::new();

        for pair in tokens.windows(2) {
            if let [from, to] = pair {
                graph.add_edge(from.as_ref(), to.as_ref());
            }
        }
        if let Some(last) = tokens.last() {
            graph.ensure_node(last.as_ref());
        }

        debug!(
            "built word graph: {} tokens, {} nodes, {} edges",
            tokens.len(),
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Normalizes `content` and builds a graph from the resulting tokens.
    #[must_use]
    pub fn from_text(content: &str) -> WordGraph {
        Self::build(&text::normalize(content))
    }

    /// Reads a text file and builds its graph.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected; they are
    /// separators to the normalizer anyway.
    ///
    /// # Errors
    /// Returns [`GraphError::Io`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<WordGraph> {
        let bytes = fs::read(path).map_err(|e| GraphError::io(e, path))?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }
}
