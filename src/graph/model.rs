// src/graph/model.rs
//! The word graph and its read-only query interface.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outgoing edges of a single word: neighbor -> occurrence count.
pub type Edges = BTreeMap<String, usize>;

static NO_EDGES: Edges = BTreeMap::new();

/// Directed, weighted word-adjacency graph.
///
/// Every word that appears as a source or destination of an edge has its own
/// entry, so terminal words are present with an empty edge map. Weights count
/// how often the pair was seen adjacent and are always at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordGraph {
    pub(crate) adjacency: BTreeMap<String, Edges>,
}

impl WordGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Returns true if `word` has an entry of its own, even with no out-edges.
    #[must_use]
    pub fn contains_as_source(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Returns true if `word` is a source node or the destination of any edge.
    #[must_use]
    pub fn contains_anywhere(&self, word: &str) -> bool {
        self.contains_as_source(word)
            || self.adjacency.values().any(|edges| edges.contains_key(word))
    }

    /// Outgoing edges of `word`; empty if the word is unknown.
    #[must_use]
    pub fn out_edges(&self, word: &str) -> &Edges {
        self.adjacency.get(word).unwrap_or(&NO_EDGES)
    }

    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.out_edges(from).contains_key(to)
    }

    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<usize> {
        self.out_edges(from).get(to).copied()
    }

    /// All words in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// All edges as `(from, to, weight)`, ordered by source then destination.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, usize)> + '_ {
        self.adjacency.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .map(move |(to, weight)| (from.as_str(), to.as_str(), *weight))
        })
    }

    /// Returns the graph-owned copy of `word`, borrowed for the graph's lifetime.
    #[must_use]
    pub fn node(&self, word: &str) -> Option<&str> {
        self.adjacency.get_key_value(word).map(|(key, _)| key.as_str())
    }

    pub(crate) fn ensure_node(&mut self, word: &str) {
        if !self.adjacency.contains_key(word) {
            self.adjacency.insert(word.to_string(), Edges::new());
        }
    }

    /// Registers both endpoints and bumps the edge weight by one.
    pub(crate) fn add_edge(&mut self, from: &str, to: &str) {
        self.ensure_node(to);
        *self
            .adjacency
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_default() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordGraph {
        let mut g = WordGraph::new();
        g.add_edge("a", "b");
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g
    }

    #[test]
    fn test_add_edge_accumulates_weight() {
        let g = sample();
        assert_eq!(g.weight("a", "b"), Some(2));
        assert_eq!(g.weight("b", "c"), Some(1));
        assert_eq!(g.weight("c", "a"), None);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_destinations_are_explicit_nodes() {
        let g = sample();
        assert!(g.contains_as_source("c"));
        assert!(g.out_edges("c").is_empty());
        assert_eq!(g.nodes().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_word_queries() {
        let g = sample();
        assert!(!g.contains_anywhere("zebra"));
        assert!(g.out_edges("zebra").is_empty());
        assert!(g.node("zebra").is_none());
    }

    #[test]
    fn test_edges_are_ordered() {
        let g = sample();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, [("a", "b", 2), ("b", "c", 1)]);
    }
}
