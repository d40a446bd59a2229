// src/analysis/path.rs
//! Shortest weighted paths between words (Dijkstra).
//!
//! Edge weights are the adjacency counts, read as positive costs. The frontier
//! is a min-heap keyed by `(distance, insertion order)`, so candidates at equal
//! distance leave the queue first-in first-out and results are reproducible.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::graph::WordGraph;

/// A concrete path and its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    pub nodes: Vec<String>,
    pub length: usize,
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shortest path: {}\nLength: {}",
            self.nodes.join(" -> "),
            self.length
        )
    }
}

/// Result of a two-word path query. `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Missing(String),
    NoPath { from: String, to: String },
    Found(ShortestPath),
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(word) => write!(f, "No \"{word}\" in the graph!"),
            Self::NoPath { from, to } => write!(f, "No path from \"{from}\" to \"{to}\""),
            Self::Found(path) => path.fmt(f),
        }
    }
}

/// Single-source distances and predecessor links.
///
/// Words missing from `dist` are at infinite distance.
#[derive(Debug)]
pub struct Distances<'g> {
    source: &'g str,
    dist: HashMap<&'g str, usize>,
    prev: HashMap<&'g str, &'g str>,
}

impl<'g> Distances<'g> {
    #[must_use]
    pub fn source(&self) -> &'g str {
        self.source
    }

    /// Distance to `word`, `None` when unreachable.
    #[must_use]
    pub fn distance(&self, word: &str) -> Option<usize> {
        self.dist.get(word).copied()
    }

    /// Walks predecessor links back from `target`.
    #[must_use]
    pub fn path_to(&self, target: &str) -> Option<ShortestPath> {
        let length = self.distance(target)?;
        let (&target, _) = self.dist.get_key_value(target)?;

        let mut nodes = vec![target.to_string()];
        let mut at = target;
        while let Some(&previous) = self.prev.get(at) {
            nodes.push(previous.to_string());
            at = previous;
        }
        nodes.reverse();

        Some(ShortestPath { nodes, length })
    }

    /// Every word reachable from the source except the source itself.
    pub fn reachable(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.dist
            .keys()
            .copied()
            .filter(move |word| *word != self.source)
    }
}

/// Runs Dijkstra from `source`. Returns `None` if `source` is not a node.
#[must_use]
pub fn dijkstra<'g>(graph: &'g WordGraph, source: &str) -> Option<Distances<'g>> {
    let source = graph.node(source)?;

    let mut dist: HashMap<&'g str, usize> = HashMap::from([(source, 0)]);
    let mut prev: HashMap<&'g str, &'g str> = HashMap::new();
    let mut queue = BinaryHeap::from([Reverse((0usize, 0u64, source))]);
    let mut pushed = 1u64;

    while let Some(Reverse((d, _, u))) = queue.pop() {
        if dist.get(u).is_some_and(|&best| d > best) {
            continue;
        }
        for (v, &weight) in graph.out_edges(u) {
            let candidate = d + weight;
            if dist.get(v.as_str()).map_or(true, |&best| candidate < best) {
                dist.insert(v.as_str(), candidate);
                prev.insert(v.as_str(), u);
                queue.push(Reverse((candidate, pushed, v.as_str())));
                pushed += 1;
            }
        }
    }

    Some(Distances { source, dist, prev })
}

/// Shortest path from `from` to `to`; both must be nodes of the graph.
#[must_use]
pub fn shortest_path(graph: &WordGraph, from: &str, to: &str) -> PathOutcome {
    if !graph.contains_as_source(from) {
        return PathOutcome::Missing(from.to_string());
    }
    if !graph.contains_as_source(to) {
        return PathOutcome::Missing(to.to_string());
    }

    let found = dijkstra(graph, from).and_then(|distances| distances.path_to(to));
    match found {
        Some(path) => PathOutcome::Found(path),
        None => PathOutcome::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        },
    }
}

/// Shortest paths from `from` to every other reachable word, sorted by
/// destination. `None` if `from` is not a node.
#[must_use]
pub fn shortest_paths_from(graph: &WordGraph, from: &str) -> Option<Vec<ShortestPath>> {
    let distances = dijkstra(graph, from)?;
    let mut targets: Vec<&str> = distances.reachable().collect();
    targets.sort_unstable();

    Some(
        targets
            .into_iter()
            .filter_map(|target| distances.path_to(target))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_prefers_lighter_detour() {
        // a->c is heavy (weight 3); a->b->c costs 2.
        let graph = GraphBuilder::from_text("a c a c a c a b c");
        let PathOutcome::Found(path) = shortest_path(&graph, "a", "c") else {
            panic!("expected a path");
        };
        assert_eq!(path.nodes, ["a", "b", "c"]);
        assert_eq!(path.length, 2);
    }

    #[test]
    fn test_path_to_self_is_zero() {
        let graph = GraphBuilder::from_text("a b");
        let outcome = shortest_path(&graph, "a", "a");
        assert_eq!(outcome.to_string(), "Shortest path: a\nLength: 0");
    }

    #[test]
    fn test_unreachable_target() {
        let graph = GraphBuilder::from_text("a b");
        let outcome = shortest_path(&graph, "b", "a");
        assert_eq!(outcome.to_string(), "No path from \"b\" to \"a\"");
    }

    #[test]
    fn test_missing_words_reported_in_order() {
        let graph = GraphBuilder::from_text("a b");
        assert_eq!(shortest_path(&graph, "x", "y"), PathOutcome::Missing("x".into()));
        assert_eq!(shortest_path(&graph, "a", "y"), PathOutcome::Missing("y".into()));
    }

    #[test]
    fn test_single_source_paths_sorted() {
        let graph = GraphBuilder::from_text("c a b d");
        let paths = shortest_paths_from(&graph, "a").unwrap_or_default();
        let targets: Vec<_> = paths.iter().filter_map(|p| p.nodes.last().cloned()).collect();
        assert_eq!(targets, ["b", "d"]);
        assert_eq!(paths[1].length, 2);
        assert!(shortest_paths_from(&graph, "zzz").is_none());
    }
}
