// src/analysis/walk.rs
//! Random traversal that never reuses a directed edge.

use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::WordGraph;

/// Walks the graph from a uniformly chosen start word.
///
/// Each step follows a uniformly chosen out-edge. The walk stops at a word
/// without out-edges, or when the chosen edge was already taken (that edge is
/// not followed). The result lists visited words, start first, and holds at
/// most `edge_count + 1` words.
pub fn random_walk<R: Rng + ?Sized>(graph: &WordGraph, rng: &mut R) -> Vec<String> {
    let nodes: Vec<&str> = graph.nodes().collect();
    let Some(&start) = nodes.choose(rng) else {
        return Vec::new();
    };

    let mut taken: HashSet<(&str, &str)> = HashSet::new();
    let mut walk = vec![start.to_string()];
    let mut current = start;

    loop {
        let candidates: Vec<&str> = graph.out_edges(current).keys().map(String::as_str).collect();
        let Some(&next) = candidates.choose(rng) else {
            debug!("walk stopped at dead end \"{current}\"");
            break;
        };
        if !taken.insert((current, next)) {
            debug!("walk stopped at repeated edge \"{current}\" -> \"{next}\"");
            break;
        }
        walk.push(next.to_string());
        current = next;
    }

    walk
}
