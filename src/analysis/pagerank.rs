// src/analysis/pagerank.rs
//! `PageRank` over the word graph.
//!
//! Rank flows along edges split evenly by out-degree; edge weights do not
//! bias the split. Words without out-edges spread their rank uniformly over
//! every word each round, which keeps the total mass at 1.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::WordGraph;

/// `PageRank` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Probability of following an edge rather than jumping to a random word.
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Stop once the L1 change between rounds drops below this.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_max_iterations() -> usize { 100 }
const fn default_tolerance() -> f64 { 1e-6 }

impl PageRankConfig {
    #[must_use]
    pub fn with_damping(damping: f64) -> Self {
        Self { damping, ..Self::default() }
    }

    /// Rejects a damping factor outside `[0, 1]` (NaN included).
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidDamping`].
    pub fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.damping) {
            Ok(())
        } else {
            Err(GraphError::InvalidDamping(self.damping))
        }
    }
}

/// Computes `PageRank` scores for every word.
///
/// The damping factor is not checked here; call [`PageRankConfig::validate`]
/// first. An empty graph yields an empty map.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &WordGraph, config: &PageRankConfig) -> BTreeMap<String, f64> {
    let topology = Topology::new(graph);
    if topology.nodes.is_empty() {
        return BTreeMap::new();
    }

    let n = topology.nodes.len() as f64;
    let mut ranks = vec![1.0 / n; topology.nodes.len()];

    for round in 1..=config.max_iterations {
        let next = iterate_once(&ranks, &topology, config.damping, n);
        let delta: f64 = next.iter().zip(&ranks).map(|(a, b)| (a - b).abs()).sum();
        ranks = next;
        if delta < config.tolerance {
            debug!("pagerank converged after {round} rounds (delta {delta:e})");
            break;
        }
    }

    topology
        .nodes
        .iter()
        .zip(ranks)
        .map(|(word, rank)| ((*word).to_string(), rank))
        .collect()
}

/// Scores sorted from highest to lowest, ties broken by word.
#[must_use]
pub fn ranked(ranks: &BTreeMap<String, f64>) -> Vec<(String, f64)> {
    let mut sorted: Vec<_> = ranks.iter().map(|(w, r)| (w.clone(), *r)).collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Index-based view of the graph: node `i` links to `targets[i]`.
struct Topology<'g> {
    nodes: Vec<&'g str>,
    targets: Vec<Vec<usize>>,
}

impl<'g> Topology<'g> {
    fn new(graph: &'g WordGraph) -> Self {
        let nodes: Vec<&str> = graph.nodes().collect();
        let index: HashMap<&str, usize> = nodes.iter().enumerate().map(|(i, w)| (*w, i)).collect();
        let targets: Vec<Vec<usize>> = nodes
            .iter()
            .map(|word| {
                graph
                    .out_edges(word)
                    .keys()
                    .filter_map(|to| index.get(to.as_str()).copied())
                    .collect::<Vec<usize>>()
            })
            .collect();
        Self { nodes, targets }
    }
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once(ranks: &[f64], topology: &Topology<'_>, damping: f64, n: f64) -> Vec<f64> {
    let dangling: f64 = topology
        .targets
        .iter()
        .zip(ranks)
        .filter(|(targets, _)| targets.is_empty())
        .map(|(_, rank)| rank)
        .sum();

    let base = (1.0 - damping) / n + damping * dangling / n;
    let mut next = vec![base; ranks.len()];

    for (targets, rank) in topology.targets.iter().zip(ranks) {
        if targets.is_empty() {
            continue;
        }
        let share = damping * rank / targets.len() as f64;
        for &target in targets {
            if let Some(slot) = next.get_mut(target) {
                *slot += share;
            }
        }
    }

    next
}
