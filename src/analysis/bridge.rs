// src/analysis/bridge.rs
//! Bridge-word queries and bridge-augmented text generation.
//!
//! A bridge from `w1` to `w2` is any word `mid` with edges `w1 -> mid` and
//! `mid -> w2`.

use std::collections::BTreeSet;
use std::fmt;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::graph::{text, WordGraph};

/// Result of a bridge-word query. `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeOutcome {
    /// Neither word is known to the graph.
    BothMissing { word1: String, word2: String },
    /// One of the words is unknown.
    Missing(String),
    NoBridge { word1: String, word2: String },
    /// Bridges in lexicographic order.
    Found {
        word1: String,
        word2: String,
        bridges: Vec<String>,
    },
}

impl BridgeOutcome {
    /// The bridges found, or an empty slice for every other outcome.
    #[must_use]
    pub fn bridges(&self) -> &[String] {
        match self {
            Self::Found { bridges, .. } => bridges,
            _ => &[],
        }
    }
}

impl fmt::Display for BridgeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothMissing { word1, word2 } => {
                write!(f, "No \"{word1}\" and \"{word2}\" in the graph!")
            }
            Self::Missing(word) => write!(f, "No \"{word}\" in the graph!"),
            Self::NoBridge { word1, word2 } => {
                write!(f, "No bridge words from \"{word1}\" to \"{word2}\"!")
            }
            Self::Found {
                word1,
                word2,
                bridges,
            } => write!(
                f,
                "The bridge words from \"{word1}\" to \"{word2}\" are: {}.",
                join_list(bridges)
            ),
        }
    }
}

/// Collects every bridge word from `word1` to `word2`, sorted.
///
/// Empty when `word1` has no out-edges.
#[must_use]
pub fn bridge_words<'g>(graph: &'g WordGraph, word1: &str, word2: &str) -> BTreeSet<&'g str> {
    graph
        .out_edges(word1)
        .keys()
        .filter(|mid| graph.has_edge(mid, word2))
        .map(String::as_str)
        .collect()
}

/// Answers a bridge-word query, reporting unknown words first.
#[must_use]
pub fn query_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeOutcome {
    let has_word1 = graph.contains_anywhere(word1);
    let has_word2 = graph.contains_anywhere(word2);

    match (has_word1, has_word2) {
        (false, false) => {
            return BridgeOutcome::BothMissing {
                word1: word1.to_string(),
                word2: word2.to_string(),
            }
        }
        (false, true) => return BridgeOutcome::Missing(word1.to_string()),
        (true, false) => return BridgeOutcome::Missing(word2.to_string()),
        (true, true) => {}
    }

    let bridges = bridge_words(graph, word1, word2);
    if bridges.is_empty() {
        return BridgeOutcome::NoBridge {
            word1: word1.to_string(),
            word2: word2.to_string(),
        };
    }

    BridgeOutcome::Found {
        word1: word1.to_string(),
        word2: word2.to_string(),
        bridges: bridges.into_iter().map(str::to_string).collect(),
    }
}

/// Rewrites `input`, inserting one random bridge word between every adjacent
/// pair that has at least one.
///
/// The input is normalized first, so the output is lowercase. Input without
/// any alphabetic token produces an empty string.
pub fn generate_new_text<R: Rng + ?Sized>(graph: &WordGraph, input: &str, rng: &mut R) -> String {
    let words = text::normalize(input);
    let Some(first) = words.first() else {
        return String::new();
    };

    let mut output = vec![first.as_str()];
    for pair in words.windows(2) {
        let [word1, word2] = pair else { continue };
        if let Some(bridge) = bridge_words(graph, word1, word2).into_iter().choose(rng) {
            output.push(bridge);
        }
        output.push(word2);
    }

    output.join(" ")
}

/// "a", "a and b", "a, b, and c".
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}
