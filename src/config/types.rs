// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::PageRankConfig;

/// Settings read from `wordgraph.toml`. Every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rank: PageRankConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Where `walk` saves the visited words.
    #[serde(default = "default_walk_output")]
    pub output: PathBuf,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { output: default_walk_output() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Where `show` writes the Graphviz description.
    #[serde(default = "default_render_output")]
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { output: default_render_output() }
    }
}

fn default_walk_output() -> PathBuf { PathBuf::from("random_walk.txt") }
fn default_render_output() -> PathBuf { PathBuf::from("graph.dot") }
