// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordgraph", version, about = "Word-adjacency graph explorer")]
pub struct Cli {
    /// Text file to build the graph from
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,
    /// Config file (defaults to ./wordgraph.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the graph as a Graphviz description
    Show {
        /// Print to stdout instead of writing the configured file
        #[arg(long)]
        stdout: bool,
    },
    /// List the words linking WORD1 to WORD2
    Bridge { word1: String, word2: String },
    /// Insert bridge words into new text
    Generate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Shortest path between two words, or from one word to all others
    Path {
        word1: String,
        word2: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Rank words with PageRank
    Rank {
        /// Damping factor in [0, 1]; overrides the config file
        #[arg(long, short)]
        damping: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Random walk that never repeats an edge
    Walk {
        #[arg(long)]
        seed: Option<u64>,
        /// Do not save the walk to the configured file
        #[arg(long)]
        no_save: bool,
    },
}
