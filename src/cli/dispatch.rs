// src/cli/dispatch.rs
//! Command dispatch: loads config and input once, then runs one analysis.

use super::{
    args::{Cli, Commands},
    handlers::{handle_bridge, handle_generate, handle_path, handle_rank, handle_show, handle_walk},
};
use crate::config::Config;
use crate::exit::WordGraphExit;
use crate::graph::{GraphBuilder, WordGraph};
use anyhow::{Context, Result};
use std::path::Path;

/// Builds the graph from the input file and executes the parsed command.
///
/// # Errors
/// Returns error if the config or input cannot be read, or the handler fails.
pub fn execute(cli: Cli) -> Result<WordGraphExit> {
    let config = load_config(cli.config.as_deref())?;
    let graph = GraphBuilder::from_file(&cli.input)
        .with_context(|| format!("cannot build graph from {}", cli.input.display()))?;
    run(&graph, &config, cli.command)
}

/// Runs one command against an already built graph.
///
/// # Errors
/// Returns error if the handler fails.
pub fn run(graph: &WordGraph, config: &Config, command: Commands) -> Result<WordGraphExit> {
    match command {
        Commands::Show { stdout } => handle_show(graph, config, stdout),
        Commands::Bridge { word1, word2 } => Ok(handle_bridge(graph, &word1, &word2)),
        Commands::Generate { text, seed } => Ok(handle_generate(graph, &text, seed)),
        Commands::Path { word1, word2, json } => handle_path(graph, &word1, word2.as_deref(), json),
        Commands::Rank { damping, json } => handle_rank(graph, config, damping, json),
        Commands::Walk { seed, no_save } => handle_walk(graph, config, seed, no_save),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        return Ok(Config::load());
    };
    Config::from_path(path)?.with_context(|| format!("config file {} not found", path.display()))
}
