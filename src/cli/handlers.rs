// src/cli/handlers.rs
use crate::analysis::{self, pagerank, PageRankConfig, PathOutcome};
use crate::config::Config;
use crate::exit::WordGraphExit;
use crate::graph::{dot, text, WordGraph};
use crate::reporting;
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Handles the show command.
///
/// # Errors
/// Returns error if the description cannot be written.
pub fn handle_show(graph: &WordGraph, config: &Config, stdout: bool) -> Result<WordGraphExit> {
    if stdout {
        println!("{}", dot::render(graph));
        return Ok(WordGraphExit::Success);
    }

    let path = &config.render.output;
    dot::write(graph, path)?;
    println!(
        "{} {} ({} nodes, {} edges)",
        "Graph written to".green(),
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(WordGraphExit::Success)
}

/// Handles the bridge command.
#[must_use]
pub fn handle_bridge(graph: &WordGraph, word1: &str, word2: &str) -> WordGraphExit {
    let outcome = analysis::query_bridge_words(graph, &word1.to_lowercase(), &word2.to_lowercase());
    reporting::print_outcome(&outcome.to_string(), !outcome.bridges().is_empty());
    WordGraphExit::Success
}

/// Handles the generate command.
#[must_use]
pub fn handle_generate(graph: &WordGraph, words: &[String], seed: Option<u64>) -> WordGraphExit {
    let input = words.join(" ");
    if text::normalize(&input).is_empty() {
        eprintln!("{} input contains no words", "Error:".red());
        return WordGraphExit::InvalidInput;
    }

    let mut rng = make_rng(seed);
    println!("{}", analysis::generate_new_text(graph, &input, &mut rng));
    WordGraphExit::Success
}

/// Handles the path command.
///
/// # Errors
/// Returns error if JSON output fails.
pub fn handle_path(
    graph: &WordGraph,
    word1: &str,
    word2: Option<&str>,
    json: bool,
) -> Result<WordGraphExit> {
    let word1 = word1.to_lowercase();

    let Some(word2) = word2 else {
        let Some(paths) = analysis::shortest_paths_from(graph, &word1) else {
            reporting::print_outcome(&PathOutcome::Missing(word1).to_string(), false);
            return Ok(WordGraphExit::Success);
        };
        if paths.is_empty() && !json {
            println!("{}", format!("No word is reachable from \"{word1}\"").yellow());
            return Ok(WordGraphExit::Success);
        }
        reporting::print_paths(&paths, json)?;
        return Ok(WordGraphExit::Success);
    };

    match analysis::shortest_path(graph, &word1, &word2.to_lowercase()) {
        PathOutcome::Found(path) => reporting::print_paths(&[path], json)?,
        other => reporting::print_outcome(&other.to_string(), false),
    }
    Ok(WordGraphExit::Success)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if JSON output fails.
pub fn handle_rank(
    graph: &WordGraph,
    config: &Config,
    damping: Option<f64>,
    json: bool,
) -> Result<WordGraphExit> {
    let rank_config = PageRankConfig {
        damping: damping.unwrap_or(config.rank.damping),
        ..config.rank
    };
    if let Err(e) = rank_config.validate() {
        eprintln!("{} {e}", "Error:".red());
        return Ok(WordGraphExit::InvalidInput);
    }

    let ranks = pagerank::compute(graph, &rank_config);
    reporting::print_ranks(&pagerank::ranked(&ranks), json)?;
    Ok(WordGraphExit::Success)
}

/// Handles the walk command.
///
/// # Errors
/// Returns error if the walk cannot be saved.
pub fn handle_walk(
    graph: &WordGraph,
    config: &Config,
    seed: Option<u64>,
    no_save: bool,
) -> Result<WordGraphExit> {
    let mut rng = make_rng(seed);
    let walk = analysis::random_walk(graph, &mut rng).join(" ");
    println!("{} {walk}", "Random walk:".bold());

    if !no_save {
        let path = &config.walk.output;
        fs::write(path, &walk).with_context(|| format!("saving walk to {}", path.display()))?;
        info!("walk saved to {}", path.display());
    }
    Ok(WordGraphExit::Success)
}
