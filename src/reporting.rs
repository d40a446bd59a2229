// src/reporting.rs
//! Console output for analysis results.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

use crate::analysis::ShortestPath;

#[derive(Serialize)]
struct RankEntry<'a> {
    word: &'a str,
    rank: f64,
}

/// Formats ranks one per line as `word : score`, in the given order.
#[must_use]
pub fn format_ranks(ranked: &[(String, f64)]) -> String {
    let mut out = String::new();
    for (word, rank) in ranked {
        let _ = writeln!(out, "{word:<15} : {rank:.6}");
    }
    out
}

/// Prints ranks as a table or as JSON.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_ranks(ranked: &[(String, f64)], json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = ranked
            .iter()
            .map(|(word, rank)| RankEntry { word, rank: *rank })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "PageRank of every word:".bold());
    print!("{}", format_ranks(ranked));
    Ok(())
}

/// Prints one or more shortest paths as text blocks or as JSON.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_paths(paths: &[ShortestPath], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(paths)?);
        return Ok(());
    }

    for path in paths {
        println!("{path}");
    }
    Ok(())
}

/// Prints a plain message line, colored by outcome.
pub fn print_outcome(message: &str, found: bool) {
    if found {
        println!("{}", message.green());
    } else {
        println!("{}", message.yellow());
    }
}
