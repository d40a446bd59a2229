use clap::Parser;
use colored::Colorize;
use wordgraph_core::cli::{self, Cli};
use wordgraph_core::exit::WordGraphExit;

fn main() -> WordGraphExit {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.target(env_logger::Target::Stderr).init();

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            WordGraphExit::Error
        }
    }
}
