use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "javadoc-search")]
#[command(about = "Search generated Java API documentation indexes", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/javadoc-search/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the index and print ranked results
    Search {
        query: String,
        /// Directory containing the *-search-index.js files
        #[arg(short = 'd', long)]
        index_dir: Option<PathBuf>,
        /// Prefix for result URLs
        #[arg(short, long)]
        base_path: Option<String>,
        #[arg(short = 'n', long, default_value = "25")]
        limit: usize,
        /// Print menu entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the patterns a query compiles to
    Pattern { query: String },
}
