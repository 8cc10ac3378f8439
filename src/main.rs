use anyhow::Context;
use clap::Parser;
use javadoc_search::Config;
use javadoc_search::cli::{Cli, Commands};
use javadoc_search::tools::{SearchRequest, handle_pattern, handle_search};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries results
    javadoc_search::tracing::init(cli.verbose);

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;

    let output = match cli.command {
        Commands::Search {
            query,
            index_dir,
            base_path,
            limit,
            json,
        } => {
            let index_dir = index_dir
                .or_else(|| config.index_dir())
                .context("No index directory; pass --index-dir or set index_dir in config")?;
            let request = SearchRequest {
                query,
                index_dir,
                base_path: base_path.unwrap_or_else(|| config.base_path.clone()),
                limit,
                json,
                options: config.search,
            };
            handle_search(request).await.inspect_err(|e| {
                tracing::error!("Search failed: {:#}", e);
            })?
        }
        Commands::Pattern { query } => handle_pattern(&query)?,
    };

    print!("{}", output);
    Ok(())
}
