//! Bookfind CLI - Browse the Gutendex book catalog from the terminal

mod commands;
mod input;
mod render;

use anyhow::{Context, Result};
use bookfind_core::CatalogConfig;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookfind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog endpoint (overrides BOOKFIND_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Search debounce in milliseconds (overrides BOOKFIND_DEBOUNCE_MS)
    #[arg(long, global = true, value_name = "MS")]
    debounce_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog once and print a page of results
    Search(commands::SearchArgs),

    /// Browse the catalog interactively, one command per line
    Browse,

    /// List the available filter and sort values
    Filters,
}

/// Environment first, then command-line overrides
fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = CatalogConfig::from_env().context("Invalid BOOKFIND_* environment")?;

    if let Some(base_url) = &cli.base_url {
        config = config
            .with_base_url(base_url.clone())
            .context("Invalid --base-url")?;
    }
    if let Some(millis) = cli.debounce_ms {
        config = config.with_debounce(Duration::from_millis(millis));
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for results
    let filter = if cli.verbose {
        "bookfind_cli=debug,bookfind_core=debug"
    } else {
        "bookfind_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&cli)?;
    tracing::debug!(base_url = %config.base_url, debounce = ?config.debounce, "Loaded configuration");

    match cli.command {
        Commands::Search(args) => commands::search(&config, args).await,

        Commands::Browse => commands::browse(&config).await,

        Commands::Filters => commands::filters(),
    }
}
