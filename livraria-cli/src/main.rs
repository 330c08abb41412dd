//! Livraria CLI - Terminal catalog of the Harry Potter book store

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate the grid width (must be at least MIN_WIDTH)
fn parse_width(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < livraria_core::render::MIN_WIDTH {
        Err(format!(
            "width must be at least {}",
            livraria_core::render::MIN_WIDTH
        ))
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "livraria")]
#[command(author, version, about = "Browse the book store catalog", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Books endpoint URL (overrides LIVRARIA_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Grid width in terminal columns
    #[arg(short, long, default_value_t = livraria_core::render::DEFAULT_WIDTH, value_parser = parse_width)]
    width: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the catalog itself
    let filter = if cli.verbose {
        "livraria_cli=debug,livraria_core=debug"
    } else {
        "livraria_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::resolve(cli.endpoint, cli.width, cli.json);
    commands::catalog(&config).await
}
