//! Catalog command implementation

use crate::config::Config;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use livraria_core::render::LOADING_TEXT;
use livraria_core::{CatalogView, HttpBookSource, Screen};
use std::process::ExitCode;
use std::time::Duration;

/// Fetch the catalog once and print it
///
/// A failed fetch is printed like any other screen and turns into exit
/// status 1; only setup problems are returned as errors.
pub async fn catalog(config: &Config) -> Result<ExitCode> {
    let source = HttpBookSource::new(config.endpoint.as_str())
        .with_context(|| format!("Failed to set up books endpoint {}", config.endpoint))?;

    let mut view = CatalogView::mount(source);

    // Spinner while loading
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .context("Invalid spinner template")?,
    );
    pb.set_message(LOADING_TEXT);
    pb.enable_steady_tick(Duration::from_millis(100));

    view.settle().await;
    pb.finish_and_clear();

    let screen = view.render();
    let status = match &screen {
        Screen::Grid(cards) => {
            tracing::info!("Loaded {} books", cards.len());
            ExitCode::SUCCESS
        }
        _ => ExitCode::FAILURE,
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&screen)?);
    } else {
        print!("{}", screen.to_text(&config.layout));
    }

    Ok(status)
}
