//! Monocle web runner: load one dashboard page against a live backend.
//!
//! Responsibilities:
//! - Initialize logging and configuration.
//! - Drive a [`Session`] until the page's resources have loaded.
//! - Print the resulting snapshot as JSON on stdout.
//!
//! Invariants:
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > defaults.
//! - Logs go to a daily rolling file, never to stdout.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use monocle_client::MonocleClient;
use monocle_config::ConfigLoader;
use monocle_web::cli::Cli;
use monocle_web::{Action, MemoryLocation, Session};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "monocle-web.log");
    let (log_writer, _flush_on_exit) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(log_writer))
        .init();

    let mut loader = ConfigLoader::new().load_dotenv()?.from_env()?;
    if let Some(base_url) = cli.base_url.clone() {
        loader = loader.with_base_url(base_url);
    }
    if let Some(timeout) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout));
    }
    let config = loader.build().context("Failed to load configuration")?;

    let client = MonocleClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to build API client")?;
    tracing::info!(base_url = client.base_url(), "Client ready");

    let location = MemoryLocation::parse(&cli.page_url)
        .with_context(|| format!("Invalid page URL: {}", cli.page_url))?;

    let mut session = Session::new(client, location);
    session.settle().await;
    if let Some(query) = cli.query {
        session.dispatch(Action::SetQuery(query));
        session.settle().await;
    }

    let snapshot = session.snapshot();
    let output = if cli.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{output}");
    Ok(())
}
