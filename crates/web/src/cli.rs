//! Command-line arguments for the headless runner.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Expose connection overrides that take precedence over the environment.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `monocle_config::ConfigLoader`).

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "monocle-web")]
#[command(about = "Load a Monocle dashboard page headlessly and print its state", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  monocle-web http://localhost:8080/openstack\n  monocle-web 'http://localhost:8080/openstack/changes?q=state:open'\n  monocle-web http://localhost:8080/zuul/repos --query 'author:alice' --base-url http://monocle:8080\n"
)]
pub struct Cli {
    /// Dashboard page URL to load (path selects the index and view)
    pub page_url: String,

    /// Base URL of the Monocle API (e.g., http://localhost:8080)
    #[arg(short, long, env = "MONOCLE_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "MONOCLE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Set the search query after the page has loaded
    #[arg(short, long)]
    pub query: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Print compact JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,
}
