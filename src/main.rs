//! price-compare - compare smartphone prices across Amazon India and Flipkart
//!
//! Results are grouped into price bands and printed as plain-text tables.

use anyhow::Result;
use clap::Parser;
use price_compare::commands::{CompareCommand, DEFAULT_TERMS};
use price_compare::config::Config;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "price-compare",
    version,
    about = "Compare smartphone prices across Amazon India and Flipkart",
    long_about = "Searches Amazon India and Flipkart for each term, keeps listings priced at or above the lowest price band, and prints them grouped by band."
)]
struct Cli {
    /// Search terms (defaults to a few flagship phones)
    terms: Vec<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "PRICE_COMPARE_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Minimum pause after each page, in milliseconds
    #[arg(long)]
    delay_min: Option<u64>,

    /// Maximum pause after each page, in milliseconds
    #[arg(long)]
    delay_max: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(delay) = cli.delay_min {
        config.delay_min_ms = delay;
    }
    if let Some(delay) = cli.delay_max {
        config.delay_max_ms = delay;
    }

    let terms = if cli.terms.is_empty() {
        DEFAULT_TERMS.iter().map(|t| t.to_string()).collect()
    } else {
        cli.terms
    };

    info!("Scraping prices for: {}", terms.join(", "));

    let cmd = CompareCommand::new(config);
    let output = cmd.execute(&terms).await?;
    println!("{}", output);

    Ok(())
}
