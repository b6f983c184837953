//! # tob-runner
//!
//! Main entry point for the top-of-book depth feed.
//!
//! Loads the feed configuration (JSON file or `--symbols` on the command
//! line), starts one stream worker per symbol, and logs every merged
//! snapshot until all symbol streams have terminated.
//!
//! # Usage
//!
//! ```bash
//! tob-runner config.json --log-level info
//! tob-runner --symbols btcusdt,ethusdt,xlmusdt
//! ```

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tob_core::config::FeedConfig;
use tob_md::{DepthFeed, LogSink};
use tracing::info;

/// Top-of-Book Depth Feed Runner.
#[derive(Parser)]
#[command(name = "tob-runner", about = "Top-of-Book Depth Feed Runner")]
struct Cli {
    /// Configuration file path (JSON).
    config: Option<PathBuf>,

    /// Comma-separated symbol list, used instead of a config file.
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,

    /// Log level (trace, debug, info, warn, error). Overrides the config.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Optional log directory for file output. Overrides the config.
    #[arg(long)]
    log_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Resolve configuration
    let config = match &cli.config {
        Some(path) => tob_core::config::load_config(path)?,
        None if !cli.symbols.is_empty() => {
            let config = FeedConfig::from_symbols(cli.symbols.clone());
            config.validate()?;
            config
        }
        None => bail!("either a config file or --symbols is required"),
    };

    // 2. Initialize logging (CLI flags win over config values)
    let log_level = cli
        .log_level
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    let log_dir = cli.log_dir.or_else(|| config.log_path.clone());
    tob_core::logging::init_logging(&log_level, log_dir.as_deref(), "tob-runner");

    info!(
        "tob-runner starting — {} symbol(s), ws_base={}",
        config.symbols.len(),
        config.ws_base,
    );

    // 3. Run the feed until every symbol stream terminates
    let feed = DepthFeed::new(config);
    let mut sink = LogSink;
    feed.run(&mut sink).await;

    info!("finished");
    Ok(())
}
