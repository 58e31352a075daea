//! Banzuke Fetcher CLI application
//!
//! Command-line interface for downloading sumo tournament results and
//! printing rosters in banzuke order.

use std::process;

use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use banzuke_fetcher::cli::{handle_banzuke, handle_cache, handle_fetch, Cli, Commands};
use banzuke_fetcher::config::AppConfig;
use banzuke_fetcher::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if e.is_recoverable() {
            eprintln!("This looks temporary; try again later.");
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Config is loaded first so its log level can apply when no flag is given
    let config = AppConfig::load(cli.global.config.clone()).await?;

    init_logging(&cli, &config);

    info!("Banzuke Fetcher v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Fetch(args) => {
            debug!("Executing fetch command");
            handle_fetch(&config, &cli.global, args).await
        }
        Commands::Banzuke(args) => {
            debug!("Executing banzuke command");
            handle_banzuke(&config, &cli.global, args).await
        }
        Commands::Cache(args) => {
            debug!("Executing cache command");
            handle_cache(&config, &cli.global, args).await
        }
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli, config: &AppConfig) {
    let log_level = cli.log_level(&config.logging.level);

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("banzuke_fetcher={}", log_level).parse() {
        filter = filter.add_directive(directive);
    }

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
