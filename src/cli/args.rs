//! Command-line argument parsing for the banzuke fetcher
//!
//! This module defines the CLI structure using clap derive macros: fetching
//! results pages, printing a sorted banzuke, and inspecting the page cache.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::Division;
use crate::constants::tournament;

/// Banzuke Fetcher - download and rank sumo tournament results
#[derive(Parser, Debug)]
#[command(
    name = "banzuke_fetcher",
    version,
    about = "Download sumo tournament results and order wrestlers by rank",
    long_about = "Downloads daily results pages for each division, checks that every page really is \
for the requested day, caches accepted pages, and prints rosters in banzuke order."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Cache directory path
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download results pages for divisions and days
    Fetch(FetchArgs),

    /// Print one division's roster for a day in banzuke order
    Banzuke(BanzukeArgs),

    /// Page cache information
    Cache(CacheArgs),
}

fn parse_day(value: &str) -> Result<u8, String> {
    let day: u8 = value
        .parse()
        .map_err(|_| format!("'{}' is not a day number", value))?;
    if (tournament::FIRST_DAY..=tournament::FINAL_DAY).contains(&day) {
        Ok(day)
    } else {
        Err(format!(
            "day must be between {} and {}",
            tournament::FIRST_DAY,
            tournament::FINAL_DAY
        ))
    }
}

/// Arguments for the fetch command
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Divisions to fetch (makuuchi, juryo, makushita, sandanme, jonidan, jonokuchi); all if omitted
    #[arg(short, long = "division", value_name = "DIVISION")]
    pub divisions: Vec<Division>,

    /// Tournament days to fetch (1-15)
    #[arg(long = "day", value_name = "DAY", required = true, value_parser = parse_day)]
    pub days: Vec<u8>,

    /// Download again even if a page is cached
    #[arg(short, long)]
    pub force: bool,

    /// Fetch one page at a time instead of all at once
    #[arg(long)]
    pub sequential: bool,
}

impl FetchArgs {
    /// Divisions to fetch, defaulting to all of them
    pub fn selected_divisions(&self) -> Vec<Division> {
        if self.divisions.is_empty() {
            Division::ALL.to_vec()
        } else {
            self.divisions.clone()
        }
    }
}

/// Arguments for the banzuke command
#[derive(Args, Debug, Clone)]
pub struct BanzukeArgs {
    /// Division to list
    #[arg(short, long, default_value = "makuuchi")]
    pub division: Division,

    /// Tournament day whose results page is used (1-15)
    #[arg(long, value_parser = parse_day)]
    pub day: u8,

    /// Download again even if the page is cached
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for cache management
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache management actions
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Show cache location, entry count and size
    Info,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Logging level chosen by flags, if any was given
    pub fn log_level_override(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }

    /// Get the logging level, falling back to `default` when no flag is set
    pub fn log_level(&self, default: &str) -> tracing::Level {
        self.log_level_override()
            .or_else(|| default.parse().ok())
            .unwrap_or(tracing::Level::WARN)
    }
}
