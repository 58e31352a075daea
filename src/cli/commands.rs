//! Command handlers for the banzuke fetcher CLI
//!
//! This module implements the command handlers that connect CLI arguments
//! and configuration to the acquisition pipeline and the ranking engine.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::app::{
    entries_of, parse_bouts, sort_banzuke, Acquisition, AcquisitionSummary, CacheManager,
    Coordinator, ExecutionMode, Fetcher, Origin, RateLimiter, ResultsClient, RikishiEntry,
    SourceKey,
};
use crate::cli::{BanzukeArgs, CacheAction, CacheArgs, FetchArgs, GlobalArgs};
use crate::config::AppConfig;
use crate::constants::display;
use crate::errors::{AppError, Result};

/// Assemble the acquisition pipeline from configuration
async fn build_coordinator(
    config: &AppConfig,
    cache_dir: Option<PathBuf>,
) -> Result<Coordinator<ResultsClient>> {
    let client = ResultsClient::new(&config.client)?;
    let base_url = client.base_url().clone();
    let cache = CacheManager::new(config.cache_config(cache_dir)).await?;
    let limiter = Arc::new(RateLimiter::new(config.client.min_request_interval));

    info!(
        "Using cache at {} with {:?} between requests",
        cache.cache_root().display(),
        limiter.min_interval()
    );

    Ok(Coordinator::new(Fetcher::new(
        client,
        base_url,
        cache,
        limiter,
        config.validator(),
    )))
}

/// Spinner for long-running work; hidden in quiet mode
fn spinner(message: String, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style.tick_strings(display::SPINNER_FRAMES));
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(display::SPINNER_TICK);
    spinner
}

/// Handle the fetch command
///
/// Fetches every requested (division, day) page and prints one status line
/// per page.
pub async fn handle_fetch(config: &AppConfig, global: &GlobalArgs, args: FetchArgs) -> Result<()> {
    let start_time = Instant::now();
    let keys = Coordinator::<ResultsClient>::keys_for(&args.selected_divisions(), &args.days);
    if keys.is_empty() {
        return Err(AppError::generic("Nothing to fetch"));
    }

    let mode = if args.sequential {
        ExecutionMode::Sequential
    } else {
        ExecutionMode::Parallel
    };

    let coordinator = build_coordinator(config, global.cache_dir.clone()).await?;

    let progress = spinner(format!("Fetching {} results pages...", keys.len()), global.quiet);
    let result = coordinator.acquire(&keys, mode, args.force).await;
    progress.finish_and_clear();
    let acquisitions = result?;

    for acquisition in &acquisitions {
        println!("{}", format_status(acquisition));
    }

    let summary = AcquisitionSummary::from_acquisitions(&acquisitions);
    println!();
    println!("{} in {:.1}s", summary, start_time.elapsed().as_secs_f64());

    if !summary.is_complete() {
        warn!(
            "{} pages were not available for the requested day",
            summary.unavailable
        );
    }

    Ok(())
}

/// Handle the banzuke command
///
/// Fetches one results page and prints everyone who appears on it, sorted by
/// rank.
pub async fn handle_banzuke(
    config: &AppConfig,
    global: &GlobalArgs,
    args: BanzukeArgs,
) -> Result<()> {
    let key = SourceKey::new(args.division, args.day)
        .ok_or_else(|| AppError::generic(format!("Day {} is not a tournament day", args.day)))?;

    let coordinator = build_coordinator(config, global.cache_dir.clone()).await?;

    let progress = spinner(format!("Fetching {}...", key), global.quiet);
    let result = coordinator
        .acquire(&[key], ExecutionMode::Sequential, args.force)
        .await;
    progress.finish_and_clear();

    let Some(outcome) = result?.into_iter().next().and_then(|a| a.outcome) else {
        println!("Results for {} are not available yet", key);
        return Ok(());
    };

    let bouts = parse_bouts(&outcome.content)
        .ok_or_else(|| AppError::generic(format!("No results table found for {}", key)))?;
    let mut roster = entries_of(&bouts);
    sort_banzuke(&mut roster, RikishiEntry::slot);

    println!(
        "{} {} ({} wrestlers)",
        args.division.japanese_name(),
        key,
        roster.len()
    );
    for entry in &roster {
        println!("{}", format_entry(entry, args.day));
    }

    let inconsistent = roster
        .iter()
        .filter(|entry| exceeds_day(entry, args.day))
        .count();
    if inconsistent > 0 {
        warn!(
            "{} records account for more than {} days; the page may be from a later day",
            inconsistent, args.day
        );
    }

    Ok(())
}

/// Handle cache management commands
pub async fn handle_cache(config: &AppConfig, global: &GlobalArgs, args: CacheArgs) -> Result<()> {
    match args.action {
        CacheAction::Info => handle_cache_info(config, global).await,
    }
}

async fn handle_cache_info(config: &AppConfig, global: &GlobalArgs) -> Result<()> {
    let cache = CacheManager::new(config.cache_config(global.cache_dir.clone())).await?;
    let stats = cache.get_cache_stats().await;

    println!("💾 Cache Information");
    println!("===================");
    println!("Location: {}", stats.cache_root.display());
    println!("Cached pages: {}", stats.entry_count);
    println!("Cache size: {}", stats.format_cache_size());
    if let Some(written) = stats.last_written {
        let written: DateTime<Local> = written.into();
        println!("Last written: {}", written.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn format_status(acquisition: &Acquisition) -> String {
    let status = match &acquisition.outcome {
        Some(outcome) if outcome.origin == Origin::Cache => "cached",
        Some(_) => "downloaded",
        None => "unavailable",
    };
    format!("{:<20} {}", acquisition.key.to_string(), status)
}

/// A record can never cover more days than have been held
fn exceeds_day(entry: &RikishiEntry, day: u8) -> bool {
    entry.record.days_accounted() > u32::from(day)
}

fn format_entry(entry: &RikishiEntry, day: u8) -> String {
    let rank = if entry.rank_text.is_empty() {
        "-"
    } else {
        entry.rank_text.as_str()
    };
    let marker = if exceeds_day(entry, day) { " !" } else { "" };
    format!(
        "{}{:<8} {:<12} {}{}",
        entry.side.japanese_name(),
        rank,
        entry.name,
        entry.record,
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{normalize, Division, FetchOutcome, RikishiRecord, Side};

    #[test]
    fn test_format_status() {
        let key = SourceKey::new(Division::Juryo, 4).unwrap();
        let cached = Acquisition {
            key,
            outcome: Some(FetchOutcome {
                key,
                content: String::new(),
                origin: Origin::Cache,
                accepted: true,
                validation: None,
            }),
        };
        let missing = Acquisition { key, outcome: None };

        assert!(format_status(&cached).ends_with("cached"));
        assert!(format_status(&cached).starts_with("juryo day 4"));
        assert!(format_status(&missing).ends_with("unavailable"));
    }

    fn maegashira(wins: u32, losses: u32, rest: Option<u32>) -> RikishiEntry {
        RikishiEntry {
            side: Side::West,
            rank_text: "前頭三".to_string(),
            rank: normalize("前頭三"),
            name: "翠富士".to_string(),
            record: RikishiRecord { wins, losses, rest },
        }
    }

    #[test]
    fn test_format_entry() {
        let line = format_entry(&maegashira(5, 3, None), 8);
        assert!(line.starts_with("西前頭三"));
        assert!(line.contains("翠富士"));
        assert!(line.ends_with("5勝3敗"));
    }

    #[test]
    fn test_record_longer_than_the_day_is_flagged() {
        let absent = maegashira(2, 3, Some(4));
        assert!(!exceeds_day(&absent, 9));
        assert!(format_entry(&absent, 9).ends_with("2勝3敗4休"));

        assert!(exceeds_day(&absent, 8));
        assert!(format_entry(&absent, 8).ends_with("2勝3敗4休 !"));
    }

    #[test]
    fn test_quiet_spinner_is_hidden() {
        assert!(spinner("working".to_string(), true).is_hidden());
    }
}
