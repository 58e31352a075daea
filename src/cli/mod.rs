//! Command-line interface components
//!
//! This module contains CLI-specific code for the banzuke fetcher,
//! including argument parsing and the command handlers.

pub mod args;
pub mod commands;

pub use args::{BanzukeArgs, CacheAction, CacheArgs, Cli, Commands, FetchArgs, GlobalArgs};
pub use commands::{handle_banzuke, handle_cache, handle_fetch};
