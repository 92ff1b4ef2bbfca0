//! Command-line arguments.

use super::app_config::LogLevel;
use crate::domain::entities::WhitelistRule;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Every option overrides the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "url-image-auto",
    version,
    about = "Convert image links in chat message text into image segments",
    long_about = None
)]
pub struct CliArgs {
    /// Message text. Read from stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Rewrite a JSON message chain read from this file instead of text.
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub chain: Option<PathBuf>,

    /// Print JSON instead of one segment per line.
    #[arg(long)]
    pub json: bool,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Replace non-numeric seed query values.
    #[arg(long)]
    pub randomize_seed: Option<bool>,

    /// Convert `[CQ:image,file=...]` codes.
    #[arg(long)]
    pub convert_cq_code: Option<bool>,

    /// Convert Markdown `![alt](url)` images.
    #[arg(long)]
    pub convert_markdown: Option<bool>,

    /// Wrap rewritten plain text in zero-width spaces.
    #[arg(long)]
    pub pad_plain_text: Option<bool>,

    /// Image extension, e.g. `.png`. Replaces the configured list.
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Whitelist rule as `host` or `host/path/prefix`. Replaces the
    /// configured list.
    #[arg(long, value_name = "RULE")]
    pub whitelist: Vec<WhitelistRule>,
}
