//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::entities::ConvertConfig;

pub(crate) const APP_NAME: &str = "url-image-auto";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and merged with CLI flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Conversion options.
    #[serde(default)]
    pub convert: ConvertConfig,

    /// Message chain options.
    #[serde(default)]
    pub chain: ChainConfig,
}

/// Message chain rewrite configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Wrap rewritten plain text in zero-width spaces.
    #[serde(default = "default_true")]
    pub pad_plain_text: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            pad_plain_text: true,
        }
    }
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(randomize_seed) = args.randomize_seed {
            self.convert.randomize_seed = randomize_seed;
        }
        if let Some(convert_cq_code) = args.convert_cq_code {
            self.convert.convert_cq_code = convert_cq_code;
        }
        if let Some(convert_markdown) = args.convert_markdown {
            self.convert.convert_markdown = convert_markdown;
        }
        if let Some(pad_plain_text) = args.pad_plain_text {
            self.chain.pad_plain_text = pad_plain_text;
        }
        if !args.extensions.is_empty() {
            self.convert.extensions.clone_from(&args.extensions);
        }
        if !args.whitelist.is_empty() {
            self.convert.whitelist_rules.clone_from(&args.whitelist);
        }
    }
}
