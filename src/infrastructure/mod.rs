//! Infrastructure layer with configuration loading and seed generation.

/// Application configuration.
pub mod config;
/// Clock-based seed generation.
pub mod seed_source;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use seed_source::ClockSeedSource;
