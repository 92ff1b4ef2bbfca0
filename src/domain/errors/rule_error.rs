//! Whitelist rule parsing errors.

use thiserror::Error;

/// Whitelist rule parsing error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum RuleError {
    #[error("whitelist rule has no host: {input:?}")]
    MissingHost { input: String },

    #[error("invalid whitelist host: {host:?}")]
    InvalidHost { host: String },
}

impl RuleError {
    /// Creates missing host error.
    #[must_use]
    pub fn missing_host(input: impl Into<String>) -> Self {
        Self::MissingHost {
            input: input.into(),
        }
    }

    /// Creates invalid host error.
    #[must_use]
    pub fn invalid_host(host: impl Into<String>) -> Self {
        Self::InvalidHost { host: host.into() }
    }
}
