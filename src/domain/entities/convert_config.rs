//! Conversion options read by the segment pipeline.

use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::domain::errors::RuleError;

/// Host of the built-in rule used when no whitelist is configured.
pub const FALLBACK_RULE_HOST: &str = "krcpsqplffnigtjeshns.supabase.co";

/// Path prefix of the built-in rule used when no whitelist is configured.
pub const FALLBACK_RULE_PATH: &str = "/functions/v1/random/biaoqing";

static FALLBACK_RULES: LazyLock<Vec<WhitelistRule>> =
    LazyLock::new(|| vec![WhitelistRule::new(FALLBACK_RULE_HOST, FALLBACK_RULE_PATH)]);

/// Marks URLs on a host (and optionally under a path) as images regardless
/// of their extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistRule {
    /// Exact host to match, case-insensitive. An empty host never matches.
    #[serde(default)]
    pub host: String,

    /// Path prefix to match, case-insensitive. Empty matches any path.
    #[serde(default, alias = "path_chars")]
    pub path_prefix: String,
}

impl WhitelistRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(host: impl Into<String>, path_prefix: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path_prefix: path_prefix.into(),
        }
    }

    /// Checks a URL host and path, both already lowercased.
    #[must_use]
    pub fn matches(&self, host: &str, path: &str) -> bool {
        if self.host.is_empty() || self.host.to_lowercase() != host {
            return false;
        }

        self.path_prefix.is_empty() || path.starts_with(&self.path_prefix.to_lowercase())
    }
}

impl FromStr for WhitelistRule {
    type Err = RuleError;

    /// Parses `host` or `host/path/prefix`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix("https://")
            .or_else(|| s.strip_prefix("http://"))
            .unwrap_or(s);

        let (host, path) = s.find('/').map_or((s, ""), |idx| s.split_at(idx));

        if host.is_empty() {
            return Err(RuleError::missing_host(s));
        }
        if host.contains(char::is_whitespace) {
            return Err(RuleError::invalid_host(host));
        }

        Ok(Self::new(host, path))
    }
}

impl std::fmt::Display for WhitelistRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.host, self.path_prefix)
    }
}

/// Options controlling how message text is converted.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Image file suffixes, matched case-insensitively against URL paths.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Replace non-numeric `seed` query values with generated numbers.
    #[serde(default = "default_true")]
    pub randomize_seed: bool,

    /// Extract `[CQ:image,file=...]` codes.
    #[serde(default = "default_true")]
    pub convert_cq_code: bool,

    /// Extract Markdown `![alt](url)` images.
    #[serde(default = "default_true")]
    pub convert_markdown: bool,

    /// Ordered whitelist. When empty, the built-in fallback rule applies.
    #[serde(default)]
    pub whitelist_rules: Vec<WhitelistRule>,
}

impl ConvertConfig {
    /// Returns the rules to test, falling back to the built-in rule only
    /// when the configured list is empty.
    #[must_use]
    pub fn effective_rules(&self) -> &[WhitelistRule] {
        if self.whitelist_rules.is_empty() {
            FALLBACK_RULES.as_slice()
        } else {
            self.whitelist_rules.as_slice()
        }
    }

    /// Returns true if the lowercased path ends with a configured extension.
    #[must_use]
    pub fn has_image_extension(&self, path: &str) -> bool {
        self.extensions
            .iter()
            .filter(|ext| !ext.is_empty())
            .any(|ext| path.ends_with(&ext.to_lowercase()))
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            randomize_seed: true,
            convert_cq_code: true,
            convert_markdown: true,
            whitelist_rules: Vec::new(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    [".png", ".jpg", ".jpeg", ".gif", ".webp", ".bmp"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_true() -> bool {
    true
}
