//! Normalization of the `seed` query parameter on image URLs.

use tracing::{debug, trace};
use url::form_urlencoded;

use crate::domain::entities::ParsedUrl;
use crate::domain::ports::SeedSource;

/// Query parameter controlling randomized image generation.
pub const SEED_PARAM: &str = "seed";

/// Values explicitly asking for a random seed.
pub const RANDOM_SENTINELS: &[&str] = &["random", "rand", "随机值", "随机数字"];

/// Replaces non-numeric `seed` values with freshly generated numbers.
pub struct SeedNormalizer<'a> {
    enabled: bool,
    source: &'a dyn SeedSource,
}

impl<'a> SeedNormalizer<'a> {
    /// Creates a normalizer. When `enabled` is false every URL passes through.
    #[must_use]
    pub fn new(enabled: bool, source: &'a dyn SeedSource) -> Self {
        Self { enabled, source }
    }

    /// Returns `url` with its seed replaced if the seed is present and not
    /// purely numeric. Any parse failure returns `url` unchanged.
    #[must_use]
    pub fn normalize(&self, url: &str) -> String {
        if !self.enabled {
            return url.to_owned();
        }

        match ParsedUrl::parse(url) {
            Ok(parsed) => self
                .rewrite_seed(&parsed)
                .unwrap_or_else(|| url.to_owned()),
            Err(e) => {
                debug!(url, error = %e, "Leaving seed untouched");
                url.to_owned()
            }
        }
    }

    fn rewrite_seed(&self, parsed: &ParsedUrl<'_>) -> Option<String> {
        let query = parsed.raw_query()?;
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        let current = pairs
            .iter()
            .find(|(key, _)| key == SEED_PARAM)
            .map(|(_, value)| value.trim())?;

        if is_numeric_seed(current) {
            return None;
        }

        let fresh = self.source.next_seed().to_string();
        trace!(
            previous = current,
            sentinel = is_random_sentinel(current),
            seed = %fresh,
            "Replacing seed"
        );

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut replaced = false;
        for (key, value) in &pairs {
            if key != SEED_PARAM {
                serializer.append_pair(key, value);
            } else if !replaced {
                serializer.append_pair(key, &fresh);
                replaced = true;
            }
        }

        Some(parsed.with_raw_query(&serializer.finish()))
    }
}

/// Returns true if `value` is a non-empty run of ASCII digits.
#[must_use]
pub fn is_numeric_seed(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true for the words that explicitly request a random seed.
#[must_use]
pub fn is_random_sentinel(value: &str) -> bool {
    RANDOM_SENTINELS
        .iter()
        .any(|sentinel| sentinel.eq_ignore_ascii_case(value))
}
