//! Decides whether a bare URL points at an image.

use tracing::{debug, trace};

use crate::application::services::seed_normalizer::SeedNormalizer;
use crate::domain::entities::{ConvertConfig, ParsedUrl};

/// Outcome of classifying a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Whether the URL is treated as an image.
    pub is_image: bool,
    /// URL to emit, with its seed normalized when parsing succeeded.
    pub url: String,
}

impl Classification {
    fn image(url: String) -> Self {
        Self {
            is_image: true,
            url,
        }
    }

    fn not_image(url: String) -> Self {
        Self {
            is_image: false,
            url,
        }
    }
}

/// Classifies URLs by extension and whitelist.
pub struct UrlClassifier<'a> {
    config: &'a ConvertConfig,
    normalizer: &'a SeedNormalizer<'a>,
}

impl<'a> UrlClassifier<'a> {
    /// Creates a classifier over a read-only configuration.
    #[must_use]
    pub const fn new(config: &'a ConvertConfig, normalizer: &'a SeedNormalizer<'a>) -> Self {
        Self { config, normalizer }
    }

    /// Normalizes the seed, then checks the extension allowlist followed by
    /// the whitelist rules. Unparseable URLs are never images and are
    /// returned as given.
    #[must_use]
    pub fn classify(&self, url: &str) -> Classification {
        let normalized = self.normalizer.normalize(url);

        let is_image = match ParsedUrl::parse(&normalized) {
            Ok(parsed) => self.is_image(&parsed),
            Err(e) => {
                debug!(url, error = %e, "Treating unparseable url as text");
                return Classification::not_image(url.to_owned());
            }
        };

        trace!(url = %normalized, is_image, "Classified url");

        if is_image {
            Classification::image(normalized)
        } else {
            Classification::not_image(normalized)
        }
    }

    fn is_image(&self, parsed: &ParsedUrl<'_>) -> bool {
        let path = parsed.path();
        if self.config.has_image_extension(&path) {
            return true;
        }

        let host = parsed.host();
        self.config
            .effective_rules()
            .iter()
            .any(|rule| rule.matches(&host, &path))
    }
}
