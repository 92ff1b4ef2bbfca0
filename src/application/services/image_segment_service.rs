//! Conversion of message text into plain and image segments.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::bare_url_scanner::BareUrlScanner;
use crate::application::services::pattern_extractor::PatternExtractor;
use crate::application::services::seed_normalizer::SeedNormalizer;
use crate::application::services::segment_assembler::SegmentAssembler;
use crate::application::services::url_classifier::UrlClassifier;
use crate::domain::entities::{Conversion, ConvertConfig, Segment};
use crate::domain::ports::SeedSource;

/// Runs the extraction, classification, and assembly passes over one text.
///
/// Holds no state besides its read-only configuration, so a single instance
/// can serve concurrent callers.
pub struct ImageSegmentService {
    config: ConvertConfig,
    seed_source: Arc<dyn SeedSource>,
}

impl ImageSegmentService {
    /// Creates a new service.
    #[must_use]
    pub fn new(config: ConvertConfig, seed_source: Arc<dyn SeedSource>) -> Self {
        Self {
            config,
            seed_source,
        }
    }

    /// Converts `text` into ordered segments. Never fails: anything that
    /// cannot be understood stays plain text.
    #[must_use]
    pub fn convert(&self, text: &str) -> Conversion {
        if !text.contains("http") {
            return plain_only(text);
        }

        let normalizer =
            SeedNormalizer::new(self.config.randomize_seed, self.seed_source.as_ref());
        let classifier = UrlClassifier::new(&self.config, &normalizer);

        let chunks = PatternExtractor::new(&self.config).extract(text);
        let chunks = BareUrlScanner::new(&classifier, &normalizer).scan(chunks);
        let conversion = SegmentAssembler::assemble(chunks);

        debug!(
            segments = conversion.len(),
            images = conversion.image_count(),
            "Converted message text"
        );

        conversion
    }
}

fn plain_only(text: &str) -> Conversion {
    if text.is_empty() {
        Conversion::default()
    } else {
        Conversion::new(vec![Segment::plain(text)])
    }
}
