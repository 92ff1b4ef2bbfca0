//! Detection of bare image URLs inside plain text.

use std::sync::LazyLock;

use regex::Regex;

use crate::application::services::seed_normalizer::SeedNormalizer;
use crate::application::services::url_classifier::UrlClassifier;
use crate::domain::entities::Chunk;

static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>()\[\]"']+"#).unwrap());

/// Final pass over extracted chunks.
///
/// Plain chunks are split around bare URLs the classifier accepts as images.
/// Forced images only get their seed normalized.
pub struct BareUrlScanner<'a> {
    classifier: &'a UrlClassifier<'a>,
    normalizer: &'a SeedNormalizer<'a>,
}

impl<'a> BareUrlScanner<'a> {
    /// Creates a scanner.
    #[must_use]
    pub const fn new(
        classifier: &'a UrlClassifier<'a>,
        normalizer: &'a SeedNormalizer<'a>,
    ) -> Self {
        Self {
            classifier,
            normalizer,
        }
    }

    /// Produces the final chunk list in source order.
    #[must_use]
    pub fn scan(&self, chunks: Vec<Chunk>) -> Vec<Chunk> {
        let mut out = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            match chunk {
                Chunk::Image { url, forced, span } => out.push(Chunk::Image {
                    url: self.normalizer.normalize(&url),
                    forced,
                    span,
                }),
                Chunk::Plain { text, span } => self.split_plain(&text, span.start, &mut out),
            }
        }

        out
    }

    fn split_plain(&self, text: &str, offset: usize, out: &mut Vec<Chunk>) {
        let mut idx = 0;

        for m in BARE_URL_RE.find_iter(text) {
            let classification = self.classifier.classify(m.as_str());
            if !classification.is_image {
                continue;
            }

            if m.start() > idx {
                out.push(Chunk::plain(
                    &text[idx..m.start()],
                    offset + idx..offset + m.start(),
                ));
            }
            out.push(Chunk::detected_image(
                classification.url,
                offset + m.start()..offset + m.end(),
            ));
            idx = m.end();
        }

        if idx < text.len() {
            out.push(Chunk::plain(&text[idx..], offset + idx..offset + text.len()));
        }
    }
}
