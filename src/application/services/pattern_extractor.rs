//! Extraction of explicit image references from message text.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{Chunk, ConvertConfig};

static CQ_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[CQ:image,(?:[^\]]*?,)?file=(https?://[^,\]\s]+)[^\]]*\]").unwrap()
});

static MD_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\((https?://[^)\s]+)\)").unwrap());

/// Explicit image syntaxes, in the order they are extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSyntax {
    /// `[CQ:image,file=https://...]`
    CqCode,
    /// `![alt](https://...)`
    Markdown,
}

impl ImageSyntax {
    /// Extraction precedence.
    pub const ORDER: [Self; 2] = [Self::CqCode, Self::Markdown];

    /// Returns true if the configuration enables this syntax.
    #[must_use]
    pub const fn is_enabled(self, config: &ConvertConfig) -> bool {
        match self {
            Self::CqCode => config.convert_cq_code,
            Self::Markdown => config.convert_markdown,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::CqCode => &*CQ_IMAGE_RE,
            Self::Markdown => &*MD_IMAGE_RE,
        }
    }
}

/// Splits text into plain chunks and forced image chunks.
pub struct PatternExtractor<'a> {
    config: &'a ConvertConfig,
}

impl<'a> PatternExtractor<'a> {
    /// Creates an extractor over a read-only configuration.
    #[must_use]
    pub const fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    /// Runs every enabled pass in precedence order. Each pass only rescans
    /// the plain chunks left by the previous one.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = if text.is_empty() {
            Vec::new()
        } else {
            vec![Chunk::plain(text, 0..text.len())]
        };

        for syntax in ImageSyntax::ORDER {
            if syntax.is_enabled(self.config) {
                chunks = split_plain_chunks(chunks, syntax.pattern());
            }
        }

        chunks
    }
}

fn split_plain_chunks(chunks: Vec<Chunk>, pattern: &Regex) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        match chunk {
            Chunk::Plain { text, span } => split_by_pattern(&text, span.start, pattern, &mut out),
            image @ Chunk::Image { .. } => out.push(image),
        }
    }

    out
}

fn split_by_pattern(text: &str, offset: usize, pattern: &Regex, out: &mut Vec<Chunk>) {
    let mut idx = 0;

    for cap in pattern.captures_iter(text) {
        let (Some(whole), Some(target)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let url = target.as_str().trim();
        if url.is_empty() {
            continue;
        }

        if whole.start() > idx {
            out.push(Chunk::plain(
                &text[idx..whole.start()],
                offset + idx..offset + whole.start(),
            ));
        }
        out.push(Chunk::forced_image(
            url,
            offset + whole.start()..offset + whole.end(),
        ));
        idx = whole.end();
    }

    if idx < text.len() {
        out.push(Chunk::plain(&text[idx..], offset + idx..offset + text.len()));
    }
}
