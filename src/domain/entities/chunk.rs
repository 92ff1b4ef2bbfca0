//! Intermediate spans produced while extracting image references.

use std::ops::Range;

/// Labeled span of a message's text.
///
/// `span` is the byte range of the source text the chunk was cut from. For a
/// plain chunk the span covers exactly its text; for an image chunk it covers
/// the whole matched reference (the full `![alt](url)` link, for instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// Plain text.
    Plain {
        /// The text.
        text: String,
        /// Source byte range.
        span: Range<usize>,
    },
    /// Image reference.
    Image {
        /// Target URL.
        url: String,
        /// Whether the image came from explicit Markdown or CQ syntax.
        forced: bool,
        /// Source byte range.
        span: Range<usize>,
    },
}

impl Chunk {
    /// Creates a plain chunk.
    #[must_use]
    pub fn plain(text: impl Into<String>, span: Range<usize>) -> Self {
        Self::Plain {
            text: text.into(),
            span,
        }
    }

    /// Creates an image chunk found through explicit image syntax.
    #[must_use]
    pub fn forced_image(url: impl Into<String>, span: Range<usize>) -> Self {
        Self::Image {
            url: url.into(),
            forced: true,
            span,
        }
    }

    /// Creates an image chunk inferred from a bare URL.
    #[must_use]
    pub fn detected_image(url: impl Into<String>, span: Range<usize>) -> Self {
        Self::Image {
            url: url.into(),
            forced: false,
            span,
        }
    }

    /// Returns the text of a plain chunk or the URL of an image chunk.
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::Plain { text, .. } => text,
            Self::Image { url, .. } => url,
        }
    }

    /// Returns the source byte range.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Plain { span, .. } | Self::Image { span, .. } => span.clone(),
        }
    }

    /// Returns true for image chunks produced by explicit syntax.
    #[must_use]
    pub const fn is_forced(&self) -> bool {
        matches!(self, Self::Image { forced: true, .. })
    }

    /// Returns true for plain chunks.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        matches!(self, Self::Plain { .. })
    }
}
