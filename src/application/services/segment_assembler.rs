//! Final step of the pipeline.

use crate::domain::entities::{Chunk, Conversion, Segment};

/// Converts chunks into output segments.
pub struct SegmentAssembler;

impl SegmentAssembler {
    /// Turns final chunks into segments, dropping empty plain text.
    #[must_use]
    pub fn assemble(chunks: Vec<Chunk>) -> Conversion {
        let segments = chunks
            .into_iter()
            .filter_map(|chunk| match chunk {
                Chunk::Plain { text, .. } if text.is_empty() => None,
                Chunk::Plain { text, .. } => Some(Segment::plain(text)),
                Chunk::Image { url, .. } => Some(Segment::image(url)),
            })
            .collect();

        Conversion::new(segments)
    }
}
