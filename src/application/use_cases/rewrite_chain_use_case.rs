//! Message chain rewrite use case.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::application::services::ImageSegmentService;
use crate::domain::entities::{MessageChain, MessageComponent, Segment};

/// Zero-width space wrapped around rewritten plain text.
pub const LAYOUT_PADDING: char = '\u{200b}';

/// Replaces plain text components of an outgoing chain with plain and image
/// components.
pub struct RewriteChainUseCase {
    service: Arc<ImageSegmentService>,
    pad_plain_text: bool,
}

impl RewriteChainUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(service: Arc<ImageSegmentService>, pad_plain_text: bool) -> Self {
        Self {
            service,
            pad_plain_text,
        }
    }

    /// Rewrites the chain.
    ///
    /// Returns `None` when no image was found, meaning the original chain
    /// must be sent unmodified.
    #[must_use]
    pub fn execute(&self, chain: &MessageChain) -> Option<MessageChain> {
        let mut rewritten = MessageChain::default();
        let mut images = 0usize;

        for component in chain {
            let Some(text) = component.plain_text() else {
                rewritten.push(component.clone());
                continue;
            };

            for segment in self.service.convert(text) {
                match segment {
                    Segment::Plain { text } => rewritten.push(self.plain_component(&text)),
                    Segment::Image { url } => {
                        trace!(url = %url, "Emitting image component");
                        rewritten.push(MessageComponent::image(url));
                        images += 1;
                    }
                }
            }
        }

        if images == 0 {
            debug!("No image urls found, leaving chain unmodified");
            return None;
        }

        debug!(
            images,
            components = rewritten.len(),
            "Rewrote message chain"
        );
        Some(rewritten)
    }

    fn plain_component(&self, text: &str) -> MessageComponent {
        if self.pad_plain_text {
            MessageComponent::plain(format!("{LAYOUT_PADDING}{text}{LAYOUT_PADDING}"))
        } else {
            MessageComponent::plain(text)
        }
    }
}
