//! url-image-auto - Turns image links in outgoing chat messages into image segments.
//!
//! Message text is scanned for CQ image codes, Markdown images, and bare URLs.
//! URLs that look like images (by extension or a host/path whitelist) become
//! image segments; everything else stays plain text. Non-numeric `seed` query
//! values are replaced with generated numbers on the way.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the conversion pipeline and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and seed generation.
pub mod infrastructure;
/// Presentation layer containing output rendering.
pub mod presentation;

use std::sync::Arc;

pub use application::{ImageSegmentService, RewriteChainUseCase};
pub use domain::{Conversion, ConvertConfig, MessageChain, Segment, WhitelistRule};

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "url-image-auto";

/// Converts `text` with a clock-based seed source.
#[must_use]
pub fn convert_text(text: &str, config: &ConvertConfig) -> Conversion {
    ImageSegmentService::new(config.clone(), Arc::new(infrastructure::ClockSeedSource::new()))
        .convert(text)
}
