//! Presentation layer rendering conversion results.

/// Terminal output formatting.
pub mod output;

pub use output::{OutputFormat, render_chain, render_conversion};
