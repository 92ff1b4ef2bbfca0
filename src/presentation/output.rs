//! Rendering of conversion results for the terminal.

use std::fmt::Write;

use crate::domain::entities::{Conversion, MessageChain, MessageComponent, Segment};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `kind<TAB>payload` line per item.
    Lines,
    /// Pretty JSON.
    Json,
}

impl OutputFormat {
    /// Picks the format from the `--json` flag.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Lines }
    }
}

/// Renders segments.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_conversion(
    conversion: &Conversion,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(conversion).map(|json| json + "\n"),
        OutputFormat::Lines => {
            let mut out = String::new();
            for segment in conversion.segments() {
                match segment {
                    Segment::Plain { text } => push_line(&mut out, "plain", &format!("{text:?}")),
                    Segment::Image { url } => push_line(&mut out, "image", url),
                }
            }
            Ok(out)
        }
    }
}

/// Renders a message chain.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_chain(
    chain: &MessageChain,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(chain).map(|json| json + "\n"),
        OutputFormat::Lines => {
            let mut out = String::new();
            for component in chain {
                match component {
                    MessageComponent::Plain { text } => {
                        push_line(&mut out, "plain", &format!("{text:?}"));
                    }
                    MessageComponent::Image { url } => push_line(&mut out, "image", url),
                    MessageComponent::Other { kind, data } => {
                        push_line(&mut out, kind, &data.to_string());
                    }
                }
            }
            Ok(out)
        }
    }
}

fn push_line(out: &mut String, kind: &str, payload: &str) {
    let _ = writeln!(out, "{kind}\t{payload}");
}
