//! Output segments handed to the message host.

use serde::{Deserialize, Serialize};

/// Final unit of a converted message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Display text. Never empty.
    Plain {
        /// The text.
        text: String,
    },
    /// Image referenced by URL.
    Image {
        /// Image URL.
        url: String,
    },
}

impl Segment {
    /// Creates a plain segment.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    /// Creates an image segment.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// Returns the text or URL carried by the segment.
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::Plain { text } => text,
            Self::Image { url } => url,
        }
    }

    /// Returns true for image segments.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Result of converting one message text.
///
/// A conversion without image segments means the host must leave its
/// original message unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversion {
    segments: Vec<Segment>,
}

impl Conversion {
    /// Wraps assembled segments.
    #[must_use]
    pub const fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns the segments in message order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consumes the conversion and returns its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Returns the number of image segments.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_image()).count()
    }

    /// Returns true if at least one image was produced.
    #[must_use]
    pub fn has_images(&self) -> bool {
        self.segments.iter().any(Segment::is_image)
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl IntoIterator for Conversion {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_count() {
        let conversion = Conversion::new(vec![
            Segment::plain("a "),
            Segment::image("https://a.com/1.png"),
            Segment::plain(" b"),
            Segment::image("https://a.com/2.png"),
        ]);

        assert_eq!(conversion.image_count(), 2);
        assert!(conversion.has_images());
        assert_eq!(conversion.len(), 4);
    }

    #[test]
    fn test_plain_only_has_no_images() {
        let conversion = Conversion::new(vec![Segment::plain("hello")]);
        assert!(!conversion.has_images());
        assert_eq!(conversion.image_count(), 0);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Conversion::new(vec![
            Segment::plain("hi "),
            Segment::image("https://a.com/x.png"),
        ]))
        .unwrap();

        assert_eq!(
            json,
            r#"[{"type":"plain","text":"hi "},{"type":"image","url":"https://a.com/x.png"}]"#
        );
    }
}
