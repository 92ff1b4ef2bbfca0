//! Host message chain model.

use serde::{Deserialize, Serialize};

/// One component of an outgoing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageComponent {
    /// Plain text.
    Plain {
        /// The text.
        text: String,
    },
    /// Image referenced by URL.
    Image {
        /// Image URL.
        url: String,
    },
    /// Any component the rewriter does not understand. Kept in place.
    Other {
        /// Host-specific component name.
        kind: String,
        /// Opaque component payload.
        #[serde(default)]
        data: serde_json::Value,
    },
}

impl MessageComponent {
    /// Creates a plain text component.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    /// Creates an image component.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// Returns the text of a plain component.
    #[must_use]
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Self::Plain { text } => Some(text),
            _ => None,
        }
    }
}

/// Ordered list of message components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageChain {
    components: Vec<MessageComponent>,
}

impl MessageChain {
    /// Creates a chain.
    #[must_use]
    pub const fn new(components: Vec<MessageComponent>) -> Self {
        Self { components }
    }

    /// Returns the components.
    #[must_use]
    pub fn components(&self) -> &[MessageComponent] {
        &self.components
    }

    /// Appends a component.
    pub fn push(&mut self, component: MessageComponent) {
        self.components.push(component);
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the chain has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl From<Vec<MessageComponent>> for MessageChain {
    fn from(components: Vec<MessageComponent>) -> Self {
        Self::new(components)
    }
}

impl<'a> IntoIterator for &'a MessageChain {
    type Item = &'a MessageComponent;
    type IntoIter = std::slice::Iter<'a, MessageComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_chain() {
        let json = r#"[
            {"type": "plain", "text": "hello"},
            {"type": "other", "kind": "at", "data": {"qq": 10001}},
            {"type": "image", "url": "https://a.com/x.png"}
        ]"#;

        let chain: MessageChain = serde_json::from_str(json).unwrap();

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.components()[0].plain_text(), Some("hello"));
        assert!(matches!(
            &chain.components()[1],
            MessageComponent::Other { kind, .. } if kind == "at"
        ));
        assert_eq!(chain.components()[2].plain_text(), None);
    }
}
