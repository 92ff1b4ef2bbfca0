//! URL parsing error types.

use thiserror::Error;

/// Reasons a URL cannot be classified.
///
/// These never leave the conversion pipeline: callers log them and fall back
/// to treating the URL as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum UrlError {
    #[error("invalid url: {reason}")]
    Invalid { reason: String },

    #[error("unsupported url scheme: {scheme}")]
    UnsupportedScheme { scheme: String },

    #[error("url has no host")]
    MissingHost,
}

impl UrlError {
    /// Creates invalid url error.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    /// Creates unsupported scheme error.
    #[must_use]
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        match err {
            url::ParseError::EmptyHost => Self::MissingHost,
            other => Self::invalid(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parse_error() {
        assert_eq!(
            UrlError::from(url::ParseError::EmptyHost),
            UrlError::MissingHost
        );
        assert!(matches!(
            UrlError::from(url::ParseError::RelativeUrlWithoutBase),
            UrlError::Invalid { .. }
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            UrlError::unsupported_scheme("ftp").to_string(),
            "unsupported url scheme: ftp"
        );
    }
}
