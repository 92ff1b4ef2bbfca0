//! Minimal URL view used for classification and seed rewriting.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::domain::errors::UrlError;

/// An `http(s)` URL parsed for classification, keeping the raw input so
/// rewrites can leave every other byte untouched.
#[derive(Debug, Clone)]
pub struct ParsedUrl<'a> {
    raw: &'a str,
    url: Url,
}

impl<'a> ParsedUrl<'a> {
    /// Parses an absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the input is not a valid absolute URL, uses
    /// another scheme, or has no host.
    pub fn parse(raw: &'a str) -> Result<Self, UrlError> {
        let url = Url::parse(raw)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(UrlError::unsupported_scheme(url.scheme()));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(UrlError::MissingHost);
        }

        Ok(Self { raw, url })
    }

    /// Returns the lowercased host as written, without userinfo or port.
    /// Internationalized hosts stay in Unicode form.
    #[must_use]
    pub fn host(&self) -> String {
        let raw_host = self.raw_authority().map(|authority| {
            let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
            match host_port.find(']') {
                Some(end) if host_port.starts_with('[') => &host_port[..=end],
                _ => host_port.split_once(':').map_or(host_port, |(host, _)| host),
            }
        });

        match raw_host {
            Some(host) if !host.is_empty() => host.to_lowercase(),
            _ => self.url.host_str().unwrap_or_default().to_lowercase(),
        }
    }

    /// Returns the lowercased, percent-decoded path as written. Dot segments
    /// are not resolved.
    #[must_use]
    pub fn path(&self) -> String {
        let raw_path = self
            .raw_authority_and_path()
            .map_or_else(|| self.url.path(), |(_, path)| path);

        percent_decode_str(raw_path)
            .decode_utf8_lossy()
            .to_lowercase()
    }

    /// Returns the raw query string (without `?`) as it appears in the input.
    #[must_use]
    pub fn raw_query(&self) -> Option<&'a str> {
        let (head, _) = self.split_fragment();
        head.split_once('?').map(|(_, query)| query)
    }

    /// Returns the input with its query replaced by `query`, leaving scheme,
    /// host, path, and fragment byte-identical.
    #[must_use]
    pub fn with_raw_query(&self, query: &str) -> String {
        let (head, fragment) = self.split_fragment();
        let base = head.split_once('?').map_or(head, |(base, _)| base);

        let mut out = String::with_capacity(self.raw.len() + query.len());
        out.push_str(base);
        if !query.is_empty() {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    fn raw_authority(&self) -> Option<&'a str> {
        self.raw_authority_and_path().map(|(authority, _)| authority)
    }

    fn raw_authority_and_path(&self) -> Option<(&'a str, &'a str)> {
        let (_, rest) = self.raw.split_once("://")?;
        let end = rest.find(['?', '#']).unwrap_or(rest.len());
        let rest = &rest[..end];
        Some(rest.find('/').map_or((rest, ""), |idx| rest.split_at(idx)))
    }

    fn split_fragment(&self) -> (&'a str, Option<&'a str>) {
        match self.raw.split_once('#') {
            Some((head, fragment)) => (head, Some(fragment)),
            None => (self.raw, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_parse_host_and_path() {
        let parsed = ParsedUrl::parse("https://IMG.Example.com:8080/Gen/Pic.PNG?seed=1").unwrap();
        assert_eq!(parsed.host(), "img.example.com");
        assert_eq!(parsed.path(), "/gen/pic.png");
        assert_eq!(parsed.raw_query(), Some("seed=1"));
    }

    #[test_case("not a url" ; "relative")]
    #[test_case("ftp://a.com/x.png" ; "other_scheme")]
    #[test_case("https://" ; "empty_host")]
    #[test_case("https://exa mple.com/x.png" ; "invalid_host")]
    fn test_parse_rejects(input: &str) {
        assert!(ParsedUrl::parse(input).is_err());
    }

    #[test_case("https://img.example.com/表情/abc", "/表情/abc" ; "non_ascii_raw")]
    #[test_case("https://img.example.com/%E8%A1%A8%E6%83%85/abc", "/表情/abc" ; "non_ascii_encoded")]
    #[test_case("https://img.example.com/a%20b/c", "/a b/c" ; "encoded_space")]
    #[test_case("https://img.example.com/x/../gen/abc", "/x/../gen/abc" ; "dot_segments_kept")]
    #[test_case("https://img.example.com", "" ; "no_path")]
    fn test_path_is_decoded_raw_path(input: &str, expected: &str) {
        assert_eq!(ParsedUrl::parse(input).unwrap().path(), expected);
    }

    #[test_case("https://例え.JP/abc", "例え.jp" ; "idn_host")]
    #[test_case("https://user:pw@Img.Example.com:8443/x", "img.example.com" ; "userinfo_and_port")]
    #[test_case("http://[::1]:8080/x.png", "[::1]" ; "ipv6")]
    fn test_host_is_raw_host(input: &str, expected: &str) {
        assert_eq!(ParsedUrl::parse(input).unwrap().host(), expected);
    }

    #[test]
    fn test_query_ignores_fragment() {
        let parsed = ParsedUrl::parse("https://a.com/x#frag?seed=1").unwrap();
        assert_eq!(parsed.raw_query(), None);
    }

    #[test]
    fn test_with_raw_query_keeps_other_parts() {
        let parsed = ParsedUrl::parse("https://A.com/Pic.png?seed=random&w=2#top").unwrap();
        assert_eq!(
            parsed.with_raw_query("seed=7&w=2"),
            "https://A.com/Pic.png?seed=7&w=2#top"
        );
    }
}
