//! A single trusted-host suffix pattern.

use std::fmt;

/// Error returned when an allow-list entry cannot name a host.
#[derive(Debug, thiserror::Error)]
pub enum HostPatternError {
    #[error("empty host pattern")]
    Empty,
    #[error("invalid host pattern {pattern:?}: {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: url::ParseError,
    },
}

/// Hostname suffix matched at a label boundary.
///
/// `example.com` matches `example.com` and `docs.example.com`, never
/// `notexample.com`. Stored in the same normalized (lowercase, punycode) form
/// that `url` produces for parsed hosts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPattern {
    suffix: String,
}

impl HostPattern {
    /// Parse a configured entry. Accepts `example.com`, `.example.com`,
    /// `*.example.com` and a trailing root dot, in any case.
    pub fn parse(raw: &str) -> Result<Self, HostPatternError> {
        let trimmed = raw.trim();
        let bare = trimmed
            .strip_prefix("*.")
            .unwrap_or(trimmed)
            .trim_start_matches('.')
            .trim_end_matches('.');
        if bare.is_empty() {
            return Err(HostPatternError::Empty);
        }
        let host = url::Host::parse(bare).map_err(|source| HostPatternError::Invalid {
            pattern: raw.to_string(),
            source,
        })?;
        Ok(Self {
            suffix: host.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.suffix
    }

    /// True if `host` is this pattern or a subdomain of it (ASCII case-insensitive).
    pub fn matches(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.');
        if host.len() < self.suffix.len() {
            return false;
        }
        let split = host.len() - self.suffix.len();
        if !host.is_char_boundary(split) {
            return false;
        }
        let (head, tail) = host.split_at(split);
        tail.eq_ignore_ascii_case(&self.suffix) && (head.is_empty() || head.ends_with('.'))
    }
}

impl fmt::Display for HostPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.suffix)
    }
}
