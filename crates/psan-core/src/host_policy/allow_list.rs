//! Ordered list of trusted host patterns.

use super::pattern::{HostPattern, HostPatternError};

/// Trusted first-party and partner hosts, checked in order.
///
/// Immutable once built; share it by reference across concurrent sanitize
/// calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAllowList {
    patterns: Vec<HostPattern>,
}

impl HostAllowList {
    pub fn new(patterns: Vec<HostPattern>) -> Self {
        Self { patterns }
    }

    /// Build from configured strings, failing on the first entry that cannot
    /// name a host. Blank entries are skipped.
    pub fn parse<I, S>(entries: I) -> Result<Self, HostPatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            if entry.trim().is_empty() {
                continue;
            }
            patterns.push(HostPattern::parse(entry)?);
        }
        Ok(Self { patterns })
    }

    /// Build from configured strings, dropping (and logging) invalid entries.
    pub fn parse_lenient<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            match HostPattern::parse(entry) {
                Ok(p) => patterns.push(p),
                Err(HostPatternError::Empty) => {}
                Err(err) => tracing::warn!("ignoring site host entry: {err}"),
            }
        }
        Self { patterns }
    }

    /// First pattern that trusts `host`, if any.
    pub fn matching_pattern(&self, host: &str) -> Option<&HostPattern> {
        if host.is_empty() {
            return None;
        }
        self.patterns.iter().find(|p| p.matches(host))
    }

    pub fn is_trusted(&self, host: &str) -> bool {
        self.matching_pattern(host).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
