//! Paste sanitization pipeline.
//!
//! [`sanitize`] is the bare pipeline: text cleanup, then link policy.
//! [`PasteSanitizer`] wraps it with the configured extras (paste filter,
//! table tagging, base URL) and binds it to a paste event.

use anyhow::{Context, Result};
use url::Url;

use crate::cleanup::text_cleanup;
use crate::config::PsanConfig;
use crate::host_policy::HostAllowList;
use crate::link_policy::rewrite_anchor_targets;
use crate::paste_filter::apply_paste_filter;
use crate::table::tag_tables;

/// Clean pasted HTML and apply the link policy.
///
/// Pure: the result depends only on `raw_html` and `allow_list`. Never fails;
/// a step that cannot run leaves its input unchanged.
pub fn sanitize(raw_html: &str, allow_list: &HostAllowList) -> String {
    let cleaned = text_cleanup(raw_html);
    rewrite_anchor_targets(&cleaned, allow_list, None)
}

/// A paste as delivered by the host editor. `data_value` is replaced in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteEvent {
    pub data_value: String,
}

impl PasteEvent {
    pub fn new(data_value: impl Into<String>) -> Self {
        Self {
            data_value: data_value.into(),
        }
    }
}

/// Configured sanitizer shared by every paste of an editor instance.
#[derive(Debug, Clone, Default)]
pub struct PasteSanitizer {
    allow_list: HostAllowList,
    base_url: Option<Url>,
    paste_filter: bool,
    tag_tables: bool,
}

impl PasteSanitizer {
    /// Bare pipeline (cleanup + link policy) for the given hosts.
    pub fn new(allow_list: HostAllowList) -> Self {
        Self {
            allow_list,
            ..Self::default()
        }
    }

    /// Build from configuration. Invalid host entries are skipped with a
    /// warning; an invalid base URL is an error.
    pub fn from_config(cfg: &PsanConfig) -> Result<Self> {
        let base_url = match cfg.base_url.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => Some(Url::parse(raw).with_context(|| format!("invalid base_url: {raw}"))?),
            None => None,
        };
        let allow_list = HostAllowList::parse_lenient(&cfg.site_hosts);
        tracing::debug!(
            hosts = allow_list.len(),
            paste_filter = cfg.paste_filter,
            tag_tables = cfg.tag_tables,
            "paste sanitizer configured"
        );
        Ok(Self {
            allow_list,
            base_url,
            paste_filter: cfg.paste_filter,
            tag_tables: cfg.tag_tables,
        })
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_paste_filter(mut self, enabled: bool) -> Self {
        self.paste_filter = enabled;
        self
    }

    pub fn with_table_tagging(mut self, enabled: bool) -> Self {
        self.tag_tables = enabled;
        self
    }

    pub fn allow_list(&self) -> &HostAllowList {
        &self.allow_list
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Run the configured pipeline: paste filter, text cleanup, link policy,
    /// table tagging.
    pub fn sanitize(&self, raw_html: &str) -> String {
        let filtered;
        let input = if self.paste_filter {
            filtered = apply_paste_filter(raw_html);
            filtered.as_str()
        } else {
            raw_html
        };
        let cleaned = text_cleanup(input);
        let linked = rewrite_anchor_targets(&cleaned, &self.allow_list, self.base_url.as_ref());
        if self.tag_tables {
            tag_tables(&linked)
        } else {
            linked
        }
    }

    /// Replace the event's payload with its sanitized form.
    pub fn handle_paste(&self, event: &mut PasteEvent) {
        let before = event.data_value.len();
        event.data_value = self.sanitize(&event.data_value);
        tracing::debug!(before, after = event.data_value.len(), "sanitized paste");
    }
}
