//! Command-line overrides layered over the loaded config.

use psan_core::config::PsanConfig;

/// Host and base URL flags shared by `sanitize` and `check-host`.
#[derive(Debug, Default)]
pub struct Overrides {
    pub hosts: Vec<String>,
    pub base_url: Option<String>,
}

/// Optional pipeline stages, already resolved from the flags.
#[derive(Debug, Clone, Copy)]
pub struct PipelineToggles {
    pub paste_filter: bool,
    pub tag_tables: bool,
}

impl Overrides {
    /// Config with extra hosts appended and the base URL replaced if given.
    pub fn apply(self, cfg: &PsanConfig) -> PsanConfig {
        let mut effective = cfg.clone();
        effective.site_hosts.extend(self.hosts);
        if let Some(base) = self.base_url {
            effective.base_url = Some(base);
        }
        effective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_are_appended_and_base_replaced() {
        let cfg = PsanConfig {
            site_hosts: vec!["example.com".into()],
            base_url: Some("https://example.com/".into()),
            ..PsanConfig::default()
        };
        let effective = Overrides {
            hosts: vec!["partner.org".into()],
            base_url: Some("https://partner.org/".into()),
        }
        .apply(&cfg);
        assert_eq!(effective.site_hosts, vec!["example.com", "partner.org"]);
        assert_eq!(effective.base_url.as_deref(), Some("https://partner.org/"));
    }

    #[test]
    fn empty_overrides_keep_config() {
        let cfg = PsanConfig {
            base_url: Some("https://example.com/".into()),
            ..PsanConfig::default()
        };
        let effective = Overrides::default().apply(&cfg);
        assert_eq!(effective.base_url, cfg.base_url);
        assert!(effective.site_hosts.is_empty());
    }
}
