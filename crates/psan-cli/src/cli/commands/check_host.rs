//! `psan check-host` – show how the link policy treats one target.

use anyhow::Result;
use psan_core::config::PsanConfig;
use psan_core::host_policy::resolve_anchor_host;
use psan_core::PasteSanitizer;

use super::Overrides;

pub fn run_check_host(cfg: &PsanConfig, overrides: Overrides, url: &str) -> Result<()> {
    let sanitizer = PasteSanitizer::from_config(&overrides.apply(cfg))?;
    let host = resolve_anchor_host(Some(url), sanitizer.base_url());

    match host.as_deref() {
        Some(h) => match sanitizer.allow_list().matching_pattern(h) {
            Some(pattern) => println!("trusted\t{h}\t(matches {pattern})"),
            None => println!("untrusted\t{h}"),
        },
        None => println!("untrusted\t(no host)"),
    }
    Ok(())
}
