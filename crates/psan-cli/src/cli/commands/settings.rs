//! `psan settings` – print the editor settings object.

use anyhow::Result;
use psan_core::config::PsanConfig;

pub fn run_settings(cfg: &PsanConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(&cfg.editor.to_editor_json())?;
    println!("{json}");
    Ok(())
}
