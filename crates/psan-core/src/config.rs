use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Advanced content filter mode handed to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcfMode {
    Automatic,
    Custom,
    #[default]
    Disable,
}

/// Editor-side settings (optional `[editor]` section in config.toml).
///
/// These govern the host editor's own filtering; the paste sanitizer runs
/// independently of them. Defaults match the editor's built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Content filter mode: "automatic", "custom" or "disable".
    pub acf_mode: AcfMode,
    /// Allowed content rules used when `acf_mode` is not `disable`.
    pub acf_rules: String,
    /// Enable the "show blocks" command on load.
    pub startup_outline_blocks: bool,
    /// Output an empty value when content is only an empty paragraph.
    pub ignore_empty_paragraph: bool,
    /// Insert a filler into empty block elements on output.
    pub fill_empty_blocks: bool,
    /// Prompt before cleaning content pasted from a word processor.
    pub paste_word_prompt: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            acf_mode: AcfMode::Disable,
            acf_rules: String::new(),
            startup_outline_blocks: false,
            ignore_empty_paragraph: true,
            fill_empty_blocks: true,
            paste_word_prompt: true,
        }
    }
}

impl EditorSettings {
    /// Trim free-text settings in place.
    pub fn normalize(&mut self) {
        let trimmed = self.acf_rules.trim();
        if trimmed.len() != self.acf_rules.len() {
            self.acf_rules = trimmed.to_string();
        }
    }

    /// The settings object as the editor expects it (camelCase keys).
    pub fn to_editor_json(&self) -> serde_json::Value {
        serde_json::json!({
            "acfMode": self.acf_mode,
            "acfRules": self.acf_rules,
            "startupOutlineBlocks": self.startup_outline_blocks,
            "ignoreEmptyParagraph": self.ignore_empty_paragraph,
            "fillEmptyBlocks": self.fill_empty_blocks,
            "pasteWordPrompt": self.paste_word_prompt,
        })
    }
}

/// Global configuration loaded from `~/.config/psan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsanConfig {
    /// Trusted hostnames or hostname suffixes; links elsewhere open in a new context.
    #[serde(default)]
    pub site_hosts: Vec<String>,
    /// Base URL used to resolve relative link targets (None = relative links have no host).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Apply the paste filter (style stripping, code/span unwrapping, block attribute stripping).
    #[serde(default = "default_true")]
    pub paste_filter: bool,
    /// Add the "table" class to pasted tables.
    #[serde(default = "default_true")]
    pub tag_tables: bool,
    #[serde(default)]
    pub editor: EditorSettings,
}

fn default_true() -> bool {
    true
}

impl Default for PsanConfig {
    fn default() -> Self {
        Self {
            site_hosts: Vec::new(),
            base_url: None,
            paste_filter: true,
            tag_tables: true,
            editor: EditorSettings::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("psan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PsanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PsanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<PsanConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let mut cfg: PsanConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.editor.normalize();
    if let Some(base) = cfg.base_url.as_mut() {
        *base = base.trim().to_string();
    }
    Ok(cfg)
}
