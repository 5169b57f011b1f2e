//! `psan sanitize` – run the paste pipeline over a file or stdin.

use anyhow::{Context, Result};
use psan_core::config::PsanConfig;
use psan_core::PasteSanitizer;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use super::{Overrides, PipelineToggles};

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("read {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

pub fn run_sanitize(
    cfg: &PsanConfig,
    overrides: Overrides,
    toggles: PipelineToggles,
    path: Option<&Path>,
) -> Result<()> {
    let effective = overrides.apply(cfg);
    let sanitizer = PasteSanitizer::from_config(&effective)?
        .with_paste_filter(toggles.paste_filter)
        .with_table_tagging(toggles.tag_tables);

    let input = read_input(path)?;
    let output = sanitizer.sanitize(&input);
    tracing::info!(
        input_bytes = input.len(),
        output_bytes = output.len(),
        "sanitized fragment"
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes()).context("write stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
