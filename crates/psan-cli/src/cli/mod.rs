//! CLI for the psan paste sanitizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use psan_core::config::{self, PsanConfig};
use std::path::PathBuf;

use commands::{run_check_host, run_sanitize, run_settings, Overrides, PipelineToggles};

/// Top-level CLI for the psan paste sanitizer.
#[derive(Debug, Parser)]
#[command(name = "psan")]
#[command(about = "psan: clean pasted HTML and apply the outbound link policy", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/psan/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Sanitize pasted HTML from a file (or stdin) and write it to stdout.
    Sanitize {
        /// HTML file to read; stdin when omitted.
        path: Option<PathBuf>,
        /// Additional trusted host (repeatable), added to the configured site hosts.
        #[arg(long = "host", value_name = "HOST")]
        hosts: Vec<String>,
        /// Base URL for resolving relative links (overrides config).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Skip the paste filter (styles, code/span, block attributes).
        #[arg(long)]
        no_filter: bool,
        /// Do not add the "table" class to tables.
        #[arg(long)]
        no_tables: bool,
        /// Only text cleanup and link policy.
        #[arg(long, conflicts_with_all = ["no_filter", "no_tables"])]
        links_only: bool,
    },

    /// Report whether a link target would be treated as trusted.
    CheckHost {
        /// Link target as it would appear in an href.
        url: String,
        /// Additional trusted host (repeatable), added to the configured site hosts.
        #[arg(long = "host", value_name = "HOST")]
        hosts: Vec<String>,
        /// Base URL for resolving relative links (overrides config).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Print the editor settings object as JSON.
    Settings,
}

fn load_config(path: Option<&PathBuf>) -> Result<PsanConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Sanitize {
                path,
                hosts,
                base_url,
                no_filter,
                no_tables,
                links_only,
            } => {
                let overrides = Overrides { hosts, base_url };
                let toggles = PipelineToggles {
                    paste_filter: !(no_filter || links_only),
                    tag_tables: !(no_tables || links_only),
                };
                run_sanitize(&cfg, overrides, toggles, path.as_deref())?;
            }
            CliCommand::CheckHost {
                url,
                hosts,
                base_url,
            } => run_check_host(&cfg, Overrides { hosts, base_url }, &url)?,
            CliCommand::Settings => run_settings(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
