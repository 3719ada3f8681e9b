//! CLI for ogharvest.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ogharvest_core::config::{self, HarvestConfig};
use std::path::PathBuf;

use commands::{run_extract, run_harvest};

/// Top-level CLI. With no subcommand, behaves like `ogharvest run`.
#[derive(Debug, Parser)]
#[command(name = "ogharvest")]
#[command(about = "Harvest Open Graph preview images, titles and descriptions for a list of URLs", long_about = None)]
pub struct Cli {
    /// Log to ~/.local/state/ogharvest/ogharvest.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Ignore ~/.config/ogharvest/config.toml and use built-in defaults.
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Process every URL in the input list.
    Run(RunArgs),

    /// Fetch one page and print its metadata without writing any files.
    Extract {
        /// Page URL.
        url: String,
    },
}

#[derive(Debug, Default, clap::Args)]
pub struct RunArgs {
    /// URL list, one per line (default: urls.txt).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Directory for images and metadata files (default: dist).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process up to N URLs concurrently (default 1 = one after another).
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,
}

impl RunArgs {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, cfg: &mut HarvestConfig) {
        if let Some(input) = &self.input {
            cfg.input_path = input.clone();
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if let Some(jobs) = self.jobs {
            cfg.jobs = jobs.max(1);
        }
    }
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let cfg = if self.no_config {
            HarvestConfig::default()
        } else {
            config::load_or_init()?
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match &self.command {
            None => run_harvest(cfg, &RunArgs::default())?,
            Some(CliCommand::Run(args)) => run_harvest(cfg, args)?,
            Some(CliCommand::Extract { url }) => run_extract(&cfg, url)?,
        }

        Ok(())
    }
}

/// 0 when the run completed (even if some URLs failed), 1 on a run-level error.
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests;
