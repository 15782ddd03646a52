//! CLI for the cssurl url(...) escaper.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cssurl_core::config::{self, ProcessorConfig};
use std::path::PathBuf;

use commands::{run_escape, run_roundtrip, run_scan};

/// Top-level CLI for cssurl.
#[derive(Debug, Parser)]
#[command(name = "cssurl")]
#[command(about = "cssurl: shield url(...) references from stylesheet minification", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Flags shared by every subcommand; they override config file values.
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Read processor options from this file instead of the XDG config.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append (line,column) waypoints to placeholder tokens.
    #[arg(long, global = true)]
    pub waypoints: bool,

    /// Drop one whitespace character after each restored url.
    #[arg(long, global = true)]
    pub remove_trailing_space: bool,

    /// Placeholder namespace (ASCII letters, digits, `_`).
    #[arg(long, global = true, value_name = "NS")]
    pub namespace: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Replace url(...) occurrences with placeholder tokens and print the result.
    Escape {
        /// Stylesheet path, or `-` for stdin.
        input: String,
    },

    /// Escape then restore, printing the stylesheet with normalized urls.
    Roundtrip {
        /// Stylesheet path, or `-` for stdin.
        input: String,
    },

    /// List every url(...) occurrence with its restored form.
    Scan {
        /// Stylesheet path, or `-` for stdin.
        input: String,

        /// Print matches as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl GlobalOptions {
    /// Config file values with command-line flags applied on top.
    pub fn resolve(&self) -> Result<ProcessorConfig> {
        let base = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut cfg: ProcessorConfig) -> ProcessorConfig {
        cfg.save_waypoints |= self.waypoints;
        cfg.remove_trailing_space |= self.remove_trailing_space;
        if let Some(ns) = &self.namespace {
            cfg.namespace = Some(ns.clone());
        }
        cfg
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.options.resolve()?;
        tracing::debug!("resolved processor config: {:?}", cfg);

        match cli.command {
            CliCommand::Escape { input } => run_escape(&cfg, &input)?,
            CliCommand::Roundtrip { input } => run_roundtrip(&cfg, &input)?,
            CliCommand::Scan { input, json } => run_scan(&cfg, &input, json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
