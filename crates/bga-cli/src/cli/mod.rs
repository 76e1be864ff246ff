//! CLI for BGA bulk audio resolution.

mod commands;

use anyhow::Result;
use bga_core::config::{self, BgaConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_batch_file, run_check, run_resolve, run_sources, ResolveArgs};

/// Top-level CLI for BGA.
#[derive(Debug, Parser)]
#[command(name = "bga")]
#[command(about = "BGA: fetch audio for records from prioritized URL-template sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve audio for one record given as KEY=VALUE fields (in order).
    Resolve {
        /// Field of the record, e.g. --field Expression=猫. Repeat for more fields.
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
        /// Write the audio into the media directory.
        #[arg(long)]
        save: bool,
        /// Media directory (default: config `media_dir`, else current directory).
        #[arg(long, value_name = "DIR")]
        media_dir: Option<PathBuf>,
        /// Do not copy the previous value into empty fields.
        #[arg(long)]
        no_duplicate: bool,
    },

    /// Resolve audio for every record in a JSON file (array of string maps).
    Batch {
        /// Path to the records file.
        path: PathBuf,
        /// Where to write the updated records (default: stdout).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Media directory (default: config `media_dir`, else current directory).
        #[arg(long, value_name = "DIR")]
        media_dir: Option<PathBuf>,
        /// Field to receive the sound tag (overrides config `audio_field`).
        #[arg(long, value_name = "FIELD")]
        audio_field: Option<String>,
    },

    /// List configured sources in priority order.
    Sources,

    /// Compute SHA-256 of a file and compare it with the no-audio placeholder.
    Check {
        /// Path to the file.
        path: PathBuf,
    },
}

/// Parses `KEY=VALUE`; the value may be empty or contain further `=`.
fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {:?}", raw)),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(cfg).await
    }

    /// Runs this command against an already loaded configuration.
    pub async fn run(self, cfg: BgaConfig) -> Result<()> {
        match self {
            CliCommand::Resolve {
                fields,
                save,
                media_dir,
                no_duplicate,
            } => {
                let args = ResolveArgs {
                    fields: fields.into_iter().collect(),
                    save,
                    media_dir,
                    duplicate_on_empty: cfg.duplicate_empty_fields && !no_duplicate,
                };
                run_resolve(&cfg, args).await?
            }
            CliCommand::Batch {
                path,
                output,
                media_dir,
                audio_field,
            } => {
                let mut cfg = cfg;
                if audio_field.is_some() {
                    cfg.audio_field = audio_field;
                }
                run_batch_file(&cfg, &path, output.as_deref(), media_dir).await?
            }
            CliCommand::Sources => run_sources(&cfg)?,
            CliCommand::Check { path } => run_check(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
