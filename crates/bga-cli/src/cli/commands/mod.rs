//! CLI command handlers. Each command is in its own file.

mod batch;
mod check;
mod resolve;
mod sources;

pub use batch::run_batch_file;
#[cfg(test)]
pub(crate) use batch::{on_interrupt, Interrupt};
pub use check::run_check;
pub use resolve::{run_resolve, ResolveArgs};
pub use sources::run_sources;

use anyhow::Result;
use bga_core::config::BgaConfig;
use std::path::PathBuf;

/// Media directory: explicit argument, then config, then the current directory.
fn media_dir(cfg: &BgaConfig, arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg.or_else(|| cfg.media_dir.clone()) {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}
