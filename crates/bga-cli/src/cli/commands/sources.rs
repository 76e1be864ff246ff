//! `bga sources` – list configured sources.

use anyhow::Result;
use bga_core::config::{self, BgaConfig};

pub fn run_sources(cfg: &BgaConfig) -> Result<()> {
    if cfg.sources.is_empty() {
        println!(
            "No sources configured. Add [[sources]] entries to {}",
            config::config_path()?.display()
        );
        return Ok(());
    }
    for (i, source) in cfg.sources.iter().enumerate() {
        println!("{}: {}  {}", i + 1, source.name, source.url_template);
    }
    Ok(())
}
