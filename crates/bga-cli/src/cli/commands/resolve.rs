//! `bga resolve` – resolve audio for a single record.

use anyhow::{Context, Result};
use bga_core::config::BgaConfig;
use bga_core::media::{DirMediaStore, MediaStore};
use bga_core::{AudioResolver, FieldMap, Resolution};
use std::path::PathBuf;

#[derive(Debug)]
pub struct ResolveArgs {
    pub fields: FieldMap,
    pub save: bool,
    pub media_dir: Option<PathBuf>,
    pub duplicate_on_empty: bool,
}

pub async fn run_resolve(cfg: &BgaConfig, args: ResolveArgs) -> Result<()> {
    if cfg.sources.is_empty() {
        anyhow::bail!("no sources configured");
    }
    let store_dir = if args.save {
        Some(super::media_dir(cfg, args.media_dir)?)
    } else {
        None
    };

    let resolver = AudioResolver::new(cfg.sources.clone(), cfg.fetcher());
    let fields = args.fields;
    let duplicate = args.duplicate_on_empty;
    let resolution =
        tokio::task::spawn_blocking(move || resolver.resolve_audio(&fields, duplicate))
            .await
            .context("resolve task panicked")?;

    match resolution {
        Resolution::Found {
            source_index,
            artifact,
        } => {
            tracing::info!(source_index, file = %artifact.file_name, "resolved");
            println!("{}", artifact.file_name);
            if let Some(dir) = store_dir {
                let path = DirMediaStore::new(dir).store(&artifact.file_name, &artifact.bytes)?;
                println!("  saved to {}", path.display());
            }
            Ok(())
        }
        Resolution::Exhausted { failures } => {
            for failure in &failures {
                eprintln!("  {}: {}", failure.source_name, failure.error);
            }
            anyhow::bail!("no source produced audio ({} tried)", failures.len())
        }
    }
}
