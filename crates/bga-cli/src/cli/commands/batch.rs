//! `bga batch <records.json>` – resolve audio for many records.

use anyhow::{Context, Result};
use bga_core::batch::run_batch;
use bga_core::config::BgaConfig;
use bga_core::media::DirMediaStore;
use bga_core::{AudioResolver, FieldMap};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

const PROGRESS_INTERVAL_MS: u128 = 500;

/// Exit status used when a second Ctrl-C forces the process down (128 + SIGINT).
const FORCED_EXIT_CODE: i32 = 130;

/// What a Ctrl-C should do given how many came before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Interrupt {
    /// First signal: finish the current record, then stop.
    Cancel,
    /// Later signal: a fetch or delay is taking too long, exit now.
    Exit,
}

/// Records one interrupt on `cancel` and returns the action to take.
pub(crate) fn on_interrupt(cancel: &AtomicBool) -> Interrupt {
    if cancel.swap(true, Ordering::Relaxed) {
        Interrupt::Exit
    } else {
        Interrupt::Cancel
    }
}

/// Ctrl-C sets `cancel`; a second Ctrl-C exits the process.
fn spawn_interrupt_handler(cancel: Arc<AtomicBool>) {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            match on_interrupt(&cancel) {
                Interrupt::Cancel => {
                    eprintln!("\ncancelling after the current record (Ctrl-C again to quit now)...")
                }
                Interrupt::Exit => {
                    eprintln!("\ninterrupted");
                    std::process::exit(FORCED_EXIT_CODE);
                }
            }
        }
    });
}

pub async fn run_batch_file(
    cfg: &BgaConfig,
    path: &Path,
    output: Option<&Path>,
    media_dir: Option<PathBuf>,
) -> Result<()> {
    let options = cfg.batch_options()?;
    if cfg.sources.is_empty() {
        anyhow::bail!("no sources configured");
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read records: {}", path.display()))?;
    let mut records: Vec<FieldMap> = serde_json::from_str(&data)
        .with_context(|| format!("parse records JSON: {}", path.display()))?;

    let store = DirMediaStore::new(super::media_dir(cfg, media_dir)?);
    let resolver = AudioResolver::new(cfg.sources.clone(), cfg.fetcher());

    let cancel = Arc::new(AtomicBool::new(false));
    spawn_interrupt_handler(Arc::clone(&cancel));

    tracing::info!(
        records = records.len(),
        media_dir = %store.dir().display(),
        "batch starting"
    );
    let (records, summary) = tokio::task::spawn_blocking(move || {
        let mut last_print: Option<Instant> = None;
        let summary = run_batch(
            &resolver,
            &mut records,
            &options,
            &store,
            &cancel,
            |done, total| {
                let due = last_print
                    .map_or(true, |t| t.elapsed().as_millis() >= PROGRESS_INTERVAL_MS);
                if due || done == total {
                    eprint!("\r  {} / {} records", done, total);
                    last_print = Some(Instant::now());
                }
            },
        );
        eprintln!();
        (records, summary)
    })
    .await
    .context("batch task panicked")?;

    let json = serde_json::to_string_pretty(&records)?;
    match output {
        Some(out) => {
            std::fs::write(out, json).with_context(|| format!("write {}", out.display()))?
        }
        None => println!("{}", json),
    }

    eprintln!(
        "Updated {} of {} records ({} unresolved, {} without '{}').",
        summary.resolved,
        summary.processed,
        summary.unresolved,
        summary.skipped,
        cfg.audio_field.as_deref().unwrap_or_default()
    );
    if summary.cancelled {
        eprintln!("Batch was cancelled; remaining records were left unchanged.");
    }
    Ok(())
}
