//! Bulk resolution over many records.
//!
//! Each record that carries the audio field is resolved after the configured
//! delay, its accepted audio handed to the media store, and the audio field
//! set to a `[sound:<file>]` tag. A failed record never stops the batch.

mod kana;

pub use kana::filter_kana;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::fetch::Fetch;
use crate::media::MediaStore;
use crate::resolver::AudioResolver;
use crate::source::FieldMap;

/// Per-batch settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Field replaced with the sound tag; records without it are skipped.
    pub audio_field: String,
    /// Field reduced to hiragana before resolution (the record keeps its value).
    pub filter_kana_field: Option<String>,
    pub duplicate_on_empty: bool,
    /// Sleep before each record's resolution.
    pub delay: Duration,
}

impl BatchOptions {
    pub fn new(audio_field: impl Into<String>) -> Self {
        Self {
            audio_field: audio_field.into(),
            filter_kana_field: None,
            duplicate_on_empty: true,
            delay: Duration::ZERO,
        }
    }
}

/// Aggregate counts for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records that had the audio field and were attempted.
    pub processed: usize,
    pub resolved: usize,
    pub unresolved: usize,
    /// Records without the audio field.
    pub skipped: usize,
    /// True if the cancellation flag stopped the run early.
    pub cancelled: bool,
}

/// Tag written into the audio field for a stored file.
pub fn sound_tag(file_name: &str) -> String {
    format!("[sound:{}]", file_name)
}

/// Runs the batch over `records`, updating their audio field in place.
///
/// `cancel` is checked after every record. `progress` receives
/// `(records_done, records_total)` before each record and once at the end.
pub fn run_batch<F, S, P>(
    resolver: &AudioResolver<F>,
    records: &mut [FieldMap],
    options: &BatchOptions,
    store: &S,
    cancel: &AtomicBool,
    mut progress: P,
) -> BatchSummary
where
    F: Fetch,
    S: MediaStore + ?Sized,
    P: FnMut(usize, usize),
{
    let total = records.len();
    let mut summary = BatchSummary::default();

    for (done, record) in records.iter_mut().enumerate() {
        progress(done, total);

        if record.contains_key(&options.audio_field) {
            if !options.delay.is_zero() {
                std::thread::sleep(options.delay);
            }
            summary.processed += 1;
            match resolve_record(resolver, record, options, store) {
                Some(file_name) => {
                    record.insert(options.audio_field.clone(), sound_tag(&file_name));
                    summary.resolved += 1;
                }
                None => summary.unresolved += 1,
            }
        } else {
            summary.skipped += 1;
        }

        if cancel.load(Ordering::Relaxed) {
            summary.cancelled = true;
            tracing::info!(done = done + 1, total, "batch cancelled");
            break;
        }
    }

    progress(summary.processed + summary.skipped, total);
    tracing::info!(
        processed = summary.processed,
        resolved = summary.resolved,
        unresolved = summary.unresolved,
        skipped = summary.skipped,
        "batch finished"
    );
    summary
}

/// Resolves and stores one record; returns the stored file name.
fn resolve_record<F, S>(
    resolver: &AudioResolver<F>,
    record: &FieldMap,
    options: &BatchOptions,
    store: &S,
) -> Option<String>
where
    F: Fetch,
    S: MediaStore + ?Sized,
{
    let mut lookup = record.clone();
    if let Some(kana_field) = &options.filter_kana_field {
        if let Some(value) = lookup.get_mut(kana_field) {
            *value = filter_kana(value);
        }
    }

    let artifact = resolver
        .resolve_audio(&lookup, options.duplicate_on_empty)
        .into_artifact()?;
    match store.store(&artifact.file_name, &artifact.bytes) {
        Ok(_) => Some(artifact.file_name),
        Err(err) => {
            tracing::warn!(file = %artifact.file_name, "could not store audio: {:#}", err);
            None
        }
    }
}
