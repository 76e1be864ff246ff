use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::batch::BatchOptions;
use crate::fetch::CurlFetcher;
use crate::source::Source;

/// Extra pause added per record unless `dangerously_fast` is set.
const SAFETY_DELAY_SECS: f64 = 0.1;

/// Upper bound for `delay_secs`; larger (or non-finite) values are clamped to it.
pub const MAX_DELAY_SECS: f64 = 999.0;

fn default_true() -> bool {
    true
}

/// Global configuration loaded from `~/.config/bga/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BgaConfig {
    /// Field that receives the `[sound:...]` tag in batch runs.
    #[serde(default)]
    pub audio_field: Option<String>,
    /// Field reduced to hiragana before templates are filled (e.g. a reading like `私[わたし]`).
    #[serde(default)]
    pub filter_kana_field: Option<String>,
    /// Substitute the previous value into empty fields.
    #[serde(default = "default_true")]
    pub duplicate_empty_fields: bool,
    /// Seconds to wait before each record.
    #[serde(default)]
    pub delay_secs: f64,
    /// Skip the built-in 0.1s safety pause between records.
    #[serde(default)]
    pub dangerously_fast: bool,
    /// Follow HTTP redirects when fetching.
    #[serde(default = "default_true")]
    pub allow_redirects: bool,
    /// Default directory for stored audio.
    #[serde(default)]
    pub media_dir: Option<PathBuf>,
    /// Audio sources, highest priority first.
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Default for BgaConfig {
    fn default() -> Self {
        Self {
            audio_field: None,
            filter_kana_field: None,
            duplicate_empty_fields: true,
            delay_secs: 0.0,
            dangerously_fast: false,
            allow_redirects: true,
            media_dir: None,
            sources: Vec::new(),
        }
    }
}

impl BgaConfig {
    /// Delay applied before each record: `delay_secs` plus the safety pause.
    ///
    /// `delay_secs` is clamped to `0..=MAX_DELAY_SECS`; NaN counts as zero.
    pub fn effective_delay(&self) -> Duration {
        let extra = if self.dangerously_fast {
            0.0
        } else {
            SAFETY_DELAY_SECS
        };
        let secs = self.delay_secs.max(0.0).min(MAX_DELAY_SECS) + extra;
        if secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            Duration::ZERO
        }
    }

    pub fn fetcher(&self) -> CurlFetcher {
        CurlFetcher::default().with_allow_redirects(self.allow_redirects)
    }

    /// Batch settings; requires `audio_field` to be set.
    pub fn batch_options(&self) -> Result<BatchOptions> {
        let audio_field = match self.audio_field.as_deref() {
            Some(f) if !f.is_empty() => f,
            _ => anyhow::bail!("no audio_field configured"),
        };
        Ok(BatchOptions {
            audio_field: audio_field.to_string(),
            filter_kana_field: self.filter_kana_field.clone().filter(|f| !f.is_empty()),
            duplicate_on_empty: self.duplicate_empty_fields,
            delay: self.effective_delay(),
        })
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bga")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BgaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BgaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BgaConfig = toml::from_str(&data)?;
    Ok(cfg)
}
