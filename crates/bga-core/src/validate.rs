//! Content validation against the provider "no audio" placeholder.
//!
//! Some providers answer a miss with a canned audio clip instead of an error.
//! Such a clip is recognised by its SHA-256 digest, regardless of source or name.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// SHA-256 (lowercase hex) of the JapanesePod101 "audio not available" clip.
pub const PLACEHOLDER_SHA256: &str =
    "ae6398b5a27bc8c0a771df6c907ade794be15518174773c58c7c7ddd17098906";

const BUF_SIZE: usize = 64 * 1024;

/// SHA-256 of `bytes` as lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// True unless `bytes` is byte-identical to the known placeholder clip.
pub fn is_audio_valid(bytes: &[u8]) -> bool {
    sha256_hex(bytes) != PLACEHOLDER_SHA256
}

/// Set of rejected content digests. The default holds only [`PLACEHOLDER_SHA256`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    rejected: Vec<String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            rejected: vec![PLACEHOLDER_SHA256.to_string()],
        }
    }
}

impl Validator {
    /// Adds another digest (hex, any case) to reject.
    pub fn reject_digest(mut self, digest: &str) -> Self {
        self.rejected.push(digest.to_ascii_lowercase());
        self
    }

    pub fn is_valid(&self, bytes: &[u8]) -> bool {
        let digest = sha256_hex(bytes);
        !self.rejected.iter().any(|d| *d == digest)
    }
}

/// SHA-256 of a file on disk, read in chunks.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
