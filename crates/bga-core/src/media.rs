//! Placement of accepted audio into a media directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for accepted artifacts, called once per artifact.
pub trait MediaStore {
    /// Writes `bytes` under `file_name` and returns where they went.
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Flat directory store; existing files of the same name are overwritten.
#[derive(Debug, Clone)]
pub struct DirMediaStore {
    dir: PathBuf,
}

impl DirMediaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Rejects names that would escape the directory or are not plain file names.
fn check_file_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        anyhow::bail!("unusable media file name: {:?}", name);
    }
    if name.contains(['/', '\\', '\0']) {
        anyhow::bail!("media file name contains a path separator: {:?}", name);
    }
    Ok(())
}

impl MediaStore for DirMediaStore {
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        check_file_name(file_name)?;
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create media dir {}", self.dir.display()))?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "stored audio");
        Ok(path)
    }
}
