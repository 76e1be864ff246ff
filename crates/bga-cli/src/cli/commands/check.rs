//! Check command: SHA-256 of a file against the no-audio placeholder.

use anyhow::Result;
use bga_core::validate::{self, PLACEHOLDER_SHA256};
use std::path::Path;

/// Print the digest and whether the file is the known placeholder clip.
pub fn run_check(path: &Path) -> Result<()> {
    let digest = validate::sha256_path(path)?;
    println!("{}  {}", digest, path.display());
    if digest == PLACEHOLDER_SHA256 {
        println!("  no-audio placeholder: would be rejected");
    } else {
        println!("  ok");
    }
    Ok(())
}
