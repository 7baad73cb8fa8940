//! Atomic write primitives
//!
//! Uses temp→rename pattern so a crash never leaves a half-written chain

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Atomically write bytes to a file
///
/// Creates missing parent directories, writes a sibling `.tmp` file and
/// renames it over the target.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", parent, e))?;
    }

    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| io_error("write_store_temp", &temp_path, e))?;

    fs::rename(&temp_path, target_path)
        .map_err(|e| io_error("rename_store_temp", target_path, e))?;

    tracing::debug!(
        path = %target_path.display(),
        bytes = content.len(),
        "atomic write complete"
    );

    Ok(())
}
