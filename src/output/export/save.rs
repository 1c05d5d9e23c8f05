//! File-save helpers and the save-capability check
//!
//! The export operations never write bytes themselves; they go through
//! these helpers so the capability check, buffering and logging stay in
//! one place.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ExportError;

/// Resolve the directory a file will be created in.
///
/// A bare filename has an empty parent; files like that land in the
/// current working directory.
pub(crate) fn save_target(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Verify that files can be saved into `dir`.
///
/// Fails fast with [`ExportError::CapabilityUnsupported`] when the
/// directory is missing, is not a directory, or is read-only. Runs before
/// any serialization work so a failing environment costs nothing.
pub fn check_save_support(dir: &Path) -> Result<(), ExportError> {
    let metadata = fs::metadata(dir).map_err(|e| ExportError::CapabilityUnsupported {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !metadata.is_dir() {
        return Err(ExportError::CapabilityUnsupported {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    if metadata.permissions().readonly() {
        return Err(ExportError::CapabilityUnsupported {
            path: dir.to_path_buf(),
            reason: "directory is read-only".to_string(),
        });
    }

    Ok(())
}

/// Save text under `path`.
///
/// `mime` identifies the payload kind (`text/csv;charset=utf-8`,
/// `application/json;charset=utf-8`); the filesystem does not consume it,
/// but it is part of the helper contract and shows up in the debug log.
pub fn save_text_file(text: &str, path: &Path, mime: &str) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    log::debug!(
        "saved {} bytes ({}) to {}",
        text.len(),
        mime,
        path.display()
    );
    Ok(())
}

/// Save a binary blob under `path`.
pub fn save_binary_file(bytes: &[u8], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;

    log::debug!("saved {} bytes (binary) to {}", bytes.len(), path.display());
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
