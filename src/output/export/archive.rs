//! ZIP bundling of export files
//!
//! [`ArchiveBuilder`] collects named text entries and encodes them into a
//! single ZIP blob on a worker thread. Encoding is the one potentially
//! long-running step of a bundle export, so it runs off the caller's
//! thread; [`PendingArchive::wait`] joins it before the blob is saved,
//! keeping the generate-then-save ordering explicit.
//!
//! # Example
//!
//! ```rust
//! use simout_rs::output::export::ArchiveBuilder;
//!
//! let mut archive = ArchiveBuilder::new();
//! archive.add_text("params.json", "{}");
//! archive.add_text("results.csv", "time,c\n0,1\n");
//!
//! let blob = archive.generate().wait()?;
//! assert_eq!(&blob[..2], b"PK");
//! # Ok::<(), simout_rs::output::export::ExportError>(())
//! ```

use std::io::{self, Cursor, Write};
use std::thread::{self, JoinHandle};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::ExportError;

/// One named text entry of a pending archive.
#[derive(Debug, Clone)]
struct ArchiveEntry {
    name: String,
    contents: String,
}

/// Collects named text entries for a ZIP bundle.
///
/// Entries appear in the archive in insertion order. Entry names are used
/// verbatim; no uniqueness or extension validation is performed.
#[derive(Debug, Default)]
pub struct ArchiveBuilder {
    entries: Vec<ArchiveEntry>,
}

impl ArchiveBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named text entry.
    pub fn add_text(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.entries.push(ArchiveEntry {
            name: name.into(),
            contents: contents.into(),
        });
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start encoding the archive on a worker thread.
    ///
    /// Consumes the builder. The returned handle must be waited on before
    /// the blob exists; dropping it abandons the archive with no file
    /// produced.
    pub fn generate(self) -> PendingArchive {
        let handle = thread::spawn(move || encode_entries(self.entries));
        PendingArchive { handle }
    }
}

/// Handle on an archive being encoded in the background.
#[derive(Debug)]
pub struct PendingArchive {
    handle: JoinHandle<Result<Vec<u8>, ExportError>>,
}

impl PendingArchive {
    /// Wait for encoding to finish and return the ZIP blob.
    ///
    /// # Errors
    ///
    /// Propagates the encoding error; a panicked worker surfaces as an
    /// I/O error.
    pub fn wait(self) -> Result<Vec<u8>, ExportError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(ExportError::Io(io::Error::new(
                io::ErrorKind::Other,
                "archive worker thread panicked",
            ))),
        }
    }
}

/// Encode entries into an in-memory ZIP blob (DEFLATE).
fn encode_entries(entries: Vec<ArchiveEntry>) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        writer.start_file(entry.name, options)?;
        writer.write_all(entry.contents.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

// =================================================================================================
// Tests
// =================================================================================================
