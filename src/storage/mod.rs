//! JSON persistence for the session books
//!
//! One file holds the whole session. Writes go to a temporary file in the
//! same directory and are renamed over the target, so the file is either the
//! old state or the new state, never half of each.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{TallyError, TallyResult};
use crate::services::Books;

/// Load the books from `path`, or start empty when the file does not exist.
///
/// Ledger ordering is re-normalized after loading so an edited file cannot
/// break the newest-first invariant.
pub fn load(path: &Path) -> TallyResult<Books> {
    if !path.exists() {
        return Ok(Books::new());
    }

    let file = File::open(path)
        .map_err(|e| TallyError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    let mut books: Books = serde_json::from_reader(reader)
        .map_err(|e| TallyError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;
    books.normalize();
    Ok(books)
}

/// Write the books to `path` atomically (write to temp, then rename).
pub fn save(path: &Path, books: &Books) -> TallyResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TallyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let file = File::create(&temp_path)
        .map_err(|e| TallyError::Storage(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, books)
        .map_err(|e| TallyError::Storage(format!("Failed to serialize books: {}", e)))?;
    writer
        .flush()
        .map_err(|e| TallyError::Storage(format!("Failed to flush books: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        TallyError::Storage(format!("Failed to move {} into place: {}", path.display(), e))
    })
}
