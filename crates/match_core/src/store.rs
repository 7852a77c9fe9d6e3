//! Append-only match history backed by a CSV file
//!
//! The file layout is fixed: a `Map,T Rounds,CT Rounds,Result` header
//! followed by one `\n`-terminated row per match. The header is only
//! written when the file is created, so existing history files can be
//! appended to and read back unchanged.

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::types::MatchRecord;

/// Match history persisted to a single CSV file
#[derive(Debug, Clone)]
pub struct MatchStore {
    path: PathBuf,
}

impl MatchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file with a header if needed.
    ///
    /// A zero-length file is treated like a missing one so that it gets
    /// a header; otherwise the row is appended after the last one.
    pub fn append(&self, record: &MatchRecord) -> Result<(), StoreError> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        // A hand-edited file may lack the final line break; the row must not join it.
        if !needs_header && !ends_with_line_break(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!(
            path = %self.path.display(),
            new_file = needs_header,
            "appended {} {}-{} {}",
            record.map,
            record.t_rounds,
            record.ct_rounds,
            record.result
        );
        Ok(())
    }

    /// Read every record in file order.
    ///
    /// A missing file is an empty history, not an error. Rows that do not
    /// fit the schema fail with the line they were found on.
    pub fn load_all(&self) -> Result<Vec<MatchRecord>, StoreError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<MatchRecord>().enumerate() {
            let record = row.map_err(|err| malformed(err, index))?;
            records.push(record);
        }

        debug!(path = %self.path.display(), count = records.len(), "loaded history");
        Ok(records)
    }
}

/// Whether the last byte of a non-empty file terminates a line
fn ends_with_line_break(file: &mut fs::File) -> io::Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(matches!(last[0], b'\n' | b'\r'))
}

/// Attach a line number to a row that failed to decode
fn malformed(err: csv::Error, index: usize) -> StoreError {
    if err.is_io_error() {
        return StoreError::Csv(err);
    }

    // Header is line 1, so the n-th row sits on line n + 2 without quoting.
    let line = err
        .position()
        .map(|pos| pos.line())
        .unwrap_or(index as u64 + 2);

    let reason = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields, found {}", expected_len, len),
        _ => err.to_string(),
    };

    warn!(line, %reason, "malformed match history row");
    StoreError::Malformed { line, reason }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
