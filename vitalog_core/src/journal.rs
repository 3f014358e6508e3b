//! Append-only JSONL journals for log-style entries.
//!
//! Weight, food, fasting, exercise, meditation, and medication records are
//! all append-only; each tracker writes one JSON object per line to its own
//! journal file, with file locking for safe concurrent access.

use crate::Result;
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Sink for appending entries of one record type
pub trait EntrySink<T: Serialize> {
    fn append(&mut self, entry: &T) -> Result<()>;
}

/// JSONL-backed journal with file locking
pub struct JsonlJournal<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> JsonlJournal<T> {
    /// Create a journal handle for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl<T: Serialize> EntrySink<T> for JsonlJournal<T> {
    fn append(&mut self, entry: &T) -> Result<()> {
        self.ensure_parent_dir()?;

        // Open file for appending
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Acquire exclusive lock
        file.lock_exclusive()?;

        // Write entry as JSON line
        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(entry)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended entry to {:?}", self.path);
        Ok(())
    }
}

impl<T: DeserializeOwned> JsonlJournal<T> {
    /// Read all entries, skipping corrupt lines with a warning
    pub fn read_entries(&self) -> Result<Vec<T>> {
        read_entries(&self.path)
    }
}

/// Read all entries from a JSONL file
pub fn read_entries<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    // Acquire shared lock for reading
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut entries = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Failed to parse entry at line {}: {}", line_num + 1, e);
                // Continue reading, don't fail completely
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} entries from {:?}", entries.len(), path);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::WeightUnit;
    use crate::weight::WeightEntry;

    #[test]
    fn test_append_and_read_single_entry() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weight.jsonl");

        let entry = WeightEntry::new(80.0, WeightUnit::Kg);
        let entry_id = entry.id;

        let mut journal = JsonlJournal::new(&path);
        journal.append(&entry).unwrap();

        let entries: Vec<WeightEntry> = journal.read_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, entry_id);
    }

    #[test]
    fn test_append_multiple_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weight.jsonl");

        let mut journal = JsonlJournal::new(&path);
        for i in 0..5 {
            journal
                .append(&WeightEntry::new(80.0 + i as f64, WeightUnit::Kg))
                .unwrap();
        }

        let entries: Vec<WeightEntry> = journal.read_entries().unwrap();
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal: JsonlJournal<WeightEntry> =
            JsonlJournal::new(temp_dir.path().join("nonexistent.jsonl"));
        assert!(journal.read_entries().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_lines_skipped() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weight.jsonl");

        let mut journal = JsonlJournal::new(&path);
        journal.append(&WeightEntry::new(80.0, WeightUnit::Kg)).unwrap();

        // Inject a corrupt line between valid ones
        {
            use std::io::Write as _;
            let mut file = OpenOptions::new().append(true).open(&path).unwrap();
            writeln!(file, "{{ not valid json").unwrap();
        }
        journal.append(&WeightEntry::new(79.5, WeightUnit::Kg)).unwrap();

        let entries: Vec<WeightEntry> = journal.read_entries().unwrap();
        assert_eq!(entries.len(), 2);
    }
}
