//! CSV export for archiving the weight journal.
//!
//! Converts the append-only weight JSONL journal into a CSV archive suitable
//! for spreadsheets, then renames the journal aside so the next export only
//! sees new entries.

use crate::weight::WeightEntry;
use crate::Result;
use std::fs::OpenOptions;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    recorded_at: String,
    weight: f64,
    unit: String,
    weight_kg: f64,
    note: Option<String>,
}

impl From<&WeightEntry> for CsvRow {
    fn from(entry: &WeightEntry) -> Self {
        CsvRow {
            id: entry.id.to_string(),
            recorded_at: entry.recorded_at.to_rfc3339(),
            weight: entry.weight,
            unit: entry.unit.abbrev().to_string(),
            weight_kg: entry.in_kg(),
            note: entry.note.clone(),
        }
    }
}

/// Export journal entries into CSV and archive the journal atomically
///
/// This function:
/// 1. Reads all entries from the journal
/// 2. Appends them to the CSV file (creates with headers if needed)
/// 3. Syncs the CSV to disk
/// 4. Renames the journal to .processed
/// 5. Returns the number of entries processed
///
/// # Safety
/// - CSV is fsynced before the journal is renamed
/// - The journal is renamed (not deleted) to allow manual recovery if needed
/// - Processed journal files can be cleaned up with [`cleanup_processed`]
pub fn weight_journal_to_csv(journal_path: &Path, csv_path: &Path) -> Result<usize> {
    let entries: Vec<WeightEntry> = crate::journal::read_entries(journal_path)?;

    if entries.is_empty() {
        tracing::info!("No entries in journal to export");
        return Ok(0);
    }

    // Ensure parent directory exists
    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Open CSV file for appending
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    // Headers only when the file is empty
    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for entry in &entries {
        let row = CsvRow::from(entry);
        writer.serialize(row)?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} entries to CSV", entries.len());

    // Atomically archive the journal by renaming it
    let processed_path = journal_path.with_extension("jsonl.processed");
    std::fs::rename(journal_path, &processed_path)?;

    tracing::info!("Archived journal to {:?}", processed_path);

    Ok(entries.len())
}

/// Clean up old processed journal files
///
/// This removes all .processed files in the given directory.
pub fn cleanup_processed(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(extension) = path.extension() {
            if extension == "processed" {
                std::fs::remove_file(&path)?;
                tracing::debug!("Removed processed journal: {:?}", path);
                count += 1;
            }
        }
    }

    if count > 0 {
        tracing::info!("Cleaned up {} processed journal files", count);
    }
    Ok(count)
}
