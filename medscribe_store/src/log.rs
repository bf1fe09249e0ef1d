//! Append-only record log.

use crate::error::StoreError;
use medscribe_core::{PatientFields, PatientRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The patient record store: an in-memory arena rebuilt from a JSONL log
/// file on open. Insertion order is chronological order.
///
/// Appends write exactly one line; the file is never rewritten, so a
/// concurrent append from another process can cost at most one interleaved
/// line rather than a whole-store overwrite. In-process appends are
/// serialized by `&mut` ownership.
#[derive(Debug)]
pub struct RecordLog {
    path: PathBuf,
    records: Vec<PatientRecord>,
}

impl RecordLog {
    /// Open the log at `path`, replaying any existing records into memory.
    ///
    /// On first use the parent directory and an empty log file are created
    /// before any write. An unreadable or corrupt line is a hard error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            File::create(&path)?;
            info!("initialized empty record log (path={})", path.display());
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let file = OpenOptions::new().read(true).open(&path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: PatientRecord = serde_json::from_str(&line)?;
            records.push(record);
        }

        info!(
            "opened record log (path={}, records={})",
            path.display(),
            records.len()
        );
        Ok(Self { path, records })
    }

    /// Append one encounter: generates the id and timestamps, persists a
    /// single JSON line, and returns the stored record.
    pub fn append(
        &mut self,
        fields: PatientFields,
        raw_input: String,
        summary: String,
    ) -> Result<PatientRecord, StoreError> {
        let record = PatientRecord::new(fields, raw_input, summary);
        let line = serde_json::to_string(&record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        debug!(
            "appended record (id={}, patient={})",
            record.id, record.fields.patient_name
        );
        self.records.push(record.clone());
        Ok(record)
    }

    /// All records in creation order. Idempotent between writes.
    #[must_use]
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
