// Read-only after load:
// no mutation
// no reload
// shared by reference across submissions

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use thiserror::Error;

use crate::record::{AdmissionRecord, RecordError};
use crate::store::columns::ColumnMap;
use crate::types::identifiers::DatasetVersion;

/// Every way the reference dataset can be unavailable.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("Invalid row at line {line}: {source}")]
    InvalidRow { line: u64, source: RecordError },
    #[error("Dataset contains no rows")]
    Empty,
}

/// Provenance of the loaded dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub source: String,
    pub version: DatasetVersion,
    pub record_count: usize,
    pub loaded_at: DateTime<Utc>, // informational only
}

#[derive(Debug)]
pub struct RecordStore {
    records: Vec<AdmissionRecord>,
    info: DatasetInfo,
}

impl RecordStore {
    /// Load the reference dataset from a delimited text file.
    ///
    /// No retries. Any failure leaves the caller without a store, which is
    /// the signal to show the unavailability message instead of results.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
            _ => StoreError::Io(e),
        })?;

        let store = Self::from_bytes(&bytes, path.display().to_string())?;

        tracing::info!(
            source = %store.info.source,
            records = store.info.record_count,
            version = %store.info.version.short(),
            "reference dataset loaded"
        );
        Ok(store)
    }

    /// Parse an in-memory copy of the dataset. `source` is informational.
    pub fn from_bytes(bytes: &[u8], source: impl Into<String>) -> Result<Self, StoreError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(bytes);

        let columns = ColumnMap::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        let mut row = StringRecord::new();
        while reader.read_record(&mut row)? {
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let record = AdmissionRecord::parse(columns.project(&row))
                .map_err(|source| StoreError::InvalidRow { line, source })?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(StoreError::Empty);
        }

        let info = DatasetInfo {
            source: source.into(),
            version: DatasetVersion::from_content(bytes),
            record_count: records.len(),
            loaded_at: Utc::now(),
        };

        Ok(Self { records, info })
    }

    /// Wrap already-validated records. Unlike [`RecordStore::load`] an empty
    /// set is accepted; the version is computed over the records' JSON form.
    pub fn from_records(records: Vec<AdmissionRecord>) -> Self {
        let canonical = serde_json::to_vec(&records).unwrap_or_default();

        let info = DatasetInfo {
            source: "memory".to_string(),
            version: DatasetVersion::from_content(&canonical),
            record_count: records.len(),
            loaded_at: Utc::now(),
        };

        Self { records, info }
    }

    pub fn records(&self) -> &[AdmissionRecord] {
        &self.records
    }

    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
