//! Immutable in-memory launch dataset.
//!
//! [`LaunchDataset`] holds every [`LaunchRecord`] for the lifetime of the
//! process. It is built once (from a file through [`crate::io::DatasetLoader`],
//! or from records already in memory), validated, and then only read. Payload
//! bounds and the distinct site list are computed once at construction.

use chrono::{DateTime, Utc};
use qtty::Kilograms;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{DataLoadError, LaunchRecord, PayloadRange};
use crate::io::checksum::checksum_records;
use crate::io::loaders::{DatasetLoader, DatasetSourceType};
use crate::parsing::ColumnMapping;

/// Provenance of a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub source_path: Option<PathBuf>,
    pub source_type: DatasetSourceType,
    /// SHA-256 of the raw source, hex encoded
    pub checksum: String,
    pub record_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl DatasetMetadata {
    pub fn new(
        source_path: Option<PathBuf>,
        source_type: DatasetSourceType,
        checksum: String,
        record_count: usize,
    ) -> Self {
        Self {
            source_path,
            source_type,
            checksum,
            record_count,
            loaded_at: Utc::now(),
        }
    }

    /// Metadata for records assembled in memory.
    pub fn in_memory(records: &[LaunchRecord]) -> Self {
        Self::new(
            None,
            DatasetSourceType::Memory,
            checksum_records(records),
            records.len(),
        )
    }
}

/// The read-only launch table plus values derived from it at load time.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    min_payload: Kilograms,
    max_payload: Kilograms,
    metadata: DatasetMetadata,
}

impl LaunchDataset {
    /// Load a dataset from a CSV or JSON file.
    ///
    /// # Errors
    /// Returns [`DataLoadError`] when the file is missing or unreadable, has an
    /// unsupported extension, lacks a required column, contains an invalid
    /// value, or holds no records.
    pub fn load(path: &Path, columns: &ColumnMapping) -> Result<Self, DataLoadError> {
        DatasetLoader::load_from_file(path, columns)
    }

    /// Build a dataset from parsed records, validating every record.
    pub fn from_records(
        records: Vec<LaunchRecord>,
        metadata: DatasetMetadata,
    ) -> Result<Self, DataLoadError> {
        if records.is_empty() {
            return Err(DataLoadError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for (row, record) in records.iter().enumerate() {
            validate_record(row, record)?;

            if !sites.iter().any(|site| site == &record.site) {
                sites.push(record.site.clone());
            }
            min_payload = min_payload.min(record.payload_kg());
            max_payload = max_payload.max(record.payload_kg());
        }

        Ok(Self {
            records,
            sites,
            min_payload: Kilograms::new(min_payload),
            max_payload: Kilograms::new(max_payload),
            metadata,
        })
    }

    /// Build a dataset from records assembled in memory.
    pub fn in_memory(records: Vec<LaunchRecord>) -> Result<Self, DataLoadError> {
        let metadata = DatasetMetadata::in_memory(&records);
        Self::from_records(records, metadata)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> Kilograms {
        self.min_payload
    }

    pub fn max_payload(&self) -> Kilograms {
        self.max_payload
    }

    /// `[min_payload, max_payload]`, used to seed and bound the range selector.
    pub fn payload_bounds(&self) -> PayloadRange {
        PayloadRange {
            low: self.min_payload,
            high: self.max_payload,
        }
    }

    /// Distinct launch sites, in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }
}

fn validate_record(row: usize, record: &LaunchRecord) -> Result<(), DataLoadError> {
    if record.site.trim().is_empty() {
        return Err(DataLoadError::invalid(row, "site", "launch site is empty"));
    }

    let payload = record.payload_kg();
    if !payload.is_finite() {
        return Err(DataLoadError::invalid(
            row,
            "payload_mass",
            format!("payload mass must be finite, got {}", payload),
        ));
    }
    if payload < 0.0 {
        return Err(DataLoadError::invalid(
            row,
            "payload_mass",
            format!("payload mass must be non-negative, got {}", payload),
        ));
    }

    Ok(())
}
