use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::DataLoadError;
use crate::io::checksum::calculate_checksum;
use crate::parsing::csv_parser::{self, ColumnMapping};
use crate::parsing::json_parser;
use crate::store::{DatasetMetadata, LaunchDataset};

/// Represents the source type of launch data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSourceType {
    Csv,
    Json,
    /// Records built in memory, never read from a file
    Memory,
}

/// Unified interface for loading launch data from CSV or JSON
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load launch data from a file (auto-detects JSON or CSV by extension)
    pub fn load_from_file(
        path: &Path,
        columns: &ColumnMapping,
    ) -> Result<LaunchDataset, DataLoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .ok_or_else(|| {
                DataLoadError::UnsupportedFormat(format!(
                    "{} has no file extension",
                    path.display()
                ))
            })?;

        match extension.as_str() {
            "csv" => Self::load_from_csv(path, columns),
            "json" => Self::load_from_json(path),
            other => Err(DataLoadError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Load launch data from a CSV file
    pub fn load_from_csv(
        csv_path: &Path,
        columns: &ColumnMapping,
    ) -> Result<LaunchDataset, DataLoadError> {
        let bytes = read_source(csv_path)?;
        let records = csv_parser::parse_launch_csv_bytes(&bytes, columns)?;
        let metadata = DatasetMetadata::new(
            Some(csv_path.to_path_buf()),
            DatasetSourceType::Csv,
            calculate_checksum(&bytes),
            records.len(),
        );
        let dataset = LaunchDataset::from_records(records, metadata)?;
        info!(
            "Loaded {} launch records from {} ({} sites)",
            dataset.len(),
            csv_path.display(),
            dataset.sites().len()
        );
        Ok(dataset)
    }

    /// Load launch data from a JSON file
    pub fn load_from_json(json_path: &Path) -> Result<LaunchDataset, DataLoadError> {
        let bytes = read_source(json_path)?;
        let content = std::str::from_utf8(&bytes).map_err(|e| DataLoadError::Json {
            path: ".".to_string(),
            message: format!("file is not valid UTF-8: {}", e),
        })?;
        let records = json_parser::parse_launch_json_str(content)?;
        let metadata = DatasetMetadata::new(
            Some(json_path.to_path_buf()),
            DatasetSourceType::Json,
            calculate_checksum(&bytes),
            records.len(),
        );
        let dataset = LaunchDataset::from_records(records, metadata)?;
        info!(
            "Loaded {} launch records from {} ({} sites)",
            dataset.len(),
            json_path.display(),
            dataset.sites().len()
        );
        Ok(dataset)
    }

    /// Load launch data from CSV text
    pub fn load_from_csv_str(
        content: &str,
        columns: &ColumnMapping,
    ) -> Result<LaunchDataset, DataLoadError> {
        let records = csv_parser::parse_launch_csv_bytes(content.as_bytes(), columns)?;
        let metadata = DatasetMetadata::new(
            None,
            DatasetSourceType::Csv,
            calculate_checksum(content.as_bytes()),
            records.len(),
        );
        LaunchDataset::from_records(records, metadata)
    }

    /// Load launch data from JSON text
    pub fn load_from_json_str(content: &str) -> Result<LaunchDataset, DataLoadError> {
        let records = json_parser::parse_launch_json_str(content)?;
        let metadata = DatasetMetadata::new(
            None,
            DatasetSourceType::Json,
            calculate_checksum(content.as_bytes()),
            records.len(),
        );
        LaunchDataset::from_records(records, metadata)
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>, DataLoadError> {
    fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
