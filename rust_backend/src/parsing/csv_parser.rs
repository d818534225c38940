use polars::prelude::{CsvReadOptions, DataFrame, DataType, SerReader, Series};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

use crate::core::{DataLoadError, LaunchRecord, OutcomeClass};

/// Names of the four required columns in the launch table.
///
/// Defaults match the headers of the SpaceX launch export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub site: String,
    pub payload_mass: String,
    pub outcome_class: String,
    pub booster_version: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            site: "Launch Site".to_string(),
            payload_mass: "Payload Mass (kg)".to_string(),
            outcome_class: "class".to_string(),
            booster_version: "Booster Version".to_string(),
        }
    }
}

impl ColumnMapping {
    /// Required columns, in the order they are checked.
    pub fn required(&self) -> [&str; 4] {
        [
            self.site.as_str(),
            self.payload_mass.as_str(),
            self.outcome_class.as_str(),
            self.booster_version.as_str(),
        ]
    }
}

/// Read a CSV file into a Polars DataFrame
pub fn read_launch_frame(csv_path: &Path) -> Result<DataFrame, DataLoadError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()?;
    Ok(df)
}

/// Read CSV content already held in memory into a Polars DataFrame
pub fn read_launch_frame_from_bytes(bytes: &[u8]) -> Result<DataFrame, DataLoadError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()?;
    Ok(df)
}

/// Parse a CSV file into launch records
pub fn parse_launch_csv(
    csv_path: &Path,
    columns: &ColumnMapping,
) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let df = read_launch_frame(csv_path)?;
    dataframe_to_records(&df, columns)
}

/// Parse CSV bytes into launch records
pub fn parse_launch_csv_bytes(
    bytes: &[u8],
    columns: &ColumnMapping,
) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let df = read_launch_frame_from_bytes(bytes)?;
    dataframe_to_records(&df, columns)
}

/// Convert a Polars DataFrame to launch records.
///
/// Numeric columns are cast to `Float64` first since integer-looking payloads
/// and class flags are inferred as `i64`. Cells that fail the cast become null
/// and are reported as invalid values with their row index.
pub fn dataframe_to_records(
    df: &DataFrame,
    columns: &ColumnMapping,
) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for required in columns.required() {
        if !column_names.iter().any(|name| name == required) {
            return Err(DataLoadError::MissingColumn(required.to_string()));
        }
    }

    let site_series = cast_column(df, &columns.site, DataType::String)?;
    let payload_series = cast_column(df, &columns.payload_mass, DataType::Float64)?;
    let class_series = cast_column(df, &columns.outcome_class, DataType::Float64)?;
    let booster_series = cast_column(df, &columns.booster_version, DataType::String)?;

    let sites = site_series.str()?;
    let payloads = payload_series.f64()?;
    let classes = class_series.f64()?;
    let boosters = booster_series.str()?;

    let height = df.height();
    let mut records = Vec::with_capacity(height);

    for row in 0..height {
        let site = sites.get(row).map(str::trim).unwrap_or_default();
        if site.is_empty() {
            return Err(DataLoadError::invalid(
                row,
                &columns.site,
                "launch site is empty",
            ));
        }

        let payload = payloads.get(row).ok_or_else(|| {
            DataLoadError::invalid(row, &columns.payload_mass, "missing or non-numeric value")
        })?;

        let flag = classes.get(row).ok_or_else(|| {
            DataLoadError::invalid(row, &columns.outcome_class, "missing or non-numeric value")
        })?;
        let outcome = OutcomeClass::from_value(flag).ok_or_else(|| {
            DataLoadError::invalid(
                row,
                &columns.outcome_class,
                format!("expected 0 or 1, got {}", flag),
            )
        })?;

        let booster = boosters.get(row).map(str::trim).unwrap_or_default();

        records.push(LaunchRecord::new(site, payload, outcome, booster));
    }

    Ok(records)
}

fn cast_column(df: &DataFrame, name: &str, dtype: DataType) -> Result<Series, DataLoadError> {
    let column = df
        .column(name)
        .map_err(|_| DataLoadError::MissingColumn(name.to_string()))?;
    Ok(column.as_materialized_series().cast(&dtype)?)
}
