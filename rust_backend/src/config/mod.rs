//! Dashboard configuration file support.
//!
//! Configuration is read from a TOML file. Every field has a default, so an
//! empty file (or no file at all) yields a working configuration.
//!
//! ## Loading Order
//!
//! 1. Explicit path passed by the caller
//! 2. `LAUNCH_DASH_CONFIG` environment variable (path to TOML file)
//! 3. `launch_dash.toml` in the current working directory
//! 4. Built-in defaults
//!
//! ```toml
//! [dataset]
//! path = "spacex_launch_dash.csv"
//!
//! [dataset.columns]
//! site = "Launch Site"
//!
//! [slider]
//! step = 1000.0
//! mark_interval = 1000.0
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ConfigError;
use crate::parsing::ColumnMapping;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "LAUNCH_DASH_CONFIG";

/// File looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "launch_dash.toml";

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset: DatasetSettings,
    pub slider: SliderSettings,
    pub labels: LabelSettings,
    pub logging: LoggingSettings,
}

/// Dataset source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub path: PathBuf,
    pub columns: ColumnMapping,
}

/// Payload range slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    /// Slider step in kilograms
    pub step: f64,
    /// Distance between labelled marks in kilograms
    pub mark_interval: f64,
}

/// Chart labels and colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Dropdown label for the every-site option
    pub all_sites: String,
    pub failure_color: String,
    pub success_color: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set
    pub level: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("spacex_launch_dash.csv"),
            columns: ColumnMapping::default(),
        }
    }
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            step: 1000.0,
            mark_interval: 1000.0,
        }
    }
}

impl Default for LabelSettings {
    fn default() -> Self {
        // Plotly G10 palette entries 1 and 5
        Self {
            all_sites: "All Sites".to_string(),
            failure_color: "#DC3912".to_string(),
            success_color: "#0099C6".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::Read(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration using the documented lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Self::from_file(path.trim());
            }
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(&local);
        }

        log::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Reject settings the dashboard cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.slider.step.is_finite() && self.slider.step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "slider.step must be a positive number, got {}",
                self.slider.step
            )));
        }
        if !(self.slider.mark_interval.is_finite() && self.slider.mark_interval > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "slider.mark_interval must be a positive number, got {}",
                self.slider.mark_interval
            )));
        }
        for (key, name) in [
            ("dataset.columns.site", &self.dataset.columns.site),
            ("dataset.columns.payload_mass", &self.dataset.columns.payload_mass),
            ("dataset.columns.outcome_class", &self.dataset.columns.outcome_class),
            ("dataset.columns.booster_version", &self.dataset.columns.booster_version),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }

    /// Dataset path resolved against `base` when relative.
    pub fn dataset_path(&self, base: Option<&Path>) -> PathBuf {
        match base {
            Some(base) if self.dataset.path.is_relative() => base.join(&self.dataset.path),
            _ => self.dataset.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.dataset.columns.payload_mass, "Payload Mass (kg)");
        assert_eq!(config.slider.step, 1000.0);
        assert_eq!(config.labels.failure_color, "#DC3912");
    }

    #[test]
    fn test_partial_override() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [dataset]
            path = "data/launches.json"

            [dataset.columns]
            booster_version = "Booster Version Category"

            [slider]
            step = 500.0
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.path, PathBuf::from("data/launches.json"));
        assert_eq!(config.dataset.columns.booster_version, "Booster Version Category");
        assert_eq!(config.dataset.columns.site, "Launch Site");
        assert_eq!(config.slider.step, 500.0);
        assert_eq!(config.slider.mark_interval, 1000.0);
    }

    #[test]
    fn test_invalid_step_rejected() {
        let err = DashboardConfig::from_toml_str("[slider]\nstep = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_column_name_rejected() {
        let err =
            DashboardConfig::from_toml_str("[dataset.columns]\nsite = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = DashboardConfig::from_toml_str("[slider\nstep = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_and_explicit_load() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = DashboardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");

        let err = DashboardConfig::from_file("/nonexistent/launch_dash.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }

    #[test]
    fn test_dataset_path_resolution() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.dataset_path(Some(Path::new("/srv/dash"))),
            PathBuf::from("/srv/dash/spacex_launch_dash.csv")
        );
        assert_eq!(
            config.dataset_path(None),
            PathBuf::from("spacex_launch_dash.csv")
        );
    }
}
