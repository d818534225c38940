use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::api::{site_options, slider_spec, ChartFrame};
use crate::config::DashboardConfig;
use crate::core::{DataLoadError, SelectionChange};
use crate::reactive::DashboardController;
use crate::store::LaunchDataset;

fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value)
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to serialize: {}", e)))
}

fn load_error(err: DataLoadError) -> PyErr {
    match err {
        DataLoadError::Io { .. } => PyIOError::new_err(err.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Dashboard state held on the Rust side.
///
/// Args:
///     path: Dataset file (.csv or .json)
///     config_path: Optional TOML configuration file
///
/// Raises:
///     IOError: If the dataset cannot be read
///     ValueError: If the dataset or configuration is invalid
#[pyclass(name = "Dashboard", module = "launch_dash")]
pub struct PyDashboard {
    controller: Mutex<DashboardController>,
    config: DashboardConfig,
}

impl PyDashboard {
    fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut DashboardController) -> PyResult<R>,
    ) -> PyResult<R> {
        let mut controller = self
            .controller
            .lock()
            .map_err(|_| PyRuntimeError::new_err("dashboard state is poisoned"))?;
        f(&mut controller)
    }

    fn dataset(&self) -> PyResult<Arc<LaunchDataset>> {
        self.with_controller(|c| Ok(Arc::clone(c.dataset())))
    }
}

#[pymethods]
impl PyDashboard {
    #[new]
    #[pyo3(signature = (path, config_path=None))]
    fn new(path: PathBuf, config_path: Option<PathBuf>) -> PyResult<Self> {
        let config = DashboardConfig::load(config_path.as_deref())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let dataset = LaunchDataset::load(Path::new(&path), &config.dataset.columns)
            .map_err(load_error)?;
        Ok(Self {
            controller: Mutex::new(DashboardController::new(Arc::new(dataset))),
            config,
        })
    }

    /// Site dropdown options as a JSON list of `{label, value}`.
    fn site_options(&self) -> PyResult<String> {
        let dataset = self.dataset()?;
        to_json(&site_options(&dataset, &self.config.labels.all_sites))
    }

    /// `(min, max)` payload of the dataset in kg.
    fn payload_bounds(&self) -> PyResult<(f64, f64)> {
        let dataset = self.dataset()?;
        Ok((dataset.min_payload().value(), dataset.max_payload().value()))
    }

    /// Slider layout as JSON.
    fn slider(&self) -> PyResult<String> {
        self.with_controller(|c| {
            to_json(&slider_spec(c.dataset(), &self.config.slider, c.selection()))
        })
    }

    /// Current `(site, low, high)` selection.
    fn selection(&self) -> PyResult<(String, f64, f64)> {
        self.with_controller(|c| {
            let selection = c.selection();
            Ok((
                selection.site.as_str().to_string(),
                selection.payload_range.low_kg(),
                selection.payload_range.high_kg(),
            ))
        })
    }

    /// Current chart frame as JSON without changing the selection.
    fn frame(&self) -> PyResult<String> {
        self.with_controller(|c| {
            let views = c.refresh();
            to_json(&ChartFrame::from_views(&views, &self.config.labels))
        })
    }

    /// Apply a full selection snapshot and return the new chart frame as JSON.
    ///
    /// Raises:
    ///     ValueError: Unknown site or non-finite bound; the previous
    ///         selection is kept.
    fn on_selection_changed(
        &self,
        py: Python<'_>,
        site: String,
        low: f64,
        high: f64,
    ) -> PyResult<String> {
        let labels = self.config.labels.clone();
        py.detach(|| {
            self.with_controller(|c| {
                let change = SelectionChange::Snapshot {
                    site: site.into(),
                    low,
                    high,
                };
                let views = c
                    .apply(std::iter::once(change))
                    .map_err(|e| PyValueError::new_err(e.to_string()))?;
                to_json(&ChartFrame::from_views(&views, &labels))
            })
        })
    }

    fn __repr__(&self) -> PyResult<String> {
        self.with_controller(|c| {
            Ok(format!(
                "Dashboard(records={}, site={}, payload=[{}, {}])",
                c.dataset().len(),
                c.selection().site,
                c.selection().payload_range.low_kg(),
                c.selection().payload_range.high_kg()
            ))
        })
    }
}
