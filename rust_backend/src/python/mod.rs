//! Python bindings for the launch dashboard.
//!
//! Exposes a `Dashboard` class so a Python UI (Dash, Streamlit) can keep the
//! dataset and selection state in Rust and receive chart frames as JSON.
//!
//! # Modules
//!
//! - [`dashboard`]: the `Dashboard` class
//!
//! # Python API
//!
//! ```python
//! import launch_dash
//! dash = launch_dash.Dashboard("spacex_launch_dash.csv")
//! frame = json.loads(dash.on_selection_changed("KSC LC-39A", 2000, 8000))
//! ```

pub mod dashboard;

pub use dashboard::PyDashboard;

use pyo3::prelude::*;

/// Register all Python classes with the extension module.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDashboard>()?;
    m.add("ALL_SITES", crate::core::ALL_SITES)?;
    Ok(())
}
