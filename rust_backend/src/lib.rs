//! Launch records dashboard core.
//!
//! Loads a table of launch records once, filters it by launch site and payload
//! range, and derives the two chart views (outcome pie and payload scatter)
//! whenever the selection changes.
//!
//! - [`store`]: immutable, validated dataset
//! - [`transformations`]: site and payload filtering
//! - [`services`]: outcome summary and scatter projection
//! - [`reactive`]: selection controller, async driver and render sinks
//! - [`api`]: serializable chart frames for the render layer

pub mod api;
pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod reactive;
pub mod services;
pub mod store;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python extension module.
#[cfg(feature = "python")]
#[pymodule]
fn launch_dash(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}
