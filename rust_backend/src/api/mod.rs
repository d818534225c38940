//! # API Module
//!
//! Render-facing layer of the dashboard. It turns the controller's derived
//! views into flat, serializable chart frames so the render layer never sees
//! internal types.
//!
//! - [`types`]: chart DTOs (primitives only, `serde` serializable)
//! - [`conversions`]: builders from [`crate::reactive::DashboardViews`] and the
//!   dataset into those DTOs
//!
//! All `qtty` quantities are converted to plain `f64` kilograms at this boundary.

pub mod conversions;
pub mod types;

pub use conversions::{site_options, slider_spec};
pub use types::{
    ChartFrame, PieChart, PieSlice, RangeSliderSpec, ScatterChart, ScatterMarker, ScatterSeries,
    SelectionDto, SiteOption, SliderMark,
};
