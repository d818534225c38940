//! Render-facing Data Transfer Objects (DTOs).
//!
//! ## Design Guidelines
//!
//! 1. **Primitives Only**: kilograms are `f64`, sites and labels are `String`
//! 2. **Flat Structures**: one struct per chart, no internal types
//! 3. **Serializable**: every type serializes to the JSON the render layer reads

use serde::{Deserialize, Serialize};

// =========================================================
// Selection
// =========================================================

/// Current selector values as the controls should display them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionDto {
    /// Site dropdown value (`"ALL"` or a site name)
    pub site: String,
    /// Lower slider handle in kg
    pub low: f64,
    /// Upper slider handle in kg
    pub high: f64,
}

/// One option of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Labelled tick on the payload slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Payload range slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Current `[low, high]` handles
    pub value: [f64; 2],
}

// =========================================================
// Charts
// =========================================================

/// One slice of the outcome pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Fraction of the pie in `[0, 1]`; zero when the pie is empty
    pub share: f64,
    /// Fixed colour, `None` to let the renderer pick
    pub color: Option<String>,
}

/// Outcome pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    /// Annotation lines under the title (single-site view only)
    pub subtitle: Vec<String>,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One scatter marker. `y` is the outcome class (0 or 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterMarker {
    pub x: f64,
    pub y: u8,
    /// Marker size, proportional to payload
    pub size: f64,
    pub hover: String,
}

/// Markers sharing one booster version (one legend entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub markers: Vec<ScatterMarker>,
}

/// Payload vs. outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.markers.len()).sum()
    }
}

/// Everything the render layer needs for one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub generation: u64,
    pub selection: SelectionDto,
    pub pie: PieChart,
    pub scatter: ScatterChart,
}
