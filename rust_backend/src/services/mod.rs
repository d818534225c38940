//! Aggregation of filtered launches into chart-ready datasets.
//!
//! Both reductions are total functions: any input, including an empty one,
//! produces a valid (possibly empty) result.
//!
//! - [`outcomes`]: outcome summary for the pie view
//! - [`scatter`]: payload/outcome projection for the correlation view

pub mod outcomes;
pub mod scatter;

pub use outcomes::{summarize_outcomes, OutcomeCounts, OutcomeSummary, SiteSuccessSlice};
pub use scatter::{project_scatter, ScatterDataset, ScatterPoint};
