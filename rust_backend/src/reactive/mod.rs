//! Selection-driven recomputation of the dashboard views.
//!
//! [`DashboardController`] is the synchronous core: it owns the selection
//! snapshot and turns every accepted change into one filter + aggregate pass.
//! [`driver`] runs a controller on a tokio task behind an event channel, and
//! [`sink`] defines where finished views are handed off for rendering.

pub mod controller;
pub mod driver;
pub mod sink;

pub use controller::{compute_views, ControllerPhase, DashboardController, DashboardViews};
pub use driver::{spawn_dashboard, DashboardHandle};
pub use sink::{RenderSink, WatchSink};
