//! Record filtering for the dashboard views.
//!
//! # Modules
//!
//! - [`filtering`]: Select launches by site and payload range
//!
//! # Example
//!
//! ```
//! use launch_dash::core::{LaunchRecord, OutcomeClass, PayloadRange, SelectionState, SiteSelector};
//! use launch_dash::store::LaunchDataset;
//! use launch_dash::transformations::filter_launches;
//!
//! let dataset = LaunchDataset::in_memory(vec![
//!     LaunchRecord::new("A", 500.0, OutcomeClass::Success, "B1"),
//!     LaunchRecord::new("B", 9000.0, OutcomeClass::Failure, "B2"),
//! ])
//! .unwrap();
//!
//! let selection = SelectionState::new(SiteSelector::All, PayloadRange::new(0.0, 1000.0).unwrap());
//! let filtered = filter_launches(&dataset, &selection);
//! assert_eq!(filtered.len(), 1);
//! ```

pub mod filtering;

pub use filtering::{filter_by_payload_range, filter_by_site, filter_launches, filter_records};
