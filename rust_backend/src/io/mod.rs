//! High-level data loading utilities.
//!
//! Loaders combine format detection, parsing and checksumming, and hand the
//! parsed records to [`LaunchDataset`](crate::store::LaunchDataset) for
//! validation.
//!
//! # Example
//!
//! ```no_run
//! use launch_dash::io::DatasetLoader;
//! use launch_dash::parsing::ColumnMapping;
//! use std::path::Path;
//!
//! let dataset = DatasetLoader::load_from_file(Path::new("spacex_launch_dash.csv"), &ColumnMapping::default())
//!     .expect("Failed to load");
//! println!("Loaded {} launches", dataset.len());
//! ```

pub mod checksum;
pub mod loaders;


pub use checksum::{calculate_checksum, checksum_records};
pub use loaders::{DatasetLoader, DatasetSourceType};
