//! Parsers for launch dataset formats.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Parse the tabular CSV export (polars reader)
//! - [`json_parser`]: Parse JSON record arrays
//!
//! Both produce plain [`LaunchRecord`](crate::core::LaunchRecord) values; bound
//! checks that apply to every source live in [`crate::store`].
//!
//! # Example
//!
//! ```no_run
//! use launch_dash::parsing::csv_parser::{parse_launch_csv, ColumnMapping};
//! use std::path::Path;
//!
//! let records = parse_launch_csv(Path::new("spacex_launch_dash.csv"), &ColumnMapping::default())
//!     .expect("Failed to parse launch records");
//! ```

pub mod csv_parser;
pub mod json_parser;

#[cfg(test)]
mod json_parser_tests;

pub use csv_parser::ColumnMapping;
