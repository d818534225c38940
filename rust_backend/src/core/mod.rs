//! Core domain models for the launch records dashboard.
//!
//! This module defines the data structures shared by every layer: the immutable
//! launch records, the user's selection snapshot, and the error types returned
//! at the crate's boundaries.

pub mod domain;
pub mod error;

pub use domain::{
    LaunchRecord, OutcomeClass, PayloadRange, SelectionChange, SelectionState, SiteSelector,
    ALL_SITES,
};
pub use error::{ConfigError, DataLoadError, DriverError, RenderError, SelectionError};
