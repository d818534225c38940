//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use launch_dash::core::{LaunchRecord, OutcomeClass, RenderError};
use launch_dash::reactive::{DashboardViews, RenderSink};
use launch_dash::store::LaunchDataset;

/// The four-record dataset used by the acceptance scenarios.
pub fn scenario_dataset() -> Arc<LaunchDataset> {
    let dataset = LaunchDataset::in_memory(vec![
        LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.0"),
        LaunchRecord::new("A", 2000.0, OutcomeClass::Failure, "v1.1"),
        LaunchRecord::new("B", 3000.0, OutcomeClass::Success, "FT"),
        LaunchRecord::new("B", 9000.0, OutcomeClass::Failure, "B5"),
    ])
    .expect("scenario dataset is valid");
    Arc::new(dataset)
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Sink recording every rendered view in arrival order.
#[derive(Default)]
pub struct CollectingSink {
    rendered: Mutex<Vec<Arc<DashboardViews>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> Vec<Arc<DashboardViews>> {
        self.rendered.lock().unwrap().clone()
    }

    pub fn generations(&self) -> Vec<u64> {
        self.rendered().iter().map(|v| v.generation).collect()
    }
}

#[async_trait]
impl RenderSink for CollectingSink {
    async fn render(&self, views: Arc<DashboardViews>) -> Result<(), RenderError> {
        self.rendered.lock().unwrap().push(views);
        Ok(())
    }
}

/// Sink that always fails, to check the driver keeps running.
pub struct FailingSink;

#[async_trait]
impl RenderSink for FailingSink {
    async fn render(&self, _views: Arc<DashboardViews>) -> Result<(), RenderError> {
        Err(RenderError::Failed("renderer unavailable".to_string()))
    }
}
