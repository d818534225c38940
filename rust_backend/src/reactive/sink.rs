//! Hand-off points between the controller and the render layer.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tokio::sync::watch;

use super::controller::DashboardViews;
use crate::core::RenderError;

/// Receives finished views for rendering.
///
/// Implementations must be cheap to call from the driver task; heavy work
/// belongs on the receiving side.
#[async_trait]
pub trait RenderSink: Send + Sync {
    async fn render(&self, views: Arc<DashboardViews>) -> Result<(), RenderError>;
}

/// Sink that publishes the latest views on a `watch` channel.
///
/// Views whose generation is not newer than the one already published are
/// discarded, so out-of-order completions never overwrite a newer selection.
#[derive(Debug)]
pub struct WatchSink {
    tx: watch::Sender<Option<Arc<DashboardViews>>>,
}

impl WatchSink {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<DashboardViews>>> {
        self.tx.subscribe()
    }

    /// The most recently published views, if any.
    pub fn latest(&self) -> Option<Arc<DashboardViews>> {
        self.tx.borrow().clone()
    }

    /// Publish `views` unless a newer generation is already visible.
    ///
    /// Returns whether the views were accepted.
    pub fn publish(&self, views: Arc<DashboardViews>) -> bool {
        let generation = views.generation;
        let accepted = self.tx.send_if_modified(|current| match current {
            Some(existing) if existing.generation >= generation => false,
            _ => {
                *current = Some(views);
                true
            }
        });
        if !accepted {
            debug!("Discarded stale views (generation {})", generation);
        }
        accepted
    }
}

impl Default for WatchSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RenderSink for WatchSink {
    async fn render(&self, views: Arc<DashboardViews>) -> Result<(), RenderError> {
        self.publish(views);
        Ok(())
    }
}
