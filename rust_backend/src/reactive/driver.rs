//! Async event loop around a [`DashboardController`].
//!
//! UI events arrive on an unbounded channel. Whatever has queued up by the time
//! a pass starts is folded into one snapshot, so a burst of slider moves costs
//! one recomputation and the rendered views always follow the latest input.

use log::{info, warn};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::controller::{ControllerPhase, DashboardController, DashboardViews};
use super::sink::RenderSink;
use crate::core::{DriverError, SelectionChange};

/// Handle to a running dashboard driver.
#[derive(Debug)]
pub struct DashboardHandle {
    events: mpsc::UnboundedSender<SelectionChange>,
    phase: watch::Receiver<ControllerPhase>,
    task: JoinHandle<()>,
}

impl DashboardHandle {
    /// Queue a selection change.
    pub fn send(&self, change: SelectionChange) -> Result<(), DriverError> {
        self.events.send(change).map_err(|_| DriverError::Stopped)
    }

    /// Extra sender for another UI control feeding the same driver.
    pub fn sender(&self) -> mpsc::UnboundedSender<SelectionChange> {
        self.events.clone()
    }

    pub fn phase(&self) -> ControllerPhase {
        *self.phase.borrow()
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<ControllerPhase> {
        self.phase.clone()
    }

    /// Close the event channel and wait for the driver to finish.
    ///
    /// Senders obtained through [`DashboardHandle::sender`] keep the driver
    /// alive until they are dropped as well.
    pub async fn shutdown(self) -> Result<(), DriverError> {
        drop(self.events);
        self.task.await?;
        Ok(())
    }
}

struct DashboardDriver {
    controller: DashboardController,
    sink: Arc<dyn RenderSink>,
    events: mpsc::UnboundedReceiver<SelectionChange>,
    phase: watch::Sender<ControllerPhase>,
}

/// Spawn a driver on the current tokio runtime.
///
/// The initial views (full dataset, all sites) are rendered before any event
/// is processed.
pub fn spawn_dashboard(
    controller: DashboardController,
    sink: Arc<dyn RenderSink>,
) -> DashboardHandle {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (phase_tx, phase_rx) = watch::channel(ControllerPhase::Idle);

    let driver = DashboardDriver {
        controller,
        sink,
        events: event_rx,
        phase: phase_tx,
    };
    let task = tokio::spawn(driver.run());

    DashboardHandle {
        events: event_tx,
        phase: phase_rx,
        task,
    }
}

impl DashboardDriver {
    async fn run(mut self) {
        self.phase.send_replace(ControllerPhase::Recomputing);
        let initial = self.controller.refresh();
        hand_off(&self.sink, initial).await;
        self.phase.send_replace(ControllerPhase::Idle);

        while let Some(first) = self.events.recv().await {
            let mut batch = vec![first];
            while let Ok(next) = self.events.try_recv() {
                batch.push(next);
            }

            self.phase.send_replace(ControllerPhase::Recomputing);
            match self.controller.apply(batch) {
                Ok(views) => hand_off(&self.sink, views).await,
                Err(e) => warn!("Selection batch rejected: {}", e),
            }
            self.phase.send_replace(ControllerPhase::Idle);
        }

        info!(
            "Selection channel closed after {} pass(es); dashboard driver stopping",
            self.controller.generation()
        );
    }
}

async fn hand_off(sink: &Arc<dyn RenderSink>, views: DashboardViews) {
    let generation = views.generation;
    if let Err(e) = sink.render(Arc::new(views)).await {
        warn!("Render sink failed for generation {}: {}", generation, e);
    }
}
