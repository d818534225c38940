//! Launch dashboard host binary.
//!
//! Loads the configured dataset, prints the initial chart frame together with
//! the site options and slider layout, then reads one JSON selection change per
//! stdin line and prints every new frame as a JSON line. EOF shuts down.
//!
//! # Usage
//!
//! ```bash
//! launch-dash [CONFIG]
//! echo '{"kind":"site","site":"KSC LC-39A"}' | launch-dash launch_dash.toml
//! ```
//!
//! # Environment Variables
//!
//! - `LAUNCH_DASH_CONFIG`: Configuration file when no argument is given
//! - `RUST_LOG`: Log filter (default: `[logging] level` from the config)

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use launch_dash::api::{site_options, slider_spec, ChartFrame};
use launch_dash::config::DashboardConfig;
use launch_dash::core::SelectionChange;
use launch_dash::reactive::{spawn_dashboard, DashboardController, WatchSink};
use launch_dash::store::LaunchDataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = DashboardConfig::load(config_path.as_deref())?;

    // Initialize logging; library `log` records are bridged into tracing
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting launch dashboard");

    let base = config_path.as_deref().and_then(Path::parent);
    let dataset_path = config.dataset_path(base);
    let dataset = LaunchDataset::load(&dataset_path, &config.dataset.columns)
        .with_context(|| format!("loading {}", dataset_path.display()))?;
    let dataset = Arc::new(dataset);
    info!(
        "Dataset ready: {} records across {} sites",
        dataset.len(),
        dataset.sites().len()
    );

    let controller = DashboardController::new(Arc::clone(&dataset));
    let sink = Arc::new(WatchSink::new());
    let mut frames = sink.subscribe();
    let handle = spawn_dashboard(controller, sink.clone());

    let initial = frames
        .wait_for(|views| views.is_some())
        .await
        .context("dashboard stopped before the first render")?
        .clone();
    if let Some(views) = initial {
        let frame = ChartFrame::from_views(&views, &config.labels);
        let layout = json!({
            "frame": frame,
            "site_options": site_options(&dataset, &config.labels.all_sites),
            "slider": slider_spec(&dataset, &config.slider, &views.selection),
        });
        println!("{}", serde_json::to_string(&layout)?);
    }

    let labels = config.labels.clone();
    let printer = tokio::spawn(async move {
        while frames.changed().await.is_ok() {
            let latest = frames.borrow_and_update().clone();
            if let Some(views) = latest {
                let frame = ChartFrame::from_views(&views, &labels);
                match serde_json::to_string(&frame) {
                    Ok(line) => println!("{}", line),
                    Err(e) => warn!("Failed to serialize frame {}: {}", views.generation, e),
                }
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<SelectionChange>(line) {
            Ok(change) => handle.send(change)?,
            Err(e) => warn!("Ignoring malformed selection change: {}", e),
        }
    }

    info!("Input closed, shutting down");
    handle.shutdown().await?;
    // Dropping the last sender ends the printer once it has drained
    drop(sink);
    printer.await.context("frame printer panicked")?;

    Ok(())
}
