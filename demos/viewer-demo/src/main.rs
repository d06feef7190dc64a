//! MANUS viewer demo
//!
//! Wires a synthetic tracking source through the viewer loop and into a
//! headless PNG display: the full pipeline minus the physical sensor and
//! the window system. Halfway through, the draw mode toggles from
//! Skeleton to Dots.

mod display;
mod synthetic;

use std::sync::Arc;
use std::time::Duration;

use manus_core::ManusResult;
use manus_runtime::{HandTracker, TrackingSource, Viewer, ViewerConfig};
use tracing_subscriber::EnvFilter;

use display::PngDisplay;
use synthetic::SyntheticSource;

fn main() -> ManusResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let tracker = Arc::new(HandTracker::new());
    let slot = tracker.slot();

    let mut source = SyntheticSource::new(Duration::from_millis(5));
    source.connect(tracker)?;

    let mut surface = PngDisplay::new("target/viewer-frames", 30, 60, 120)?;
    let mut viewer = Viewer::new(ViewerConfig::default(), slot);
    viewer.run(&mut surface)?;

    source.disconnect();
    tracing::info!("viewer demo finished");
    Ok(())
}
