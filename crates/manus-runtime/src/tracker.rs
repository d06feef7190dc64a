//! Default tracking listener
//!
//! Publishes every incoming frame into a shared [`FrameSlot`] and logs
//! device and mode events for diagnostics.

use std::sync::Arc;

use crate::slot::FrameSlot;
use crate::source::{describe_device, TrackingDevice, TrackingEvents, TrackingFrame, TrackingMode};

/// Listener endpoint for a tracking source.
#[derive(Default)]
pub struct HandTracker {
    slot: Arc<FrameSlot>,
}

impl HandTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the slot the consuming loop polls
    pub fn slot(&self) -> Arc<FrameSlot> {
        Arc::clone(&self.slot)
    }
}

impl TrackingEvents for HandTracker {
    fn on_tracking(&self, frame: TrackingFrame) {
        self.slot.publish(frame);
    }

    fn on_device(&self, device: &dyn TrackingDevice) {
        let info = describe_device(device);
        tracing::info!("found device {}", info.serial);
    }

    fn on_tracking_mode(&self, mode: TrackingMode) {
        tracing::info!("tracking mode changed to {}", mode);
    }
}
