//! Single-slot frame cell
//!
//! The producer overwrites, the consumer polls. There is no queue and no
//! backpressure: a frame published before the previous one was consumed
//! silently replaces it.

use parking_lot::Mutex;

use manus_core::{ManusError, ManusResult};

use crate::source::TrackingFrame;

#[derive(Default)]
struct SlotState {
    latest: Option<TrackingFrame>,
    fresh: bool,
}

/// Overwrite-on-write cell holding the most recent tracking frame.
#[derive(Default)]
pub struct FrameSlot {
    inner: Mutex<SlotState>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a frame, replacing any unconsumed one.
    pub fn publish(&self, frame: TrackingFrame) {
        let mut state = self.inner.lock();
        state.latest = Some(frame);
        state.fresh = true;
    }

    /// Has a frame arrived since the last `take`?
    pub fn has_fresh(&self) -> bool {
        self.inner.lock().fresh
    }

    /// Consume the current frame, clearing the fresh flag atomically with
    /// respect to the producer.
    ///
    /// Fails with `StaleAccess` if no frame has ever been published; after
    /// the first publish, repeated takes return the latest frame again.
    pub fn take(&self) -> ManusResult<TrackingFrame> {
        let mut state = self.inner.lock();
        state.fresh = false;
        state.latest.clone().ok_or(ManusError::StaleAccess)
    }
}
