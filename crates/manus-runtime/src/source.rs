//! Tracking source interfaces
//!
//! A tracking source is an external sensor/driver delivering per-frame hand
//! records through push-style callbacks. The core never pulls from it.

use std::fmt;
use std::sync::Arc;

use manus_core::{Hand, ManusResult};

/// Tracking orientation reported by a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMode {
    Desktop,
    Hmd,
    ScreenTop,
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackingMode::Desktop => "Desktop",
            TrackingMode::Hmd => "HMD",
            TrackingMode::ScreenTop => "ScreenTop",
        };
        f.write_str(name)
    }
}

/// Diagnostic device description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub serial: String,
}

/// One captured frame: a Hand-list-bearing record.
///
/// `frame_id` and `timestamp_us` identify the capture; they are not part of
/// the flattening schema and are never round-tripped.
#[derive(Debug, Clone)]
pub struct TrackingFrame {
    pub frame_id: u64,
    pub timestamp_us: i64,
    pub hands: Vec<Hand>,
}

/// A physical device as seen through the source.
pub trait TrackingDevice {
    /// Open the device for detailed info
    fn open(&self) -> ManusResult<DeviceInfo>;

    /// Best-effort info without opening
    fn info(&self) -> DeviceInfo;
}

/// Detailed device info where possible, best-effort otherwise.
///
/// Failure to open is non-fatal: it is logged and the unopened info is
/// used instead.
pub fn describe_device(device: &dyn TrackingDevice) -> DeviceInfo {
    match device.open() {
        Ok(info) => info,
        Err(err) => {
            tracing::warn!("cannot open device for detailed info: {}", err);
            device.info()
        }
    }
}

/// Callbacks a source invokes from its own thread/context.
///
/// Each notification is asynchronous with respect to the consuming loop.
pub trait TrackingEvents: Send + Sync {
    /// A new frame was captured
    fn on_tracking(&self, frame: TrackingFrame);

    /// A device was discovered
    fn on_device(&self, _device: &dyn TrackingDevice) {}

    /// The tracking mode changed
    fn on_tracking_mode(&self, _mode: TrackingMode) {}
}

/// Connect/disconnect lifecycle of a tracking source.
pub trait TrackingSource {
    fn connect(&mut self, events: Arc<dyn TrackingEvents>) -> ManusResult<()>;

    fn disconnect(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use manus_core::ManusError;

    struct LockedDevice;

    impl TrackingDevice for LockedDevice {
        fn open(&self) -> ManusResult<DeviceInfo> {
            Err(ManusError::DeviceUnavailable("in use".into()))
        }

        fn info(&self) -> DeviceInfo {
            DeviceInfo {
                serial: "FALLBACK-01".into(),
            }
        }
    }

    struct OpenableDevice;

    impl TrackingDevice for OpenableDevice {
        fn open(&self) -> ManusResult<DeviceInfo> {
            Ok(DeviceInfo {
                serial: "OPENED-01".into(),
            })
        }

        fn info(&self) -> DeviceInfo {
            DeviceInfo {
                serial: "UNOPENED-01".into(),
            }
        }
    }

    #[test]
    fn test_describe_device_prefers_opened_info() {
        assert_eq!(describe_device(&OpenableDevice).serial, "OPENED-01");
    }

    #[test]
    fn test_describe_device_falls_back_when_open_fails() {
        assert_eq!(describe_device(&LockedDevice).serial, "FALLBACK-01");
    }

    #[test]
    fn test_tracking_mode_names() {
        assert_eq!(TrackingMode::Desktop.to_string(), "Desktop");
        assert_eq!(TrackingMode::Hmd.to_string(), "HMD");
        assert_eq!(TrackingMode::ScreenTop.to_string(), "ScreenTop");
    }
}
