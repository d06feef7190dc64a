//! Synthetic tracking source
//!
//! Produces a deterministic pair of sweeping hands on its own thread, the
//! way a real sensor driver would push frames at capture rate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use manus_core::{
    Bone, BoneKind, DigitKind, Hand, HandType, ManusError, ManusResult, Vector3, Vector4,
};
use manus_runtime::{
    DeviceInfo, TrackingDevice, TrackingEvents, TrackingFrame, TrackingMode, TrackingSource,
};

/// Device stand-in; it cannot be opened, which exercises the best-effort
/// info fallback.
pub struct SyntheticDevice;

impl TrackingDevice for SyntheticDevice {
    fn open(&self) -> ManusResult<DeviceInfo> {
        Err(ManusError::DeviceUnavailable(
            "synthetic device has no detailed info".into(),
        ))
    }

    fn info(&self) -> DeviceInfo {
        DeviceInfo {
            serial: "SYN-0001".into(),
        }
    }
}

/// One fully tracked hand at animation time `t`, digits fanned out from
/// the palm.
fn sweeping_hand(t: f32, hand_type: HandType) -> Hand {
    let mirror = if hand_type == HandType::Left { -1.0 } else { 1.0 };
    let palm_pos = Vector3::new(mirror * (80.0 + 60.0 * t.sin()), 180.0, 30.0 * t.cos());

    let mut hand = Hand {
        confidence: 1.0,
        pinch_distance: 35.0,
        grab_angle: 0.4,
        pinch_strength: 0.1,
        grab_strength: 0.05,
        hand_type,
        ..Default::default()
    };

    hand.palm.position = palm_pos;
    hand.palm.stabilized_position = palm_pos;
    hand.palm.velocity = Vector3::new(mirror * 60.0 * t.cos(), 0.0, -30.0 * t.sin());
    hand.palm.normal = Vector3::new(0.0, -1.0, 0.0);
    hand.palm.direction = Vector3::new(0.0, 0.0, -1.0);
    hand.palm.width = 85.0;
    hand.palm.orientation = Vector4::identity();

    for (d, digit_kind) in DigitKind::ALL.into_iter().enumerate() {
        let spread = (d as f32 - 2.0) * 0.22;
        let dir = Vector3::new(mirror * spread.sin(), 0.0, -spread.cos());
        let digit = hand.digit_mut(digit_kind);
        digit.is_extended = true;

        let mut joint = Vector3::new(palm_pos.x, palm_pos.y, palm_pos.z + 20.0);
        for (b, bone_kind) in BoneKind::ALL.into_iter().enumerate() {
            let length = 34.0 - b as f32 * 6.0;
            let next = Vector3::new(
                joint.x + dir.x * length,
                joint.y,
                joint.z + dir.z * length,
            );
            *digit.bone_mut(bone_kind) = Bone {
                prev_joint: Some(joint),
                next_joint: Some(next),
                width: 10.0 - b as f32,
                rotation: Vector4::identity(),
            };
            joint = next;
        }
    }

    hand.arm = Bone {
        prev_joint: Some(Vector3::new(palm_pos.x, palm_pos.y, palm_pos.z + 160.0)),
        next_joint: Some(Vector3::new(palm_pos.x, palm_pos.y, palm_pos.z + 60.0)),
        width: 40.0,
        rotation: Vector4::identity(),
    };

    hand
}

/// Pushes frames until disconnected.
pub struct SyntheticSource {
    interval: Duration,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SyntheticSource {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }
}

impl TrackingSource for SyntheticSource {
    fn connect(&mut self, events: Arc<dyn TrackingEvents>) -> ManusResult<()> {
        events.on_device(&SyntheticDevice);
        events.on_tracking_mode(TrackingMode::Desktop);

        let stop = Arc::clone(&self.stop);
        let interval = self.interval;
        self.handle = Some(std::thread::spawn(move || {
            let mut frame_id = 0u64;
            while !stop.load(Ordering::Relaxed) {
                let t = frame_id as f32 / 60.0;
                events.on_tracking(TrackingFrame {
                    frame_id,
                    timestamp_us: (frame_id as i64) * interval.as_micros() as i64,
                    hands: vec![
                        sweeping_hand(t, HandType::Right),
                        sweeping_hand(t + 1.2, HandType::Left),
                    ],
                });
                frame_id += 1;
                std::thread::sleep(interval);
            }
        }));

        Ok(())
    }

    fn disconnect(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
