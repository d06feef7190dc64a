//! Viewer loop - poll, render, present
//!
//! Single-threaded and non-blocking with respect to the producer: the loop
//! polls the frame slot, renders fresh frames, hands the buffer to the
//! display surface and applies whatever command came back. Termination is
//! cooperative, on an explicit quit command only.

use std::sync::Arc;
use std::time::Duration;

use image::RgbImage;
use manus_core::ManusResult;
use manus_render::{ScreenSize, SkeletonRenderer};

use crate::capture::verify_frame;
use crate::slot::FrameSlot;

/// Interactive commands recognized by the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleDrawMode,
}

/// Where rendered buffers go, and where commands come from.
pub trait DisplaySurface {
    /// Show the buffer; optionally return a pending command.
    fn present(&mut self, image: &RgbImage) -> ManusResult<Option<Command>>;
}

/// Viewer configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub screen: ScreenSize,
    /// Delay between slot polls
    pub poll_interval: Duration,
    /// Run the capture round-trip check on every rendered frame
    pub verify_capture: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            poll_interval: Duration::from_millis(10),
            verify_capture: true,
        }
    }
}

/// Consuming side of the pipeline: slot in, display surface out.
pub struct Viewer {
    config: ViewerConfig,
    renderer: SkeletonRenderer,
    slot: Arc<FrameSlot>,
}

impl Viewer {
    pub fn new(config: ViewerConfig, slot: Arc<FrameSlot>) -> Self {
        let renderer = SkeletonRenderer::new(config.screen);
        Self {
            config,
            renderer,
            slot,
        }
    }

    pub fn renderer(&self) -> &SkeletonRenderer {
        &self.renderer
    }

    /// One poll step. Returns `false` once the loop should stop.
    ///
    /// Without a fresh frame this is a no-op; nothing blocks.
    pub fn tick(&mut self, surface: &mut dyn DisplaySurface) -> ManusResult<bool> {
        if !self.slot.has_fresh() {
            return Ok(true);
        }

        let frame = self.slot.take()?;
        self.renderer.render(&frame.hands);

        if self.config.verify_capture {
            if let Err(err) = verify_frame(&frame) {
                tracing::warn!("capture verification failed on frame {}: {}", frame.frame_id, err);
            }
        }

        match surface.present(self.renderer.image())? {
            Some(Command::Quit) => Ok(false),
            Some(Command::ToggleDrawMode) => {
                self.renderer.toggle_mode();
                Ok(true)
            }
            None => Ok(true),
        }
    }

    /// Poll until the surface asks to quit.
    pub fn run(&mut self, surface: &mut dyn DisplaySurface) -> ManusResult<()> {
        loop {
            if !self.tick(surface)? {
                return Ok(());
            }
            std::thread::sleep(self.config.poll_interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TrackingFrame;
    use manus_render::DrawMode;

    /// Surface that replays a scripted command sequence.
    struct ScriptedSurface {
        script: Vec<Option<Command>>,
        presented: usize,
    }

    impl ScriptedSurface {
        fn new(script: Vec<Option<Command>>) -> Self {
            Self {
                script,
                presented: 0,
            }
        }
    }

    impl DisplaySurface for ScriptedSurface {
        fn present(&mut self, _image: &RgbImage) -> ManusResult<Option<Command>> {
            let command = self.script.get(self.presented).copied().flatten();
            self.presented += 1;
            Ok(command)
        }
    }

    fn frame(id: u64) -> TrackingFrame {
        TrackingFrame {
            frame_id: id,
            timestamp_us: 0,
            hands: Vec::new(),
        }
    }

    #[test]
    fn test_tick_without_fresh_frame_skips_presentation() {
        let slot = Arc::new(FrameSlot::new());
        let mut viewer = Viewer::new(ViewerConfig::default(), Arc::clone(&slot));
        let mut surface = ScriptedSurface::new(vec![]);

        assert!(viewer.tick(&mut surface).unwrap());
        assert_eq!(surface.presented, 0);
    }

    #[test]
    fn test_tick_presents_fresh_frame_once() {
        let slot = Arc::new(FrameSlot::new());
        let mut viewer = Viewer::new(ViewerConfig::default(), Arc::clone(&slot));
        let mut surface = ScriptedSurface::new(vec![None, None]);

        slot.publish(frame(1));
        assert!(viewer.tick(&mut surface).unwrap());
        assert!(viewer.tick(&mut surface).unwrap());

        // second tick saw no fresh frame
        assert_eq!(surface.presented, 1);
    }

    #[test]
    fn test_toggle_command_flips_draw_mode() {
        let slot = Arc::new(FrameSlot::new());
        let mut viewer = Viewer::new(ViewerConfig::default(), Arc::clone(&slot));
        let mut surface = ScriptedSurface::new(vec![Some(Command::ToggleDrawMode)]);

        assert_eq!(viewer.renderer().mode(), DrawMode::Skeleton);
        slot.publish(frame(1));
        assert!(viewer.tick(&mut surface).unwrap());
        assert_eq!(viewer.renderer().mode(), DrawMode::Dots);
    }

    #[test]
    fn test_quit_command_stops_the_loop() {
        let slot = Arc::new(FrameSlot::new());
        let mut viewer = Viewer::new(ViewerConfig::default(), Arc::clone(&slot));
        let mut surface = ScriptedSurface::new(vec![Some(Command::Quit)]);

        slot.publish(frame(1));
        assert!(!viewer.tick(&mut surface).unwrap());
    }

    /// Surface that refills the slot on every present, so the loop always
    /// has a fresh frame until the scripted quit.
    struct RefillingSurface {
        slot: Arc<FrameSlot>,
        script: Vec<Option<Command>>,
        presented: usize,
    }

    impl DisplaySurface for RefillingSurface {
        fn present(&mut self, _image: &RgbImage) -> ManusResult<Option<Command>> {
            let command = self.script.get(self.presented).copied().flatten();
            self.presented += 1;
            self.slot.publish(frame(self.presented as u64 + 1));
            Ok(command)
        }
    }

    #[test]
    fn test_run_terminates_on_quit() {
        let slot = Arc::new(FrameSlot::new());
        let config = ViewerConfig {
            poll_interval: Duration::from_millis(1),
            ..Default::default()
        };
        let mut viewer = Viewer::new(config, Arc::clone(&slot));
        let mut surface = RefillingSurface {
            slot: Arc::clone(&slot),
            script: vec![None, None, Some(Command::Quit)],
            presented: 0,
        };

        slot.publish(frame(1));
        viewer.run(&mut surface).unwrap();
        assert_eq!(surface.presented, 3);
    }
}
