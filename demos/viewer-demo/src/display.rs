//! Headless display surface
//!
//! Writes every Nth presented buffer to a PNG file and drives the viewer
//! with a scripted command sequence instead of a keyboard.

use std::path::PathBuf;

use image::RgbImage;
use manus_core::{ManusError, ManusResult};
use manus_runtime::{Command, DisplaySurface};

pub struct PngDisplay {
    out_dir: PathBuf,
    save_every: usize,
    toggle_at: usize,
    quit_after: usize,
    presented: usize,
}

impl PngDisplay {
    pub fn new(
        out_dir: impl Into<PathBuf>,
        save_every: usize,
        toggle_at: usize,
        quit_after: usize,
    ) -> ManusResult<Self> {
        let out_dir = out_dir.into();
        std::fs::create_dir_all(&out_dir)
            .map_err(|e| ManusError::DisplayError(e.to_string()))?;

        Ok(Self {
            out_dir,
            save_every,
            toggle_at,
            quit_after,
            presented: 0,
        })
    }
}

impl DisplaySurface for PngDisplay {
    fn present(&mut self, image: &RgbImage) -> ManusResult<Option<Command>> {
        if self.presented % self.save_every == 0 {
            let path = self.out_dir.join(format!("frame_{:04}.png", self.presented));
            image
                .save(&path)
                .map_err(|e| ManusError::DisplayError(e.to_string()))?;
            tracing::info!("wrote {}", path.display());
        }

        self.presented += 1;

        if self.presented >= self.quit_after {
            Ok(Some(Command::Quit))
        } else if self.presented == self.toggle_at {
            Ok(Some(Command::ToggleDrawMode))
        } else {
            Ok(None)
        }
    }
}
