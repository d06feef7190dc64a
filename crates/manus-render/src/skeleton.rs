//! Skeleton renderer - draws hand topology onto the canvas
//!
//! Connectivity is derived from positional indices alone: bone lines within
//! a digit, cross-digit links for the webbing between fingers, a tether
//! from each metacarpal down to the wrist, and the wrist-elbow arm segment.

use image::{Rgb, RgbImage};
use manus_core::{BoneKind, DigitKind, Hand, Vector3};

use crate::canvas::{Canvas, ScreenSize};

const HAND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const DOT_MARKER_RADIUS: i32 = 2;
const SKELETON_MARKER_RADIUS: i32 = 3;

/// Rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    Dots,
    #[default]
    Skeleton,
}

impl DrawMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            DrawMode::Dots => DrawMode::Skeleton,
            DrawMode::Skeleton => DrawMode::Dots,
        }
    }
}

/// Whether the bone at (digit, bone) links across to the next digit's
/// same-index bone. The thumb only links its metacarpal; index, middle and
/// ring link metacarpal and proximal; the pinky never originates a link.
pub fn links_to_next_digit(digit: usize, bone: usize) -> bool {
    (digit == 0 && bone == 0) || ((1..=3).contains(&digit) && bone < 2)
}

/// Draws a list of hands into an owned buffer.
///
/// Stateless across frames beyond the draw mode and buffer ownership.
pub struct SkeletonRenderer {
    screen: ScreenSize,
    canvas: Canvas,
    mode: DrawMode,
}

impl SkeletonRenderer {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            canvas: Canvas::new(screen),
            mode: DrawMode::default(),
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// The rendered buffer
    pub fn image(&self) -> &RgbImage {
        self.canvas.image()
    }

    /// Project a joint to pixel coordinates; `None` only for an absent
    /// joint, never as a function of being off-screen.
    fn project(&self, joint: Option<Vector3>) -> Option<(i32, i32)> {
        joint.map(|j| self.screen.project(j))
    }

    /// Clear the buffer and draw every hand in the current mode.
    pub fn render(&mut self, hands: &[Hand]) {
        self.canvas.clear();
        if hands.is_empty() {
            return;
        }

        for hand in hands {
            match self.mode {
                DrawMode::Dots => self.draw_dots(hand),
                DrawMode::Skeleton => self.draw_skeleton(hand),
            }
        }
    }

    fn draw_dots(&mut self, hand: &Hand) {
        for digit in &hand.digits {
            for bone in &digit.bones {
                if let Some((x, y)) = self.project(bone.prev_joint) {
                    self.canvas.disc(x, y, DOT_MARKER_RADIUS, HAND_COLOR);
                }
                if let Some((x, y)) = self.project(bone.next_joint) {
                    self.canvas.disc(x, y, DOT_MARKER_RADIUS, HAND_COLOR);
                }
            }
        }
    }

    fn draw_skeleton(&mut self, hand: &Hand) {
        let wrist = self.project(hand.arm.next_joint);
        let elbow = self.project(hand.arm.prev_joint);

        for digit_index in 0..DigitKind::COUNT {
            for bone_index in 0..BoneKind::COUNT {
                let bone = &hand.digits[digit_index].bones[bone_index];

                if let Some((x, y)) = wrist {
                    self.canvas.disc(x, y, SKELETON_MARKER_RADIUS, HAND_COLOR);
                }
                if let Some((x, y)) = elbow {
                    self.canvas.disc(x, y, SKELETON_MARKER_RADIUS, HAND_COLOR);
                }
                if let (Some(w), Some(e)) = (wrist, elbow) {
                    self.canvas.segment(w, e, HAND_COLOR);
                }

                let start = self.project(bone.prev_joint);
                let end = self.project(bone.next_joint);

                if let Some((x, y)) = start {
                    self.canvas.disc(x, y, SKELETON_MARKER_RADIUS, HAND_COLOR);
                }
                if let Some((x, y)) = end {
                    self.canvas.disc(x, y, SKELETON_MARKER_RADIUS, HAND_COLOR);
                }
                if let (Some(s), Some(e)) = (start, end) {
                    self.canvas.segment(s, e, HAND_COLOR);
                }

                if links_to_next_digit(digit_index, bone_index) {
                    let next_bone = &hand.digits[digit_index + 1].bones[bone_index];
                    let next_start = self.project(next_bone.prev_joint);
                    if let (Some(s), Some(n)) = (start, next_start) {
                        self.canvas.segment(s, n, HAND_COLOR);
                    }
                }

                if bone_index == 0 {
                    if let (Some(s), Some(w)) = (start, wrist) {
                        self.canvas.segment(s, w, HAND_COLOR);
                    }
                }
            }
        }
    }
}
