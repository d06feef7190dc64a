//! Raster canvas - owned RGB buffer with clipped drawing primitives

use image::{Rgb, RgbImage};
use manus_core::Vector3;

/// Output surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Project a 3D joint onto the screen: x maps across the width, depth
    /// (z) maps down the height, both centred and truncated to pixels.
    pub fn project(&self, joint: Vector3) -> (i32, i32) {
        (
            (joint.x + self.width as f32 / 2.0) as i32,
            (joint.z + self.height as f32 / 2.0) as i32,
        )
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        // Reference viewer surface
        Self::new(700, 500)
    }
}

/// Owned RGB drawing buffer.
///
/// All primitives clip at the edges; drawing off-canvas is a no-op, never
/// a panic.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(size: ScreenSize) -> Self {
        Self {
            image: RgbImage::new(size.width, size.height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read-only view of the buffer
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Reset every pixel to black
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgb([0, 0, 0]);
        }
    }

    /// Set one pixel, clipped
    pub fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Filled disc of the given radius
    pub fn disc(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Line segment between two points (Bresenham)
    pub fn segment(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
        let (mut x, mut y) = from;
        let (x1, y1) = to;

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn test_projection_centres_origin() {
        let screen = ScreenSize::new(700, 500);
        assert_eq!(screen.project(Vector3::new(0.0, 0.0, 0.0)), (350, 250));
    }

    #[test]
    fn test_projection_reaches_top_left() {
        let screen = ScreenSize::new(700, 500);
        assert_eq!(screen.project(Vector3::new(-350.0, 0.0, -250.0)), (0, 0));
    }

    #[test]
    fn test_projection_ignores_y() {
        let screen = ScreenSize::new(700, 500);
        assert_eq!(
            screen.project(Vector3::new(10.0, 999.0, -10.0)),
            screen.project(Vector3::new(10.0, -999.0, -10.0)),
        );
    }

    #[test]
    fn test_put_clips_out_of_bounds() {
        let mut canvas = Canvas::new(ScreenSize::new(10, 10));
        canvas.put(-1, 5, WHITE);
        canvas.put(5, 10, WHITE);
        canvas.put(5, 5, WHITE);

        assert_eq!(canvas.image().get_pixel(5, 5), &WHITE);
        assert!(canvas.image().pixels().filter(|p| **p == WHITE).count() == 1);
    }

    #[test]
    fn test_disc_fills_centre_and_radius() {
        let mut canvas = Canvas::new(ScreenSize::new(20, 20));
        canvas.disc(10, 10, 2, WHITE);

        assert_eq!(canvas.image().get_pixel(10, 10), &WHITE);
        assert_eq!(canvas.image().get_pixel(12, 10), &WHITE);
        assert_ne!(canvas.image().get_pixel(13, 10), &WHITE);
    }

    #[test]
    fn test_segment_hits_both_endpoints() {
        let mut canvas = Canvas::new(ScreenSize::new(20, 20));
        canvas.segment((2, 3), (15, 11), WHITE);

        assert_eq!(canvas.image().get_pixel(2, 3), &WHITE);
        assert_eq!(canvas.image().get_pixel(15, 11), &WHITE);
    }

    #[test]
    fn test_segment_clips_when_leaving_canvas() {
        let mut canvas = Canvas::new(ScreenSize::new(8, 8));
        canvas.segment((4, 4), (20, 4), WHITE);

        assert_eq!(canvas.image().get_pixel(7, 4), &WHITE);
    }

    #[test]
    fn test_clear_resets_all_pixels() {
        let mut canvas = Canvas::new(ScreenSize::new(16, 16));
        canvas.disc(8, 8, 3, WHITE);
        canvas.clear();

        assert!(canvas.image().pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
