//! Software drawing surface.
//!
//! Provides the [`Renderer`] struct which owns the ARGB8888 color buffer and
//! implements the 2D primitives the box pipeline needs: filled convex quads,
//! open line strips and single lines.

use std::path::Path;

use super::framebuffer::FrameBuffer;
use super::rasterizer::EdgeFunctionRasterizer;
use super::Surface;
use crate::colors::{unpack_color, Color};
use crate::error::Error;
use crate::face::{PrimitiveKind, ProjectedFace};
use crate::math::vec2::Vec2;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    rasterizer: EdgeFunctionRasterizer,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![Color::BACKGROUND.to_argb(); size],
            width,
            height,
            rasterizer: EdgeFunctionRasterizer::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        self.color_buffer = vec![Color::BACKGROUND.to_argb(); size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = y as usize * self.width as usize + x as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = y as usize * self.width as usize + x as usize;
            Some(Color::from_argb(self.color_buffer[index]))
        } else {
            None
        }
    }

    /// Fills a convex polygon given in perimeter order.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let rasterizer = self.rasterizer;
        let mut fb = self.as_framebuffer();
        rasterizer.fill_convex_polygon(points, &mut fb, color.to_argb());
    }

    /// Draws consecutive segments through `points` without closing the loop.
    pub fn draw_line_strip(&mut self, points: &[Vec2], color: Color) {
        for pair in points.windows(2) {
            self.draw_segment(pair[0], pair[1], color);
        }
    }

    fn draw_segment(&mut self, from: Vec2, to: Vec2, color: Color) {
        if !(from.is_finite() && to.is_finite()) {
            return;
        }
        // Points near the eye plane project millions of pixels away; only the
        // visible part may reach the integer walk.
        let Some((from, to)) = clip_segment(from, to, self.width, self.height) else {
            return;
        };
        self.draw_line_bresenham(
            from.x.round() as i32,
            from.y.round() as i32,
            to.x.round() as i32,
            to.y.round() as i32,
            color.to_argb(),
        );
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Only integer arithmetic is used: an error term tracks the distance
    /// between the ideal line and the current pixel, and when it crosses a
    /// threshold the walk steps along the minor axis as well.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both conditions can hold, which gives a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // slice covers exactly the buffer's bytes and borrows it immutably.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Writes the current frame to an image file (format chosen by extension).
    pub fn save_image<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut rgba = Vec::with_capacity(self.color_buffer.len() * 4);
        for &pixel in &self.color_buffer {
            let (a, r, g, b) = unpack_color(pixel);
            rgba.extend_from_slice(&[r, g, b, a]);
        }
        let image = image::RgbaImage::from_raw(self.width, self.height, rgba)
            .ok_or_else(|| Error::InvalidConfig("frame buffer size mismatch".to_string()))?;
        image.save(path)?;
        Ok(())
    }
}

/// Liang-Barsky clip of a segment to the pixel rectangle
/// `[0, width - 1] x [0, height - 1]`. Returns `None` when nothing is left.
fn clip_segment(from: Vec2, to: Vec2, width: u32, height: u32) -> Option<(Vec2, Vec2)> {
    if width == 0 || height == 0 {
        return None;
    }
    // f64 keeps the visible span exact when an endpoint is ~1e9 away.
    let (x0, y0) = (from.x as f64, from.y as f64);
    let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
    let max_x = (width - 1) as f64;
    let max_y = (height - 1) as f64;

    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
        if p == 0.0 {
            // Parallel to this edge and outside it
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    let at = |t: f64| {
        Vec2::new(
            (x0 + dx * t).clamp(0.0, max_x) as f32,
            (y0 + dy * t).clamp(0.0, max_y) as f32,
        )
    };
    Some((at(t0), at(t1)))
}

impl Surface for Renderer {
    fn draw_face(&mut self, face: &ProjectedFace) {
        match face.kind {
            PrimitiveKind::Filled => self.fill_polygon(&face.points, face.color),
            PrimitiveKind::Outline => self.draw_line_strip(&face.points, face.color),
        }
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.draw_segment(from, to, color);
    }
}
