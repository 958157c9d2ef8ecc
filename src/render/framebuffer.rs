//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a bounds-checked view into a color buffer. There is no depth
//! buffer: overlap is resolved by draw order alone.

/// A view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass the buffer and its dimensions together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set a pixel, silently ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[y as usize * self.width as usize + x as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut buffer = vec![0u32; 4 * 3];
        let mut fb = FrameBuffer::new(&mut buffer, 4, 3);
        fb.set_pixel(-1, 0, 7);
        fb.set_pixel(4, 0, 7);
        fb.set_pixel(0, 3, 7);
        fb.set_pixel(3, 2, 9);
        assert_eq!(fb.get_pixel(3, 2), Some(9));
        assert_eq!(fb.get_pixel(4, 2), None);
        assert_eq!(buffer.iter().filter(|&&p| p != 0).count(), 1);
    }
}
