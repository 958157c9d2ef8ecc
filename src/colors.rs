//! RGBA colors and ARGB8888 packing.
//!
//! Box fills and face shades are carried as [`Color`] values; the software
//! renderer stores pixels as packed `0xAARRGGBB` words, which is also the
//! layout of the SDL streaming texture.

use std::ops::Add;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const BACKGROUND: Self = Self::rgb(25, 25, 25);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Brightens every color channel by `amount`, clamping at 255.
    pub fn brighten(self, amount: u8) -> Self {
        self + Color::rgba(amount, amount, amount, 0)
    }

    pub fn to_argb(self) -> u32 {
        pack_color(self.a, self.r, self.g, self.b)
    }

    pub fn from_argb(argb: u32) -> Self {
        let (a, r, g, b) = unpack_color(argb);
        Self { r, g, b, a }
    }
}

/// Channel-wise saturating addition.
impl Add<Color> for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Self::Output {
        Self {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
            a: self.a.saturating_add(rhs.a),
        }
    }
}

#[inline]
pub fn pack_color(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
pub fn unpack_color(argb: u32) -> (u8, u8, u8, u8) {
    (
        (argb >> 24) as u8,
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_saturates_per_channel() {
        let sum = Color::rgb(200, 100, 30) + Color::rgb(100, 100, 100);
        assert_eq!(sum, Color::rgba(255, 200, 130, 255));
    }

    #[test]
    fn brighten_keeps_alpha() {
        let c = Color::rgba(10, 20, 30, 128).brighten(40);
        assert_eq!(c, Color::rgba(50, 60, 70, 128));
    }

    #[test]
    fn argb_packing_matches_sdl_layout() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_argb(), 0xFF123456);
        assert_eq!(Color::from_argb(0xFF123456), c);
    }
}
