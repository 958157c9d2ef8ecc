//! Logical corner identities of a cuboid.
//!
//! Corners are named Left/Right, Top/Bottom, Front/Back so faces can pick
//! their vertices by role instead of by position in a vertex list.

use crate::math::vec3::Vec3;

/// One of the eight corners of an axis-aligned box.
///
/// Axis conventions: left is -X, top is -Y (screen up), front is +Z (toward
/// the eye).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    #[default]
    LTF,
    RTF,
    RBF,
    LBF,
    LTB,
    RTB,
    RBB,
    LBB,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::LTF,
        Corner::RTF,
        Corner::RBF,
        Corner::LBF,
        Corner::LTB,
        Corner::RTB,
        Corner::RBB,
        Corner::LBB,
    ];

    pub fn is_left(self) -> bool {
        matches!(self, Corner::LTF | Corner::LBF | Corner::LTB | Corner::LBB)
    }

    pub fn is_top(self) -> bool {
        matches!(self, Corner::LTF | Corner::RTF | Corner::LTB | Corner::RTB)
    }

    pub fn is_front(self) -> bool {
        matches!(self, Corner::LTF | Corner::RTF | Corner::RBF | Corner::LBF)
    }

    /// Offset of this corner on a unit box centered at the origin.
    pub fn unit_offset(self) -> Vec3 {
        let half = |negative: bool| if negative { -0.5 } else { 0.5 };
        Vec3::new(half(self.is_left()), half(self.is_top()), -half(self.is_front()))
    }

    /// Corner position for a box of `size` centered at `center`.
    pub fn position(self, center: Vec3, size: Vec3) -> Vec3 {
        center + self.unit_offset().component_mul(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_axis_conventions() {
        assert_eq!(Corner::LTF.unit_offset(), Vec3::new(-0.5, -0.5, 0.5));
        assert_eq!(Corner::RBB.unit_offset(), Vec3::new(0.5, 0.5, -0.5));
    }

    #[test]
    fn corners_are_distinct() {
        for (i, a) in Corner::ALL.iter().enumerate() {
            for b in &Corner::ALL[i + 1..] {
                assert_ne!(a.unit_offset(), b.unit_offset());
            }
        }
    }

    #[test]
    fn position_scales_and_translates() {
        let p = Corner::RTF.position(Vec3::new(10.0, 0.0, 0.0), Vec3::new(12.0, 200.0, 12.0));
        assert_eq!(p, Vec3::new(16.0, -100.0, 6.0));
    }
}
