use crate::corner::Corner;
use crate::math::vec3::Vec3;

/// A world-space box vertex tagged with the corner it represents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxVertex {
    pub position: Vec3,
    pub corner: Corner,
}

impl BoxVertex {
    pub fn new(position: Vec3, corner: Corner) -> Self {
        Self { position, corner }
    }
}
