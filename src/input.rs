//! Per-frame input snapshot.
//!
//! The window samples keyboard and mouse state once per frame into an
//! [`InputState`]; the scene turns it into rotation and translation commands
//! during its update step.

use crate::math::vec3::Vec3;

/// Rotation applied per frame for each held rotation key (radians).
pub const ROTATION_STEP: f32 = 0.05;
/// Translation applied per frame for each held arrow key.
pub const TRANSLATION_STEP: f32 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// W
    pub rotate_y_pos: bool,
    /// S
    pub rotate_y_neg: bool,
    /// A
    pub rotate_x_pos: bool,
    /// D
    pub rotate_x_neg: bool,
    /// Q
    pub rotate_z_pos: bool,
    /// E
    pub rotate_z_neg: bool,
    /// Up arrow
    pub move_forward: bool,
    /// Down arrow
    pub move_back: bool,
    /// Left arrow
    pub move_left: bool,
    /// Right arrow
    pub move_right: bool,
    /// Cursor position while the right mouse button is held.
    pub mouse_drag: Option<(i32, i32)>,
}

impl InputState {
    /// Combined rotation delta from the held keys.
    pub fn rotation_delta(&self) -> Vec3 {
        Vec3::new(
            axis(self.rotate_x_pos, self.rotate_x_neg),
            axis(self.rotate_y_pos, self.rotate_y_neg),
            axis(self.rotate_z_pos, self.rotate_z_neg),
        ) * ROTATION_STEP
    }

    /// Combined translation delta from the held arrow keys.
    pub fn translation_delta(&self) -> Vec3 {
        Vec3::new(
            axis(self.move_right, self.move_left),
            0.0,
            axis(self.move_forward, self.move_back),
        ) * TRANSLATION_STEP
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
