//! 3D-to-2D projection.
//!
//! The [`Projector`] rotates a world-space point and maps it onto the view
//! plane, either with a perspective divide or as a parallel projection. The
//! [`RenderContext`] carries the active [`ViewMode`] and surface size so the
//! rest of the pipeline never reads ambient window state.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Distance from the eye to the origin along the view axis.
pub const DEFAULT_EYE_DISTANCE: f32 = 800.0;
/// Perspective scale; equal to the eye distance so z = 0 projects 1:1.
pub const DEFAULT_FOCAL_LENGTH: f32 = 800.0;
/// Smallest eye distance the perspective divide will use.
pub const MIN_EYE_DISTANCE: f32 = 1e-4;

/// How 3D points are flattened onto the screen. Applies to every box alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Perspective => ViewMode::Orthographic,
            ViewMode::Orthographic => ViewMode::Perspective,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Perspective => write!(f, "Perspective"),
            ViewMode::Orthographic => write!(f, "Orthographic"),
        }
    }
}

/// Rotation plus projection parameters.
///
/// The eye sits at `z = eye_distance` looking toward -Z, so larger projected
/// depth means nearer the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    eye_distance: f32,
    focal_length: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(DEFAULT_EYE_DISTANCE, DEFAULT_FOCAL_LENGTH)
    }
}

impl Projector {
    pub fn new(eye_distance: f32, focal_length: f32) -> Self {
        Self {
            eye_distance,
            focal_length,
        }
    }

    /// Projects `point` rotated by `rotation` onto the view plane.
    pub fn project(&self, point: Vec3, rotation: Vec3, mode: ViewMode) -> Vec2 {
        let projected = self.project_with_depth(point, rotation, mode);
        Vec2::new(projected.x, projected.y)
    }

    /// Projected depth of `point`: its Z after rotation.
    pub fn depth(&self, point: Vec3, rotation: Vec3) -> f32 {
        point.rotate_xyz(rotation).z
    }

    /// Projects a point and keeps its depth in the Z component.
    pub fn project_with_depth(&self, point: Vec3, rotation: Vec3, mode: ViewMode) -> Vec3 {
        let rotated = point.rotate_xyz(rotation);
        match mode {
            ViewMode::Orthographic => rotated,
            ViewMode::Perspective => {
                let scale = self.focal_length / self.distance_from_eye(rotated.z);
                Vec3::new(rotated.x * scale, rotated.y * scale, rotated.z)
            }
        }
    }

    /// Eye distance for a rotated depth, never smaller in magnitude than
    /// [`MIN_EYE_DISTANCE`].
    fn distance_from_eye(&self, z: f32) -> f32 {
        let distance = self.eye_distance - z;
        if distance.abs() < MIN_EYE_DISTANCE {
            // An exact zero has a positive sign bit, so it lands in front of the eye.
            MIN_EYE_DISTANCE.copysign(distance)
        } else {
            distance
        }
    }
}

/// Per-frame rendering parameters handed to the projector and box renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub view_mode: ViewMode,
    pub projector: Projector,
    width: u32,
    height: u32,
}

impl RenderContext {
    pub fn new(width: u32, height: u32, view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            projector: Projector::default(),
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

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// Moves a view-plane point so the origin lands at the surface center.
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        point + Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    /// Projects a world-space point all the way to screen pixels.
    pub fn project_to_screen(&self, point: Vec3, rotation: Vec3) -> Vec2 {
        self.to_screen(self.projector.project(point, rotation, self.view_mode))
    }
}
