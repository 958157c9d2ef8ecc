//! A single box and its per-frame render pipeline.
//!
//! A [`Cuboid`] keeps only its transform and fill. Each frame `update`
//! regenerates the eight corner vertices, and `display` builds the faces,
//! orders them back to front and submits them to a [`Surface`]. Nothing
//! derived is kept between frames, so size and rotation can change freely.

use crate::colors::Color;
use crate::corner::Corner;
use crate::face::{build_faces, Face, PrimitiveKind, FACES_PER_BOX};
use crate::math::vec3::Vec3;
use crate::projection::RenderContext;
use crate::render::Surface;
use crate::sorting::sort_by_depth;
use crate::vertex::BoxVertex;

#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    position: Vec3,
    size: Vec3,
    rotation: Vec3, // Euler angles in radians, applied X then Y then Z
    fill_color: Color,
    kind: PrimitiveKind,
    vertices: Vec<BoxVertex>,
}

impl Cuboid {
    /// Creates a box and computes its first set of vertices.
    pub fn new(position: Vec3, size: Vec3, rotation: Vec3, fill_color: Color, kind: PrimitiveKind) -> Self {
        let mut cuboid = Self {
            position,
            size,
            rotation,
            fill_color,
            kind,
            vertices: Vec::with_capacity(Corner::ALL.len()),
        };
        cuboid.update();
        cuboid
    }

    // ============ Transform ============

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec3) {
        self.size = size;
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    pub fn rotate(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    // ============ Appearance ============

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Corner vertices computed by the last [`Cuboid::update`].
    pub fn vertices(&self) -> &[BoxVertex] {
        &self.vertices
    }

    // ============ Frame ============

    /// Recomputes the eight world-space corners from position and size.
    pub fn update(&mut self) {
        self.vertices.clear();
        self.vertices.extend(
            Corner::ALL
                .iter()
                .map(|&corner| BoxVertex::new(corner.position(self.position, self.size), corner)),
        );
    }

    /// The six faces in build order.
    pub fn faces(&self) -> [Face; FACES_PER_BOX] {
        build_faces(&self.vertices, self.fill_color, self.kind)
    }

    /// The six faces ordered back to front under `ctx`.
    pub fn sorted_faces(&self, ctx: &RenderContext) -> [Face; FACES_PER_BOX] {
        let mut faces = self.faces();
        sort_by_depth(&mut faces, |face| face.depth(&ctx.projector, self.rotation));
        faces
    }

    /// Draws the box's faces back to front onto `surface`.
    pub fn display<S: Surface + ?Sized>(&self, ctx: &RenderContext, surface: &mut S) {
        for face in self.sorted_faces(ctx).iter() {
            surface.draw_face(&face.project(ctx, self.rotation));
        }
    }

    /// Post-draw hook, run once per frame after every box has been displayed.
    pub fn late_update(&mut self) {}
}
