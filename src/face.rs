//! Box faces and the static cube topology.
//!
//! A box is drawn as six quads. Which four corners make up each quad, and in
//! what perimeter order, is fixed by [`FACE_TOPOLOGY`]; the per-face shade
//! offsets in [`FACE_SHADES`] stand in for directional lighting.

use crate::colors::Color;
use crate::corner::Corner;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::projection::{Projector, RenderContext};
use crate::vertex::BoxVertex;

pub const FACES_PER_BOX: usize = 6;
pub const VERTICES_PER_FACE: usize = 4;

/// Which side of the box a face covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceSide {
    Front,
    Back,
    Top,
    Right,
    Bottom,
    Left,
}

impl FaceSide {
    /// Face groups in build order; the index is also the shade index.
    pub const ALL: [FaceSide; FACES_PER_BOX] = [
        FaceSide::Front,
        FaceSide::Back,
        FaceSide::Top,
        FaceSide::Right,
        FaceSide::Bottom,
        FaceSide::Left,
    ];

    pub fn index(self) -> usize {
        match self {
            FaceSide::Front => 0,
            FaceSide::Back => 1,
            FaceSide::Top => 2,
            FaceSide::Right => 3,
            FaceSide::Bottom => 4,
            FaceSide::Left => 5,
        }
    }

    pub fn corners(self) -> [Corner; VERTICES_PER_FACE] {
        FACE_TOPOLOGY[self.index()]
    }

    pub fn shade(self) -> u8 {
        FACE_SHADES[self.index()]
    }
}

/// Corner identities of each face, in perimeter order, indexed like
/// [`FaceSide::ALL`].
pub const FACE_TOPOLOGY: [[Corner; VERTICES_PER_FACE]; FACES_PER_BOX] = [
    [Corner::LTF, Corner::RTF, Corner::RBF, Corner::LBF],
    [Corner::LTB, Corner::RTB, Corner::RBB, Corner::LBB],
    [Corner::LTB, Corner::RTB, Corner::RTF, Corner::LTF],
    [Corner::RTB, Corner::RBB, Corner::RBF, Corner::RTF],
    [Corner::RBB, Corner::LBB, Corner::LBF, Corner::RBF],
    [Corner::LBB, Corner::LTB, Corner::LTF, Corner::LBF],
];

/// Brightness added to the box fill color per face group.
pub const FACE_SHADES: [u8; FACES_PER_BOX] = [0, 20, 40, 60, 80, 100];

/// How a face is submitted to the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveKind {
    /// Open line strip through the perimeter.
    #[default]
    Outline,
    /// Filled convex quad.
    Filled,
}

/// One quad of a box, referencing four of its current-frame vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub side: FaceSide,
    pub vertices: [BoxVertex; VERTICES_PER_FACE],
    pub color: Color,
    pub kind: PrimitiveKind,
}

impl Face {
    /// Center of the face in world space; the point its depth is taken from.
    pub fn center(&self) -> Vec3 {
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::ZERO, |acc, v| acc + v.position);
        sum / VERTICES_PER_FACE as f32
    }

    /// Projected depth of the face center. Larger is nearer the eye.
    pub fn depth(&self, projector: &Projector, rotation: Vec3) -> f32 {
        projector.depth(self.center(), rotation)
    }

    /// Projects the perimeter to screen space.
    pub fn project(&self, ctx: &RenderContext, rotation: Vec3) -> ProjectedFace {
        ProjectedFace {
            side: self.side,
            points: self.vertices.map(|v| ctx.project_to_screen(v.position, rotation)),
            color: self.color,
            kind: self.kind,
        }
    }
}

/// A face ready to be drawn: screen-space perimeter plus fill and kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedFace {
    pub side: FaceSide,
    pub points: [Vec2; VERTICES_PER_FACE],
    pub color: Color,
    pub kind: PrimitiveKind,
}

/// Assembles the six faces of a box from its vertex list.
///
/// Vertices are looked up by corner identity, so `vertices` may be in any
/// order. A corner missing from the list is replaced by the first vertex, or
/// by `BoxVertex::default()` when the list is empty.
pub fn build_faces(vertices: &[BoxVertex], fill: Color, kind: PrimitiveKind) -> [Face; FACES_PER_BOX] {
    FaceSide::ALL.map(|side| Face {
        side,
        vertices: side.corners().map(|corner| vertex_for_corner(vertices, corner)),
        color: fill.brighten(side.shade()),
        kind,
    })
}

fn vertex_for_corner(vertices: &[BoxVertex], corner: Corner) -> BoxVertex {
    vertices
        .iter()
        .find(|v| v.corner == corner)
        .or_else(|| vertices.first())
        .copied()
        .unwrap_or_default()
}
