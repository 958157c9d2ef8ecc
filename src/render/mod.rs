//! Draw-call sinks.
//!
//! The box pipeline hands finished faces to a [`Surface`]. Two sinks are
//! provided: the software [`Renderer`], which rasterizes into an ARGB8888
//! color buffer, and [`DrawList`], which just records the calls in order.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::EdgeFunctionRasterizer;
pub use renderer::Renderer;

use crate::colors::Color;
use crate::face::ProjectedFace;
use crate::math::vec2::Vec2;

/// Anything that accepts 2D draw calls in submission order.
///
/// There is no depth test: later calls paint over earlier ones.
pub trait Surface {
    /// Draw one projected face, filled or as an outline depending on its kind.
    fn draw_face(&mut self, face: &ProjectedFace);

    /// Draw a single line segment.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
}

/// A recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Face(ProjectedFace),
    Line { from: Vec2, to: Vec2, color: Color },
}

/// A [`Surface`] that records every call instead of drawing it.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the face submissions, in order.
    pub fn faces(&self) -> impl Iterator<Item = &ProjectedFace> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Face(face) => Some(face),
            DrawCommand::Line { .. } => None,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn draw_face(&mut self, face: &ProjectedFace) {
        self.commands.push(DrawCommand::Face(*face));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}
