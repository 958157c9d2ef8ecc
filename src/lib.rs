//! A pseudo-3D box field drawn with 2D primitives.
//!
//! Boxes are projected to the screen and their faces are ordered back to
//! front per box (painter's algorithm) instead of using a depth buffer.
//! SDL2 is only used for the window; all drawing happens on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use boxfield::prelude::*;
//!
//! let mut engine = Engine::new(&EngineConfig::default());
//! engine.update(&InputState::default());
//! engine.render();
//! engine.save_screenshot("frame.png")?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod corner;
pub mod cuboid;
pub mod engine;
pub mod error;
pub mod face;
pub mod input;
pub mod math;
pub mod noise_field;
pub mod projection;
pub mod render;
pub mod scene;
pub mod sorting;
pub mod vertex;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::{Args, EngineConfig, SceneConfig};
pub use cuboid::Cuboid;
pub use engine::Engine;
pub use error::Error;
pub use projection::{Projector, RenderContext, ViewMode};
pub use scene::Scene;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use boxfield::prelude::*;
/// ```
pub mod prelude {
    // Engine & configuration
    pub use crate::config::{Args, EngineConfig, GridSize, SceneConfig};
    pub use crate::engine::Engine;
    pub use crate::error::Error;

    // Geometry
    pub use crate::colors::Color;
    pub use crate::corner::Corner;
    pub use crate::cuboid::Cuboid;
    pub use crate::face::{Face, FaceSide, PrimitiveKind, ProjectedFace};
    pub use crate::scene::Scene;
    pub use crate::vertex::BoxVertex;

    // Projection
    pub use crate::projection::{Projector, RenderContext, ViewMode};

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{DrawCommand, DrawList, Renderer, Surface};

    // Window & Input
    pub use crate::input::InputState;
    pub use crate::window::{FpsCounter, FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::face::build_faces;
    pub use crate::render::{EdgeFunctionRasterizer, FrameBuffer};
    pub use crate::sorting::{depth_order, sort_by_depth};
}
