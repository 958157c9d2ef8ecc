//! Frame orchestration.
//!
//! The [`Engine`] owns the scene, the software renderer and the render
//! context, and runs one frame as update -> clear -> draw -> late update.
//! It knows nothing about SDL, so the same engine drives both the window
//! loop and headless rendering.

use std::path::Path;

use crate::colors::Color;
use crate::config::EngineConfig;
use crate::error::Error;
use crate::input::InputState;
use crate::projection::{RenderContext, ViewMode};
use crate::render::Renderer;
use crate::scene::Scene;

pub const TITLE: &str = "boxfield";

pub struct Engine {
    scene: Scene,
    renderer: Renderer,
    ctx: RenderContext,
    background: Color,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            scene: Scene::new(config.scene),
            renderer: Renderer::new(config.width, config.height),
            ctx: RenderContext::new(config.width, config.height, config.view_mode),
            background: Color::BACKGROUND,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn view_mode(&self) -> ViewMode {
        self.ctx.view_mode
    }

    /// Window title for the current view mode.
    pub fn title(&self) -> String {
        format!("{TITLE} - View Mode : {}", self.ctx.view_mode)
    }

    // ============ Commands ============

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.ctx.toggle_view_mode()
    }

    /// Rebuilds the scene with a fresh random seed.
    pub fn reset(&mut self) {
        self.scene.reset(None);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.ctx.resize(width, height);
    }

    // ============ Frame ============

    /// Applies input and advances the height field by one step.
    pub fn update(&mut self, input: &InputState) {
        self.scene.apply_input(input, &self.ctx);
        self.scene.update();
    }

    pub fn render(&mut self) {
        self.renderer.clear(self.background);
        self.scene.display(&self.ctx, &mut self.renderer);
        self.scene.late_update();
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    pub fn save_screenshot<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.renderer.save_image(path)
    }
}
