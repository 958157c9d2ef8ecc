//! The box grid and the noise-driven height field.
//!
//! Boxes are stored in one flat list, x outermost, then y, then z. Every
//! command (rotation, translation, per-frame update, draw) iterates that list
//! uniformly; [`Scene::index`] gives the grid view on top of it.

use std::f32::consts::{FRAC_PI_4, PI};

use crate::colors::Color;
use crate::config::{GridSize, SceneConfig};
use crate::cuboid::Cuboid;
use crate::input::InputState;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::noise_field::{self, map_range, NoiseFactors};
use crate::projection::RenderContext;
use crate::render::Surface;

/// Shift applied to every box's z so no vertex sits exactly on a projection
/// boundary.
pub const Z_EPSILON: f32 = 0.0001;

/// Isometric-style starting orientation shared by every box.
pub fn initial_rotation() -> Vec3 {
    Vec3::new(FRAC_PI_4, -(1.0 / 2f32.sqrt()).atan(), 0.0)
}

pub struct Scene {
    config: SceneConfig,
    factors: NoiseFactors,
    noise: Vec<f32>,
    noise_min: f32,
    noise_max: f32,
    boxes: Vec<Cuboid>,
    offset: f32,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let mut scene = Self {
            config,
            factors: NoiseFactors::default(),
            noise: Vec::new(),
            noise_min: 0.0,
            noise_max: 0.0,
            boxes: Vec::with_capacity(config.grid.count()),
            offset: 0.0,
        };
        scene.reset(config.seed);
        scene
    }

    /// Rebuilds the grid and regenerates the noise. `None` draws a new
    /// random seed.
    pub fn reset(&mut self, seed: Option<u32>) {
        self.factors = match seed {
            Some(seed) => NoiseFactors {
                seed,
                ..NoiseFactors::default()
            },
            None => NoiseFactors::with_random_seed(),
        };
        self.noise = noise_field::generate(&self.factors);
        self.noise_min = noise_field::min(&self.noise);
        self.noise_max = noise_field::max(&self.noise);
        self.offset = 0.0;

        let GridSize { x: cx, y: cy, z: cz } = self.config.grid;
        let rotation = initial_rotation();
        self.boxes.clear();
        for x in 0..cx {
            for y in 0..cy {
                for z in 0..cz {
                    let cuboid = Cuboid::new(
                        self.cell_position(x, y, z),
                        self.config.box_size,
                        rotation,
                        self.cell_color(x, y, z),
                        self.config.kind,
                    );
                    self.boxes.push(cuboid);
                }
            }
        }
    }

    // ============ Grid ============

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Flat index of cell (x, y, z).
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        let GridSize { y: cy, z: cz, .. } = self.config.grid;
        (x * cy + y) * cz + z
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&Cuboid> {
        let grid = self.config.grid;
        if x < grid.x && y < grid.y && z < grid.z {
            self.boxes.get(self.index(x, y, z))
        } else {
            None
        }
    }

    pub fn boxes(&self) -> &[Cuboid] {
        &self.boxes
    }

    fn cell_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
        let grid = self.config.grid;
        let size = self.config.box_size;
        let axis = |i: usize, count: usize, edge: f32| i as f32 * edge - (count as f32 - 1.0) * edge * 0.5;
        Vec3::new(
            axis(x, grid.x, size.x),
            axis(y, grid.y, size.y),
            axis(z, grid.z, size.z) + Z_EPSILON,
        )
    }

    fn cell_color(&self, x: usize, y: usize, z: usize) -> Color {
        let grid = self.config.grid;
        let tint = |i: usize, count: usize, base: f32| {
            (map_range(i as f32, 0.0, count as f32, 0.0, 30.0) + base).clamp(0.0, 255.0) as u8
        };
        Color::rgb(tint(x, grid.x, 150.0), tint(y, grid.y, 50.0), tint(z, grid.z, 30.0))
    }

    // ============ Noise ============

    pub fn noise(&self) -> &[f32] {
        &self.noise
    }

    pub fn noise_factors(&self) -> &NoiseFactors {
        &self.factors
    }

    /// Current scroll position into the noise sequence.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Noise sample at `index`, wrapped into the sequence.
    fn sample(&self, index: usize) -> f32 {
        if self.noise.is_empty() {
            return 0.0;
        }
        self.noise[index % self.noise.len()]
    }

    /// Height of cell (x, z) for the current scroll offset.
    pub fn cell_height(&self, x: usize, z: usize) -> f32 {
        let grid = self.config.grid;
        let center = Vec2::new(grid.x as f32 * 0.5, grid.z as f32 * 0.5);
        let cell = Vec2::new(x as f32 + 0.5, z as f32 + 0.5);
        let ripple = map_range(
            cell.distance(center),
            0.0,
            center.distance(Vec2::ZERO),
            0.0,
            self.config.ripple_spread,
        );
        let value = self.sample((self.offset + ripple) as usize);
        let unit = map_range(value, self.noise_min, self.noise_max, -1.0, 1.0);
        self.config.base_height + self.config.height_amplitude * unit
    }

    fn advance_offset(&mut self) {
        let step = self.factors.interval as f32;
        if self.offset <= self.factors.size as f32 - step * 1.01 {
            self.offset += step;
        } else {
            self.offset = 0.0;
        }
    }

    // ============ Frame ============

    /// Applies one frame of sampled input to every box.
    pub fn apply_input(&mut self, input: &InputState, ctx: &RenderContext) {
        let rotation = input.rotation_delta();
        let translation = input.translation_delta();
        let drag = input.mouse_drag.map(|(mx, my)| {
            (
                map_range(mx as f32, 0.0, ctx.width() as f32, PI, -PI),
                map_range(my as f32, 0.0, ctx.height() as f32, PI, -PI),
            )
        });

        for cuboid in &mut self.boxes {
            cuboid.rotate(rotation);
            cuboid.translate(translation);
            if let Some((rx, ry)) = drag {
                let current = cuboid.rotation();
                cuboid.set_rotation(Vec3::new(rx, ry, current.z));
            }
        }
    }

    /// Updates heights from the noise, recomputes vertices and scrolls.
    pub fn update(&mut self) {
        let GridSize { x: cx, y: cy, z: cz } = self.config.grid;
        for x in 0..cx {
            for z in 0..cz {
                let height = self.cell_height(x, z);
                for y in 0..cy {
                    let index = self.index(x, y, z);
                    let cuboid = &mut self.boxes[index];
                    let footprint = cuboid.size();
                    cuboid.set_size(Vec3::new(footprint.x, height, footprint.z));
                }
            }
        }
        for cuboid in &mut self.boxes {
            cuboid.update();
        }
        self.advance_offset();
    }

    /// Draws every box in list order, then the noise trace.
    pub fn display<S: Surface + ?Sized>(&self, ctx: &RenderContext, surface: &mut S) {
        for cuboid in &self.boxes {
            cuboid.display(ctx, surface);
        }
        if self.config.show_noise_trace {
            self.draw_noise_trace(ctx, surface);
        }
    }

    fn draw_noise_trace<S: Surface + ?Sized>(&self, ctx: &RenderContext, surface: &mut S) {
        let size = self.noise.len();
        if size < 2 {
            return;
        }
        let w = ctx.width() as f32;
        let h = ctx.height() as f32;
        let start = self.offset as usize;
        let point = |i: usize| {
            Vec2::new(
                map_range(i as f32, 0.0, size as f32, 0.0, w),
                map_range(self.sample(start + i), self.noise_min, self.noise_max, -h / 4.0, h / 4.0) + h / 2.0,
            )
        };
        for i in 1..size {
            surface.draw_line(point(i - 1), point(i), Color::WHITE);
        }
    }

    pub fn late_update(&mut self) {
        for cuboid in &mut self.boxes {
            cuboid.late_update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ViewMode;
    use crate::render::{DrawCommand, DrawList};
    use approx::assert_relative_eq;

    fn seeded(config: SceneConfig) -> Scene {
        Scene::new(SceneConfig {
            seed: Some(11),
            ..config
        })
    }

    #[test]
    fn default_grid_has_four_hundred_boxes() {
        let scene = seeded(SceneConfig::default());
        assert_eq!(scene.len(), 400);
        assert_eq!(scene.index(19, 0, 19), 399);
        assert!(scene.get(20, 0, 0).is_none());
    }

    #[test]
    fn positions_are_symmetric_about_origin() {
        let scene = seeded(SceneConfig::default());
        let first = scene.get(0, 0, 0).unwrap().position();
        let last = scene.get(19, 0, 19).unwrap().position();
        assert_relative_eq!(first.x, -114.0);
        assert_relative_eq!(last.x, 114.0);
        assert_relative_eq!(first.y, 0.0);
        assert_relative_eq!(first.z, -114.0 + Z_EPSILON);
        assert_relative_eq!(last.z, 114.0 + Z_EPSILON);
    }

    #[test]
    fn colors_tint_along_axes() {
        let scene = seeded(SceneConfig::default());
        assert_eq!(scene.get(0, 0, 0).unwrap().fill_color(), Color::rgb(150, 50, 30));
        assert_eq!(scene.get(10, 0, 10).unwrap().fill_color(), Color::rgb(165, 50, 45));
    }

    #[test]
    fn offset_scrolls_and_wraps() {
        let mut scene = seeded(SceneConfig::default());
        scene.update();
        assert_eq!(scene.offset(), 10.0);

        // 800 - 10.1 is the last offset that still advances.
        for _ in 0..78 {
            scene.update();
        }
        assert_eq!(scene.offset(), 790.0);
        scene.update();
        assert_eq!(scene.offset(), 0.0);
    }

    #[test]
    fn heights_stay_within_amplitude() {
        let mut scene = seeded(SceneConfig::default());
        scene.update();
        for cuboid in scene.boxes() {
            let h = cuboid.size().y;
            assert!((90.0 - 1e-3..=270.0 + 1e-3).contains(&h), "height {h}");
            assert_eq!(cuboid.size().x, 12.0);
        }
    }

    #[test]
    fn rotation_key_turns_every_box() {
        let mut scene = seeded(SceneConfig::default());
        let ctx = RenderContext::new(800, 600, ViewMode::Perspective);
        let before = initial_rotation();
        let input = InputState {
            rotate_y_pos: true,
            ..InputState::default()
        };
        scene.apply_input(&input, &ctx);
        for cuboid in scene.boxes() {
            assert_relative_eq!(cuboid.rotation().y, before.y + 0.05);
            assert_relative_eq!(cuboid.rotation().x, before.x);
        }
    }

    #[test]
    fn mouse_drag_sets_rotation_from_cursor() {
        let mut scene = seeded(SceneConfig::default());
        let ctx = RenderContext::new(800, 600, ViewMode::Perspective);
        let input = InputState {
            mouse_drag: Some((0, 300)),
            rotate_z_pos: true,
            ..InputState::default()
        };
        scene.apply_input(&input, &ctx);
        let rotation = scene.boxes()[0].rotation();
        assert_relative_eq!(rotation.x, PI);
        assert_relative_eq!(rotation.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotation.z, 0.05);
    }

    #[test]
    fn display_draws_boxes_then_trace() {
        let scene = seeded(SceneConfig {
            grid: GridSize { x: 2, y: 1, z: 2 },
            ..SceneConfig::default()
        });
        let ctx = RenderContext::new(800, 600, ViewMode::Perspective);
        let mut list = DrawList::new();
        scene.display(&ctx, &mut list);

        assert_eq!(list.faces().count(), 4 * 6);
        assert_eq!(list.len(), 4 * 6 + 799);
        assert!(matches!(list.commands()[24], DrawCommand::Line { color: Color::WHITE, .. }));
    }

    #[test]
    fn trace_can_be_hidden() {
        let scene = seeded(SceneConfig {
            grid: GridSize { x: 1, y: 1, z: 1 },
            show_noise_trace: false,
            ..SceneConfig::default()
        });
        let ctx = RenderContext::new(800, 600, ViewMode::Orthographic);
        let mut list = DrawList::new();
        scene.display(&ctx, &mut list);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn reset_with_seed_is_reproducible() {
        let mut a = seeded(SceneConfig::default());
        let b = seeded(SceneConfig::default());
        a.update();
        a.reset(Some(11));
        assert_eq!(a.offset(), 0.0);
        assert_eq!(a.noise(), b.noise());
        assert_eq!(a.boxes(), b.boxes());
    }
}
