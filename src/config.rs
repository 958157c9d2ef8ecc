//! Startup configuration.
//!
//! [`Args`] is the command line; [`Args::to_config`] validates it into an
//! [`EngineConfig`]. Defaults reproduce the classic 20 x 1 x 20 height field.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;
use crate::face::PrimitiveKind;
use crate::math::vec3::Vec3;
use crate::projection::ViewMode;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FPS: u32 = 30;

/// Number of boxes along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridSize {
    pub fn count(&self) -> usize {
        self.x * self.y * self.z
    }
}

/// Layout and height-field parameters of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub grid: GridSize,
    /// Footprint of every box; the vertical component is overridden by the
    /// height field each frame.
    pub box_size: Vec3,
    pub kind: PrimitiveKind,
    /// Noise seed; `None` draws a random one on every (re)initialisation.
    pub seed: Option<u32>,
    /// Height at the noise midpoint.
    pub base_height: f32,
    /// Height swing above and below `base_height`.
    pub height_amplitude: f32,
    /// Noise index spread from the grid center to its corner.
    pub ripple_spread: f32,
    pub show_noise_trace: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid: GridSize { x: 20, y: 1, z: 20 },
            box_size: Vec3::new(12.0, 12.0, 12.0),
            kind: PrimitiveKind::Filled,
            seed: None,
            base_height: 180.0,
            height_amplitude: 90.0,
            ripple_spread: 1000.0,
            show_noise_trace: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub view_mode: ViewMode,
    pub scene: SceneConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            view_mode: ViewMode::default(),
            scene: SceneConfig::default(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Painter's-algorithm box field rendered with 2D primitives")]
pub struct Args {
    /// Window width in pixels.
    #[arg(long, short = 'W', default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Window height in pixels.
    #[arg(long, short = 'H', default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Frame rate limit.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Boxes along X.
    #[arg(long, default_value_t = 20)]
    pub grid_x: usize,

    /// Boxes along Y.
    #[arg(long, default_value_t = 1)]
    pub grid_y: usize,

    /// Boxes along Z.
    #[arg(long, default_value_t = 20)]
    pub grid_z: usize,

    /// Edge length of a box footprint.
    #[arg(long, default_value_t = 12.0)]
    pub box_size: f32,

    /// Noise seed (random when omitted).
    #[arg(long)]
    pub seed: Option<u32>,

    /// Start in orthographic view.
    #[arg(long)]
    pub orthographic: bool,

    /// Draw faces as outlines instead of filled quads.
    #[arg(long)]
    pub outline: bool,

    /// Hide the scrolling noise trace.
    #[arg(long)]
    pub no_trace: bool,

    /// Render this many frames without a window and save the last one.
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u32>,

    /// Output image for headless mode.
    #[arg(long, default_value = "boxfield.png")]
    pub output: PathBuf,
}

impl Args {
    pub fn to_config(&self) -> Result<EngineConfig, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(Error::InvalidConfig(format!(
                "window size {}x{} is too large",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(Error::InvalidConfig("fps must be positive".to_string()));
        }
        if self.grid_x == 0 || self.grid_y == 0 || self.grid_z == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must have at least one box per axis, got {}x{}x{}",
                self.grid_x, self.grid_y, self.grid_z
            )));
        }
        if !(self.box_size.is_finite() && self.box_size > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "box size must be a positive number, got {}",
                self.box_size
            )));
        }

        Ok(EngineConfig {
            width: self.width,
            height: self.height,
            fps: self.fps,
            view_mode: if self.orthographic {
                ViewMode::Orthographic
            } else {
                ViewMode::Perspective
            },
            scene: SceneConfig {
                grid: GridSize {
                    x: self.grid_x,
                    y: self.grid_y,
                    z: self.grid_z,
                },
                box_size: Vec3::new(self.box_size, self.box_size, self.box_size),
                kind: if self.outline {
                    PrimitiveKind::Outline
                } else {
                    PrimitiveKind::Filled
                },
                seed: self.seed,
                show_noise_trace: !self.no_trace,
                ..SceneConfig::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("boxfield").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_default_config() {
        let config = parse(&[]).to_config().unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.scene.grid.count(), 400);
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&["--orthographic", "--outline", "--seed", "9", "--grid-x", "4"])
            .to_config()
            .unwrap();
        assert_eq!(config.view_mode, ViewMode::Orthographic);
        assert_eq!(config.scene.kind, PrimitiveKind::Outline);
        assert_eq!(config.scene.seed, Some(9));
        assert_eq!(config.scene.grid.x, 4);
    }

    #[test]
    fn rejects_empty_grid() {
        let err = parse(&["--grid-z", "0"]).to_config().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_window_size_that_overflows() {
        let err = parse(&["--width", "70000", "--height", "70000"]).to_config().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(parse(&["--width", "4096", "--height", "4096"]).to_config().is_ok());
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(parse(&["--fps", "0"]).to_config().is_err());
    }
}
