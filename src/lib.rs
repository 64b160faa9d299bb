//! Brick Breaker - single-screen breakout game logic
//!
//! Core modules:
//! - `sim`: Game-logic policies (brick layout, ball reflection, brick lifecycle, loss)
//! - `headless`: Deterministic stand-in for the host engine's event dispatch
//! - `config`: Tunables with JSON loading
//! - `platform`: Native/browser differences (loss notification)

pub mod config;
pub mod headless;
pub mod platform;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use headless::Headless;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Longest headless session the binary will run
    pub const DEMO_MAX_SECS: f32 = 120.0;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 600.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;

    /// Paddle defaults - sits 40px above the bottom edge
    pub const PADDLE_START_X: f32 = 150.0;
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;

    /// Ball defaults
    pub const BALL_SPAWN_X: f32 = 100.0;
    pub const BALL_SPAWN_Y: f32 = 300.0;
    pub const BALL_RADIUS: f32 = 10.0;
    /// Velocity assigned at serve and reasserted on wall contact (px/s)
    pub const BALL_BASE_SPEED_X: f32 = 100.0;
    pub const BALL_BASE_SPEED_Y: f32 = 100.0;
    /// Seconds between session start and serve
    pub const SERVE_DELAY_SECS: f32 = 1.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_PADDING: f32 = 20.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_X_OFFSET: f32 = 65.0;
    pub const BRICK_Y_OFFSET: f32 = 20.0;
    /// Largest brick grid a config may ask for
    pub const MAX_BRICKS: u64 = 1024;
}

/// Axis-aligned rectangle given by centre and full size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }

    /// True when the two rectangles share no area at all
    pub fn is_disjoint(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_max.x < b_min.x || a_min.x > b_max.x || a_max.y < b_min.y || a_min.y > b_max.y
    }
}
