//! Game configuration
//!
//! Every tunable lives here. Defaults reproduce the classic single-screen
//! layout; a JSON file may override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{LayoutParams, Viewport};

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `GameConfig`
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but make no playable game
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Paddle tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub start_x: f32,
    /// Distance from the bottom edge of the viewport to the paddle centre
    pub bottom_offset: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            start_x: PADDLE_START_X,
            bottom_offset: PADDLE_BOTTOM_OFFSET,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

/// Ball tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub spawn: Vec2,
    pub radius: f32,
    /// Velocity given at serve and reasserted on wall contact (px/s)
    pub base_speed: Vec2,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            radius: BALL_RADIUS,
            base_speed: Vec2::new(BALL_BASE_SPEED_X, BALL_BASE_SPEED_Y),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport: Viewport,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    /// Seconds the ball waits at its spawn point before the serve
    pub serve_delay_secs: f32,
    pub layout: LayoutParams,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            serve_delay_secs: SERVE_DELAY_SECS,
            layout: LayoutParams::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values that cannot produce a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if !(self.ball.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ball radius must be positive, got {}",
                self.ball.radius
            )));
        }
        if !(self.paddle.width > 0.0 && self.paddle.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "paddle size must be positive, got {}x{}",
                self.paddle.width, self.paddle.height
            )));
        }
        if !(self.layout.brick_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "brick height must be positive, got {}",
                self.layout.brick_height
            )));
        }
        let bricks = u64::from(self.layout.rows) * u64::from(self.layout.columns);
        if bricks > MAX_BRICKS {
            return Err(ConfigError::Invalid(format!(
                "brick grid {}x{} exceeds {} bricks",
                self.layout.rows, self.layout.columns, MAX_BRICKS
            )));
        }
        if self.layout.columns > 0 && !(self.layout.brick_width(self.viewport.width) > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{} columns leave no room for bricks in a {}px viewport",
                self.layout.columns, self.viewport.width
            )));
        }
        if self.layout.padding < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "brick padding must not be negative, got {}",
                self.layout.padding
            )));
        }
        if self.serve_delay_secs < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "serve delay must not be negative, got {}",
                self.serve_delay_secs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.viewport.width, 600.0);
        assert_eq!(config.viewport.height, 400.0);
        assert_eq!(config.ball.base_speed, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "serve_delay_secs": 2.5, "layout": { "rows": 4 } }"#)
            .expect("valid config");
        assert_eq!(config.serve_delay_secs, 2.5);
        assert_eq!(config.layout.rows, 4);
        assert_eq!(config.layout.columns, BRICK_COLUMNS);
        assert_eq!(config.ball, BallConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json(r#"{ "viewport": { "width": 0.0, "height": 400.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json(r#"{ "ball": { "radius": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = GameConfig::from_json(r#"{ "layout": { "rows": 65536, "columns": 65536 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_positive_brick_width_rejected() {
        // 600 / 30 - 20 - 20 / 30 < 0
        let err = GameConfig::from_json(r#"{ "layout": { "columns": 30 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        // No columns means no bricks, which is still a valid arena
        assert!(GameConfig::from_json(r#"{ "layout": { "columns": 0 } }"#).is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/brick-breaker.json");
        assert!(matches!(GameConfig::load(path), Err(ConfigError::Io(_))));
        assert_eq!(GameConfig::load_or_default(Some(path)), GameConfig::default());
    }
}
