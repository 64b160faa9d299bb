//! Game state and core simulation types
//!
//! Everything the policies read or mutate lives here; the state is a plain
//! serializable snapshot with no engine handles.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{Color, generate_layout};
use crate::Rect;
use crate::config::GameConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting at its spawn point, waiting out the serve delay
    Serving,
    /// Active gameplay
    Playing,
    /// Ball left the viewport
    Lost,
}

/// Identifies a body the ball can collide with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BodyId {
    Paddle,
    Brick(u32),
}

/// Play-field bounds, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.width / 2.0, self.height / 2.0),
            Vec2::new(self.width, self.height),
        )
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed given at serve and reasserted by the walls
    pub base_speed: Vec2,
    pub color: Color,
    /// Bodies currently in contact (start seen, end not yet seen)
    #[serde(default)]
    pub contacts: BTreeSet<BodyId>,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, base_speed: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            base_speed,
            color: Color::Red,
            contacts: BTreeSet::new(),
        }
    }

    /// Bounding box of the ball
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Put the ball in motion at base speed
    pub fn serve(&mut self) {
        self.vel = self.base_speed;
    }

    pub fn is_touching(&self, body: BodyId) -> bool {
        self.contacts.contains(&body)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Paddle {
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Follow the pointer horizontally (no clamping)
    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }
}

/// A brick entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Brick {
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Complete game state (serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks, in layout order
    pub bricks: Vec<Brick>,
    /// Seconds to wait before the serve
    pub serve_delay: f32,
    /// Seconds of post-update time seen so far
    pub elapsed: f32,
    /// Post-update ticks seen so far
    pub time_ticks: u64,
    pub bricks_removed: u32,
    pub wall_bounces: u32,
    pub object_bounces: u32,
}

impl GameState {
    /// Build a fresh session: paddle, resting ball and the full brick grid
    pub fn new(config: &GameConfig) -> Self {
        let viewport = config.viewport;

        let paddle = Paddle {
            pos: Vec2::new(
                config.paddle.start_x,
                viewport.height - config.paddle.bottom_offset,
            ),
            size: Vec2::new(config.paddle.width, config.paddle.height),
            color: Color::Chartreuse,
        };

        let ball = Ball::new(config.ball.spawn, config.ball.radius, config.ball.base_speed);

        let bricks: Vec<Brick> = generate_layout(viewport.width, &config.layout)
            .into_iter()
            .zip(1u32..)
            .map(|(placement, id)| Brick {
                id,
                pos: placement.pos,
                size: placement.size,
                color: placement.color,
            })
            .collect();

        log::info!(
            "New session: {}x{} viewport, {} bricks",
            viewport.width,
            viewport.height,
            bricks.len()
        );

        Self {
            viewport,
            phase: GamePhase::Serving,
            ball,
            paddle,
            bricks,
            serve_delay: config.serve_delay_secs,
            elapsed: 0.0,
            time_ticks: 0,
            bricks_removed: 0,
            wall_bounces: 0,
            object_bounces: 0,
        }
    }

    /// Look up a live brick
    pub fn brick(&self, id: u32) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id == id)
    }

    /// Rectangle of a collidable body, if it is still in play
    pub fn body_rect(&self, body: BodyId) -> Option<Rect> {
        match body {
            BodyId::Paddle => Some(self.paddle.as_rect()),
            BodyId::Brick(id) => self.brick(id).map(Brick::as_rect),
        }
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }

    /// All bricks gone. Informational only: clearing the grid ends nothing.
    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Lost
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
