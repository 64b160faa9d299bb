//! Event-driven game step
//!
//! The host engine reports what happened (a physics tick finished, two
//! bodies touched, the ball left the screen) and `step` applies the game
//! policies to the state, returning what the host must act on.

use glam::Vec2;

use super::bricks::remove_brick;
use super::motion::{Axis, end_contact, reflect_off_body, reflect_off_walls};
use super::state::{BodyId, GamePhase, GameState};

/// Slack on the serve threshold so summed `f32` timesteps that land a hair
/// under it (60 x 1/60 < 1.0) still serve on the expected tick
const SERVE_TOLERANCE: f32 = 1e-4;

/// Notifications delivered by the host engine, in frame order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to world-space x
    PointerMove { x: f32 },
    /// Physics integration for this frame is done
    PostUpdate { dt: f32 },
    /// Ball started touching `other`; `mtv` separates the two shapes
    CollisionStart { other: BodyId, mtv: Vec2 },
    /// Ball stopped touching `other`
    CollisionEnd { other: BodyId },
    /// Ball is entirely outside the visible play area
    ExitViewport,
}

/// Outcomes the host reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Serve delay elapsed, ball launched
    Served { vel: Vec2 },
    /// A wall corrected the ball's velocity
    WallBounce { vel: Vec2 },
    /// The ball reversed off a body
    Bounce { other: BodyId, axis: Axis },
    /// Brick left play; the host should deregister its entity
    BrickRemoved { id: u32 },
    /// Session over
    Lost,
}

/// Apply one host event to the game state
pub fn step(state: &mut GameState, event: &HostEvent) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Nothing moves once the session is lost
    if state.phase == GamePhase::Lost {
        return events;
    }

    match *event {
        HostEvent::PointerMove { x } => {
            state.paddle.set_x(x);
        }

        HostEvent::PostUpdate { dt } => {
            state.time_ticks += 1;
            state.elapsed += dt;

            if state.phase == GamePhase::Serving
                && state.elapsed + SERVE_TOLERANCE >= state.serve_delay
            {
                state.ball.serve();
                state.phase = GamePhase::Playing;
                log::info!("Ball served at {:?} after {:.2}s", state.ball.vel, state.elapsed);
                events.push(GameEvent::Served {
                    vel: state.ball.vel,
                });
            }

            if reflect_off_walls(&mut state.ball, &state.viewport) {
                state.wall_bounces += 1;
                events.push(GameEvent::WallBounce {
                    vel: state.ball.vel,
                });
            }
        }

        HostEvent::CollisionStart { other, mtv } => {
            if let Some(brick) = remove_brick(&mut state.bricks, other) {
                state.bricks_removed += 1;
                log::debug!(
                    "Brick {} removed ({} remaining)",
                    brick.id,
                    state.bricks.len()
                );
                events.push(GameEvent::BrickRemoved { id: brick.id });
            }

            if let Some(axis) = reflect_off_body(&mut state.ball, other, mtv) {
                state.object_bounces += 1;
                log::debug!("Bounce off {:?} along {:?} -> {:?}", other, axis, state.ball.vel);
                events.push(GameEvent::Bounce { other, axis });
            }
        }

        HostEvent::CollisionEnd { other } => {
            end_contact(&mut state.ball, other);
        }

        HostEvent::ExitViewport => {
            state.phase = GamePhase::Lost;
            log::info!(
                "Ball left the viewport at {:?} - {} bricks cleared, {} remaining",
                state.ball.pos,
                state.bricks_removed,
                state.bricks.len()
            );
            events.push(GameEvent::Lost);
        }
    }

    events
}
