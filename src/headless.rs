//! Headless host driver
//!
//! A deterministic stand-in for the host engine's event dispatch, used by the
//! binary and end-to-end tests. Each frame it samples the pointer, integrates
//! the ball, and reports overlaps and viewport exit as `HostEvent`s. It does
//! not resolve collisions: the ball is a passive body, so every velocity
//! change comes from the game policies.

use std::collections::BTreeSet;

use glam::Vec2;

use crate::Rect;
use crate::sim::{BodyId, GameEvent, GameState, HostEvent, step};

/// Overlap between the ball and a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit direction the ball must move to separate
    pub normal: Vec2,
    /// Overlap depth along `normal`
    pub penetration: f32,
}

impl Contact {
    /// Minimum translation vector
    pub fn mtv(&self) -> Vec2 {
        self.normal * self.penetration
    }
}

/// Check a circle against an axis-aligned rectangle
pub fn circle_rect_contact(center: Vec2, radius: f32, rect: &Rect) -> Option<Contact> {
    let (min, max) = (rect.min(), rect.max());
    let closest = center.clamp(min, max);
    let offset = center - closest;
    let dist = offset.length();

    if dist > 0.0 {
        if dist >= radius {
            return None;
        }
        return Some(Contact {
            normal: offset / dist,
            penetration: radius - dist,
        });
    }

    // Centre inside the rectangle: leave through the nearest side
    let to_left = center.x - min.x;
    let to_right = max.x - center.x;
    let to_top = center.y - min.y;
    let to_bottom = max.y - center.y;

    let (normal, depth) = [
        (Vec2::NEG_X, to_left),
        (Vec2::X, to_right),
        (Vec2::NEG_Y, to_top),
        (Vec2::Y, to_bottom),
    ]
    .into_iter()
    .fold((Vec2::NEG_Y, f32::INFINITY), |best, side| {
        if side.1 < best.1 { side } else { best }
    });

    Some(Contact {
        normal,
        penetration: depth + radius,
    })
}

/// Pointer that follows the ball (demo autopilot)
pub fn track_ball(state: &GameState) -> f32 {
    state.ball.pos.x
}

/// Frame driver owning one session
#[derive(Debug, Clone)]
pub struct Headless {
    pub state: GameState,
    /// Bodies overlapping the ball as of the last frame
    overlaps: BTreeSet<BodyId>,
}

impl Headless {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            overlaps: BTreeSet::new(),
        }
    }

    /// Run one frame: input, integration, post-update, contacts, viewport exit
    pub fn frame(&mut self, dt: f32, pointer_x: Option<f32>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.is_over() {
            return events;
        }

        if let Some(x) = pointer_x {
            events.extend(step(&mut self.state, &HostEvent::PointerMove { x }));
        }

        let vel = self.state.ball.vel;
        self.state.ball.pos += vel * dt;

        events.extend(step(&mut self.state, &HostEvent::PostUpdate { dt }));

        for host_event in self.detect_contacts() {
            events.extend(step(&mut self.state, &host_event));
        }

        // Exit ends the session, so the early return above keeps this one-shot
        if self
            .state
            .viewport
            .as_rect()
            .is_disjoint(&self.state.ball.bounds())
        {
            events.extend(step(&mut self.state, &HostEvent::ExitViewport));
        }

        events
    }

    /// Diff current overlaps against the previous frame
    fn detect_contacts(&mut self) -> Vec<HostEvent> {
        let ball = &self.state.ball;

        let bodies = std::iter::once(BodyId::Paddle)
            .chain(self.state.bricks.iter().map(|b| BodyId::Brick(b.id)));

        let mut current = BTreeSet::new();
        let mut starts = Vec::new();
        for body in bodies {
            let Some(rect) = self.state.body_rect(body) else {
                continue;
            };
            if let Some(contact) = circle_rect_contact(ball.pos, ball.radius, &rect) {
                current.insert(body);
                if !self.overlaps.contains(&body) {
                    starts.push(HostEvent::CollisionStart {
                        other: body,
                        mtv: contact.mtv(),
                    });
                }
            }
        }

        // Removed bricks no longer overlap, so their contacts end here too
        let mut host_events: Vec<HostEvent> = self
            .overlaps
            .difference(&current)
            .map(|&other| HostEvent::CollisionEnd { other })
            .collect();
        host_events.extend(starts);

        self.overlaps = current;
        host_events
    }
}
