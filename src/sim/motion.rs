//! Ball motion policy
//!
//! Two independent rules change the ball's velocity:
//! - Walls (left, right, top) assign the base speed on the relevant axis,
//!   pointing back into the arena. The bottom edge is open.
//! - Bodies (paddle, bricks) flip the velocity component along the dominant
//!   axis of the contact's minimum translation vector, once per contact.

use glam::Vec2;

use super::state::{Ball, BodyId, Viewport};

/// Axis along which a contact reverses the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Push the ball back inside the left, right and top edges.
///
/// Assigns `±base_speed` rather than negating, so the result does not
/// depend on the prior sign. Returns true if the velocity changed.
pub fn reflect_off_walls(ball: &mut Ball, viewport: &Viewport) -> bool {
    let before = ball.vel;

    if ball.pos.x - ball.radius < 0.0 {
        ball.vel.x = ball.base_speed.x;
    }
    if ball.pos.x + ball.radius > viewport.width {
        ball.vel.x = -ball.base_speed.x;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = ball.base_speed.y;
    }

    ball.vel != before
}

/// Dominant axis of a minimum translation vector.
///
/// Ties (including a zero vector) resolve to `Y`.
pub fn flip_axis(mtv: Vec2) -> Axis {
    let dir = mtv.normalize_or_zero();
    if dir.x.abs() > dir.y.abs() {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Reverse the ball off a body on contact start.
///
/// Only the first start of a contact flips; repeats before the matching
/// `end_contact` are ignored. Contacts with different bodies are tracked
/// separately, so simultaneous hits each get their flip.
pub fn reflect_off_body(ball: &mut Ball, other: BodyId, mtv: Vec2) -> Option<Axis> {
    if !ball.contacts.insert(other) {
        return None;
    }

    let axis = flip_axis(mtv);
    match axis {
        Axis::X => ball.vel.x = -ball.vel.x,
        Axis::Y => ball.vel.y = -ball.vel.y,
    }
    Some(axis)
}

/// Forget a contact once the bodies separate. Returns false if it was not active.
pub fn end_contact(ball: &mut Ball, other: BodyId) -> bool {
    ball.contacts.remove(&other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEWPORT: Viewport = Viewport {
        width: 600.0,
        height: 400.0,
    };

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), 10.0, Vec2::new(100.0, 100.0));
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_left_wall_forces_rightward() {
        let mut ball = ball_at(5.0, 200.0, Vec2::new(-100.0, 100.0));
        assert!(reflect_off_walls(&mut ball, &VIEWPORT));
        assert_eq!(ball.vel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_right_wall_forces_leftward() {
        let mut ball = ball_at(595.0, 200.0, Vec2::new(100.0, 100.0));
        assert!(reflect_off_walls(&mut ball, &VIEWPORT));
        assert_eq!(ball.vel.x, -100.0);
    }

    #[test]
    fn test_wall_assigns_not_toggles() {
        // Already moving right at the left wall: still rightward afterwards
        let mut ball = ball_at(5.0, 200.0, Vec2::new(100.0, -100.0));
        assert!(!reflect_off_walls(&mut ball, &VIEWPORT));
        assert_eq!(ball.vel, Vec2::new(100.0, -100.0));

        // A boosted speed is reset to base on contact
        let mut ball = ball_at(5.0, 200.0, Vec2::new(-250.0, -100.0));
        reflect_off_walls(&mut ball, &VIEWPORT);
        assert_eq!(ball.vel.x, 100.0);
    }

    #[test]
    fn test_top_wall_forces_downward() {
        let mut ball = ball_at(300.0, 4.0, Vec2::new(100.0, -100.0));
        reflect_off_walls(&mut ball, &VIEWPORT);
        assert_eq!(ball.vel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_bottom_edge_is_open() {
        let mut ball = ball_at(300.0, 399.0, Vec2::new(100.0, 100.0));
        assert!(!reflect_off_walls(&mut ball, &VIEWPORT));
        assert_eq!(ball.vel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_flip_axis() {
        assert_eq!(flip_axis(Vec2::new(0.9, 0.1)), Axis::X);
        assert_eq!(flip_axis(Vec2::new(-0.2, 3.0)), Axis::Y);
        assert_eq!(flip_axis(Vec2::new(1.0, -1.0)), Axis::Y);
        assert_eq!(flip_axis(Vec2::ZERO), Axis::Y);
    }

    #[test]
    fn test_body_reflection_once_per_contact() {
        let mut ball = ball_at(300.0, 200.0, Vec2::new(100.0, 100.0));
        let brick = BodyId::Brick(1);

        assert_eq!(
            reflect_off_body(&mut ball, brick, Vec2::new(0.9, 0.1)),
            Some(Axis::X)
        );
        assert_eq!(ball.vel, Vec2::new(-100.0, 100.0));

        // Same contact reported again before it ends
        assert_eq!(reflect_off_body(&mut ball, brick, Vec2::new(0.9, 0.1)), None);
        assert_eq!(ball.vel, Vec2::new(-100.0, 100.0));

        // After the contact ends a new one flips again
        assert!(end_contact(&mut ball, brick));
        assert!(!end_contact(&mut ball, brick));
        reflect_off_body(&mut ball, brick, Vec2::new(0.9, 0.1));
        assert_eq!(ball.vel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_simultaneous_contacts_each_flip() {
        let mut ball = ball_at(300.0, 200.0, Vec2::new(100.0, 100.0));

        reflect_off_body(&mut ball, BodyId::Brick(1), Vec2::new(0.0, -5.0));
        reflect_off_body(&mut ball, BodyId::Brick(2), Vec2::new(4.0, 0.0));

        assert_eq!(ball.vel, Vec2::new(-100.0, -100.0));
        assert_eq!(ball.contacts.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_left_breach_sets_positive_base(x in -50.0f32..9.99, vx in -500.0f32..500.0) {
            let mut ball = ball_at(x, 200.0, Vec2::new(vx, 50.0));
            reflect_off_walls(&mut ball, &VIEWPORT);
            prop_assert_eq!(ball.vel.x, 100.0);
        }

        #[test]
        fn prop_right_breach_sets_negative_base(x in 590.01f32..700.0, vx in -500.0f32..500.0) {
            let mut ball = ball_at(x, 200.0, Vec2::new(vx, 50.0));
            reflect_off_walls(&mut ball, &VIEWPORT);
            prop_assert_eq!(ball.vel.x, -100.0);
        }

        #[test]
        fn prop_top_breach_sets_positive_base(y in -50.0f32..9.99, vy in -500.0f32..500.0) {
            let mut ball = ball_at(300.0, y, Vec2::new(50.0, vy));
            reflect_off_walls(&mut ball, &VIEWPORT);
            prop_assert_eq!(ball.vel.y, 100.0);
        }

        #[test]
        fn prop_bottom_never_corrected(y in 10.0f32..1000.0, vy in -500.0f32..500.0) {
            let mut ball = ball_at(300.0, y, Vec2::new(50.0, vy));
            reflect_off_walls(&mut ball, &VIEWPORT);
            prop_assert_eq!(ball.vel.y, vy);
        }

        #[test]
        fn prop_repeat_start_is_idempotent(mx in -10.0f32..10.0, my in -10.0f32..10.0) {
            let mut ball = ball_at(300.0, 200.0, Vec2::new(100.0, 100.0));
            reflect_off_body(&mut ball, BodyId::Paddle, Vec2::new(mx, my));
            let after_first = ball.vel;
            reflect_off_body(&mut ball, BodyId::Paddle, Vec2::new(mx, my));
            prop_assert_eq!(ball.vel, after_first);
        }
    }
}
