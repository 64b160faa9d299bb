//! Brick lifecycle
//!
//! A brick is live until the ball first touches it, then it is gone for good.

use super::state::{BodyId, Brick};

/// Remove a brick from the live set on contact.
///
/// Returns the removed brick so the host can deregister it. Bodies that are
/// not live bricks (the paddle, or a brick already removed) leave the set
/// untouched and return `None`.
pub fn remove_brick(bricks: &mut Vec<Brick>, other: BodyId) -> Option<Brick> {
    let BodyId::Brick(id) = other else {
        return None;
    };
    let idx = bricks.iter().position(|b| b.id == id)?;
    // `remove` keeps the remaining bricks in layout order
    Some(bricks.remove(idx))
}
