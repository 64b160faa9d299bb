//! Platform abstraction layer
//!
//! Surfaces session outcomes to the player. On native builds the loss is
//! printed to stderr in place of the browser's modal alert.

use crate::sim::GameState;

/// Text shown when the ball is lost
pub const LOSS_MESSAGE: &str = "You lose!";

/// Full loss notice including how far the player got
pub fn loss_message(state: &GameState) -> String {
    format!(
        "{} ({} of {} bricks cleared)",
        LOSS_MESSAGE,
        state.bricks_removed,
        state.bricks_removed as usize + state.bricks_remaining()
    )
}

/// Tell the player the session is over
pub fn notify_loss(state: &GameState) {
    let message = loss_message(state);
    log::warn!("{}", message);
    eprintln!("{}", message);
}
