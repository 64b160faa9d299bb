//! Game-logic simulation module
//!
//! Everything that decides gameplay lives here. The host engine (or the
//! headless driver) owns integration, overlap detection and rendering, and
//! feeds this module one `HostEvent` at a time:
//! - No rendering or platform dependencies
//! - No timers or callbacks: the serve delay is an elapsed-time counter
//! - Stable iteration order (bricks kept in layout order)

pub mod bricks;
pub mod layout;
pub mod motion;
pub mod state;
pub mod tick;

pub use bricks::remove_brick;
pub use layout::{BrickPlacement, Color, LayoutParams, generate_layout};
pub use motion::{Axis, flip_axis, reflect_off_body, reflect_off_walls};
pub use state::{Ball, BodyId, Brick, GamePhase, GameState, Paddle, Viewport};
pub use tick::{GameEvent, HostEvent, step};
