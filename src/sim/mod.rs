//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per frame, velocities are per tick
//! - Seeded RNG only
//! - Countdown timing from accumulated frame time

pub mod collision;
pub mod gameplay;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BrickContact, BrickSide, WallContact};
pub use gameplay::{Gameplay, TickOutcome};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickColor, BrickField, Outcome, Paddle, Phase};
pub use tick::{Breakout, TickInput};
