//! Breakout - a classic ball-and-paddle brick breaker
//!
//! Core modules:
//! - `sim`: Per-frame simulation (ball, paddle, bricks, session state machine)
//! - `renderer`: Draw lists and CPU tessellation for a host renderer

pub mod renderer;
pub mod sim;

pub use renderer::{DrawCommand, DrawList, DrawTarget};
pub use sim::{Breakout, Phase, TickInput};

/// Game configuration constants
///
/// Coordinates are y-up: `y = 0` is the bottom of the playfield.
pub mod consts {
    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 480.0;
    pub const GAME_HEIGHT: f32 = 620.0;

    /// Paddle defaults - rides along the bottom of the playfield
    pub const PADDLE_WIDTH: f32 = 58.0;
    pub const PADDLE_HEIGHT: f32 = 11.0;
    /// Distance from the bottom edge to the paddle's lower edge
    pub const PADDLE_OFFSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 18.0;
    /// Vertical speed at serve (per tick, negative is downward)
    pub const BALL_START_VY: f32 = -5.0;
    /// Range the serve's horizontal speed magnitude is drawn from
    pub const BALL_MIN_VX: f32 = 1.0;
    pub const BALL_MAX_VX: f32 = 5.0;

    /// Brick grid
    pub const BRICK_ROWS: usize = 10;
    pub const BRICKS_IN_ROW: usize = 10;
    pub const BRICK_SEP_H: f32 = 5.0;
    pub const BRICK_SEP_V: f32 = 4.0;
    pub const BRICK_HEIGHT: f32 = 8.0;
    pub const BRICK_WIDTH: f32 =
        (GAME_WIDTH - BRICK_SEP_H * BRICKS_IN_ROW as f32) / BRICKS_IN_ROW as f32;
    /// Gap between the top of the playfield and the top row
    pub const BRICK_Y_OFFSET: f32 = 70.0;

    /// Tries per play-through
    pub const NUMBER_TURNS: u32 = 3;

    /// Paddle contacts before the ball speeds up
    pub const ESCALATION_CONTACTS: u32 = 10;
    /// Vertical speed multiplier applied once per life
    pub const ESCALATION_FACTOR: f32 = 1.3;

    /// Seconds between the press and the serve
    pub const COUNTDOWN_SECS: f32 = 3.0;
    /// Frames longer than this point at a framerate problem
    pub const LONG_FRAME_SECS: f32 = 0.5;
}
