//! Game entities and phase types
//!
//! Ball, paddle and bricks are plain kinematic state. Every collision
//! decision lives in `collision` and `gameplay`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::{Corners, Rect};
use crate::consts::*;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first press
    Inactive,
    /// Paddle movable, no ball yet
    Countdown,
    /// Ball in play
    Active,
    /// Ball lost, tries remain
    Paused,
    /// Play-through over, waiting for a press to restart
    Complete(Outcome),
}

/// How a play-through ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    GameOver,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Lower-left corner of the bounding square
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub diameter: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            diameter: BALL_DIAMETER,
        }
    }

    /// Serve a ball from the middle of the playfield
    ///
    /// Falls straight down at `BALL_START_VY` with a horizontal speed drawn
    /// from `[BALL_MIN_VX, BALL_MAX_VX]` in a random direction.
    pub fn serve<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let speed = rng.random_range(BALL_MIN_VX..=BALL_MAX_VX);
        let vx = if rng.random_bool(0.5) { speed } else { -speed };
        Self::new(
            Vec2::new(GAME_WIDTH / 2.0 - BALL_DIAMETER / 2.0, GAME_HEIGHT / 2.0),
            Vec2::new(vx, BALL_START_VY),
        )
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn moving_up(&self) -> bool {
        self.vel.y > 0.0
    }

    pub fn moving_down(&self) -> bool {
        self.vel.y < 0.0
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            min: self.pos,
            size: Vec2::splat(self.diameter),
        }
    }

    pub fn corners(&self) -> Corners {
        self.bounds().corners()
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Last pointer sample while pressed; `None` when released
    anchor: Option<Vec2>,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: GAME_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
            anchor: None,
        }
    }
}

impl Paddle {
    pub fn at(x: f32) -> Self {
        let mut paddle = Self { x: 0.0, anchor: None };
        paddle.slide_by(x);
        paddle
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, PADDLE_OFFSET, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Slide horizontally, staying inside the playfield
    pub fn slide_by(&mut self, dx: f32) {
        let max_x = GAME_WIDTH - PADDLE_WIDTH;
        let x = self.x + dx;
        // NaN deltas leave the paddle where it was
        if x.is_nan() {
            return;
        }
        self.x = x.clamp(0.0, max_x);
    }

    /// Follow a drag of the pointer without teleporting to it
    ///
    /// The first sample of a press only anchors; later samples move the
    /// paddle by their horizontal delta. A released pointer drops the anchor.
    pub fn track_pointer(&mut self, pointer: Option<Vec2>) {
        match (self.anchor, pointer) {
            (_, None) => self.anchor = None,
            (None, Some(current)) => self.anchor = Some(current),
            (Some(last), Some(current)) => {
                self.slide_by(current.x - last.x);
                self.anchor = Some(current);
            }
        }
    }

    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }
}

/// Brick colours, one per pair of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
}

impl BrickColor {
    const ROWS: [BrickColor; 10] = [
        BrickColor::Red,
        BrickColor::Red,
        BrickColor::Orange,
        BrickColor::Orange,
        BrickColor::Yellow,
        BrickColor::Yellow,
        BrickColor::Green,
        BrickColor::Green,
        BrickColor::Cyan,
        BrickColor::Cyan,
    ];

    /// Colour for a row, counting down from the top; cycles past row 9
    pub fn for_row(row: usize) -> Self {
        Self::ROWS[row % Self::ROWS.len()]
    }
}

/// A brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Row-major index in the initial grid
    pub id: u32,
    pub rect: Rect,
    pub color: BrickColor,
}

/// The bricks still standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl Default for BrickField {
    fn default() -> Self {
        Self::new(BRICK_ROWS, BRICKS_IN_ROW)
    }
}

impl BrickField {
    /// Lay out a full grid hanging from the top of the playfield
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut bricks = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            let y = GAME_HEIGHT - BRICK_Y_OFFSET - row as f32 * (BRICK_HEIGHT + BRICK_SEP_V);
            for col in 0..columns {
                let x = BRICK_SEP_H / 2.0 + col as f32 * (BRICK_WIDTH + BRICK_SEP_H);
                bricks.push(Brick {
                    id: (row * columns + col) as u32,
                    rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
                    color: BrickColor::for_row(row),
                });
            }
        }
        Self { bricks }
    }

    /// Build a field from arbitrary bricks
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// First brick containing the point
    pub fn brick_at(&self, point: Vec2) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.rect.contains(point))
    }

    /// Remove a brick by id, returning it if it was still standing
    pub fn remove(&mut self, id: u32) -> Option<Brick> {
        let idx = self.bricks.iter().position(|b| b.id == id)?;
        Some(self.bricks.remove(idx))
    }

    /// Remove every brick in `ids`, returning how many were standing
    pub fn remove_all(&mut self, ids: &[u32]) -> usize {
        let before = self.bricks.len();
        self.bricks.retain(|b| !ids.contains(&b.id));
        before - self.bricks.len()
    }
}
