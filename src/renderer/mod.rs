//! Frame output for a host renderer
//!
//! The game draws into any [`DrawTarget`]. [`DrawList`] records the calls in
//! order so a host can replay them, dump them, or tessellate the shapes.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::sim::rect::Rect;
use crate::sim::{Breakout, Phase};
use vertex::colors;

/// Anything the game can be drawn onto
pub trait DrawTarget {
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
    fn fill_ellipse(&mut self, bounds: Rect, color: [f32; 4]);
    /// Text anchored at its lower-left corner
    fn text(&mut self, text: &str, pos: Vec2, color: [f32; 4]);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Rect { rect: Rect, color: [f32; 4] },
    Ellipse { bounds: Rect, color: [f32; 4] },
    Text { text: String, pos: Vec2, color: [f32; 4] },
}

/// Ordered draw calls for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a full frame of `game`
    pub fn capture(game: &Breakout) -> Self {
        let mut list = Self::new();
        draw(game, &mut list);
        list
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        shapes::tessellate(&self.commands)
    }
}

impl DrawTarget for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::Ellipse { bounds, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}

/// Where the centre message sits for the current phase
fn message_pos(phase: Phase) -> Vec2 {
    let center = Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0);
    match phase {
        Phase::Countdown => center + Vec2::new(-3.0, 20.0),
        Phase::Complete(crate::sim::Outcome::GameOver) => center - Vec2::new(100.0, 0.0),
        _ => center - Vec2::new(45.0, 0.0),
    }
}

/// The whole playfield
fn background() -> Rect {
    Rect::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT)
}

/// Draw one frame: background, bricks and paddle, the ball, the message,
/// the score
pub fn draw<T: DrawTarget + ?Sized>(game: &Breakout, target: &mut T) {
    let phase = game.phase();
    let session = game.game();

    if matches!(phase, Phase::Countdown | Phase::Active | Phase::Paused) {
        target.fill_rect(background(), colors::BACKGROUND);
        for brick in session.field().bricks() {
            target.fill_rect(brick.rect, brick.color.rgba());
        }
        target.fill_rect(session.paddle().bounds(), colors::PADDLE);
    }

    if phase == Phase::Active {
        if let Some(ball) = session.ball() {
            target.fill_ellipse(ball.bounds(), colors::BALL);
        }
    }

    if let Some(message) = game.message() {
        target.text(&message, message_pos(phase), colors::TEXT);
    }

    if let Some(score) = game.score_label() {
        target.text(&score, Vec2::new(0.0, GAME_HEIGHT - 20.0), colors::TEXT);
    }
}
