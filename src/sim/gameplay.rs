//! A single play-through: ball, paddle, bricks and the counters around them
//!
//! A fresh `Gameplay` is created for every play-through and dropped on
//! restart; nothing here is ever partially reset.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{WallContact, brick_contacts, paddle_contact, react_to_brick, resolve_walls};
use super::state::{Ball, BrickField, Paddle};
use crate::consts::*;

/// What happened during one active tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub wall: WallContact,
    pub paddle_hit: bool,
    pub bricks_destroyed: usize,
    pub ball_lost: bool,
    pub sped_up: bool,
}

/// One play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gameplay {
    field: BrickField,
    paddle: Paddle,
    /// Absent until the serve and after a lost ball
    ball: Option<Ball>,
    tries: u32,
    /// Paddle bounces since the last lost ball
    contacts: u32,
    /// Set once the ball has sped up this life
    escalated: bool,
    won: bool,
    /// Grid size at creation, for scoring
    capacity: usize,
}

impl Default for Gameplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Gameplay {
    pub fn new() -> Self {
        Self::with_field(BrickField::default())
    }

    /// Start a play-through over a custom field
    pub fn with_field(field: BrickField) -> Self {
        let capacity = field.len();
        Self {
            field,
            paddle: Paddle::default(),
            ball: None,
            tries: NUMBER_TURNS,
            contacts: 0,
            escalated: false,
            won: false,
            capacity,
        }
    }

    /// Serve a new ball from the middle of the playfield
    pub fn create_ball<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let ball = Ball::serve(rng);
        log::debug!("Serve: pos={:?} vel={:?}", ball.pos, ball.vel);
        self.ball = Some(ball);
    }

    /// Put a specific ball in play
    #[cfg(test)]
    pub(crate) fn set_ball(&mut self, ball: Ball) {
        self.ball = Some(ball);
    }

    /// Move the paddle without simulating the ball (countdown)
    pub fn track_pointer(&mut self, pointer: Option<Vec2>) {
        self.paddle.track_pointer(pointer);
    }

    /// Advance one active frame
    ///
    /// Order: move the ball, move the paddle, resolve walls, then obstacles,
    /// then the win check and speed escalation.
    pub fn tick(&mut self, pointer: Option<Vec2>) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        debug_assert!(self.ball.is_some(), "Gameplay::tick called without a ball in play");
        let Some(ball) = self.ball.as_mut() else {
            log::error!("Tick without a ball in play; skipped");
            return outcome;
        };

        ball.advance();
        self.paddle.track_pointer(pointer);

        outcome.wall = resolve_walls(ball);
        if outcome.wall == WallContact::Lost {
            self.lose_ball();
            outcome.ball_lost = true;
            return outcome;
        }

        outcome.paddle_hit = self.resolve_paddle();
        outcome.bricks_destroyed = self.resolve_bricks();

        if self.field.is_empty() && !self.won {
            log::info!("Brick field cleared");
            self.won = true;
        }

        outcome.sped_up = self.escalate_speed();
        outcome
    }

    fn resolve_paddle(&mut self) -> bool {
        let Some(ball) = self.ball.as_mut() else {
            return false;
        };
        if !paddle_contact(ball, &self.paddle) {
            return false;
        }
        ball.bounce_vertical();
        self.contacts += 1;
        log::debug!("Paddle hit #{}", self.contacts);
        true
    }

    /// Collect every touched brick first, then bounce and remove
    fn resolve_bricks(&mut self) -> usize {
        let Some(ball) = self.ball.as_mut() else {
            return 0;
        };
        let contacts = brick_contacts(ball, &self.field);
        if contacts.is_empty() {
            return 0;
        }

        let mut ids = Vec::with_capacity(contacts.len());
        for contact in &contacts {
            react_to_brick(ball, contact.side);
            ids.push(contact.brick_id);
        }
        let removed = self.field.remove_all(&ids);
        log::debug!("Destroyed {} brick(s), {} left", removed, self.field.len());
        removed
    }

    /// Speed the ball up once per life after enough paddle hits
    ///
    /// Scales vertical speed by `ESCALATION_FACTOR`, keeping its direction.
    fn escalate_speed(&mut self) -> bool {
        if self.escalated || self.contacts < ESCALATION_CONTACTS {
            return false;
        }
        let Some(ball) = self.ball.as_mut() else {
            return false;
        };
        ball.vel.y *= ESCALATION_FACTOR;
        self.escalated = true;
        log::info!("Ball sped up: vy={}", ball.vel.y);
        true
    }

    fn lose_ball(&mut self) {
        self.tries = self.tries.saturating_sub(1);
        self.contacts = 0;
        self.escalated = false;
        self.ball = None;
        log::info!("Ball lost, {} tries left", self.tries);
    }

    /// Bricks destroyed so far
    pub fn score(&self) -> usize {
        self.capacity - self.field.len()
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn field(&self) -> &BrickField {
        &self.field
    }

    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn contacts(&self) -> u32 {
        self.contacts
    }

    pub fn has_won(&self) -> bool {
        self.won
    }
}
