//! Per-frame session state machine
//!
//! The host calls [`Breakout::tick`] once per rendered frame with the
//! current pointer sample and the elapsed time since the previous frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::gameplay::{Gameplay, TickOutcome};
use super::state::{Outcome, Phase};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Pointer position while pressed, `None` when released
    pub pointer: Option<Vec2>,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl TickInput {
    pub fn pressed(x: f32, y: f32, dt: f32) -> Self {
        Self {
            pointer: Some(Vec2::new(x, y)),
            dt,
        }
    }

    pub fn released(dt: f32) -> Self {
        Self { pointer: None, dt }
    }
}

/// The whole game: the current play-through plus the phase around it
#[derive(Debug, Clone)]
pub struct Breakout {
    phase: Phase,
    game: Gameplay,
    seed: u64,
    rng: Pcg32,
    /// Seconds spent in the current countdown
    countdown: f32,
    /// Pointer sample from the previous frame, for press edges
    last_pointer: Option<Vec2>,
    frame: u64,
}

impl Breakout {
    /// Create a game whose serves are drawn from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Inactive,
            game: Gameplay::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            countdown: 0.0,
            last_pointer: None,
            frame: 0,
        }
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &TickInput) -> Option<TickOutcome> {
        self.frame += 1;
        let dt = if input.dt.is_finite() { input.dt.max(0.0) } else { 0.0 };
        if dt > LONG_FRAME_SECS {
            log::warn!("Frame {} took {:.3}s; framerate problem?", self.frame, dt);
        }

        let pressed = self.last_pointer.is_none() && input.pointer.is_some();
        let mut outcome = None;

        match self.phase {
            Phase::Inactive => {
                if pressed {
                    self.enter_countdown();
                }
            }
            Phase::Countdown => {
                self.game.track_pointer(input.pointer);
                self.countdown += dt;
                if self.countdown >= COUNTDOWN_SECS {
                    self.game.create_ball(&mut self.rng);
                    self.set_phase(Phase::Active);
                }
            }
            Phase::Active => {
                let result = self.game.tick(input.pointer);
                if self.game.has_won() {
                    self.set_phase(Phase::Complete(Outcome::Won));
                } else if result.ball_lost {
                    if self.game.tries() == 0 {
                        self.set_phase(Phase::Complete(Outcome::GameOver));
                    } else {
                        self.set_phase(Phase::Paused);
                    }
                }
                outcome = Some(result);
            }
            Phase::Paused => {
                if pressed {
                    self.enter_countdown();
                }
            }
            Phase::Complete(_) => {
                if pressed {
                    log::info!("Restarting (final score {})", self.game.score());
                    self.game = Gameplay::new();
                    self.set_phase(Phase::Inactive);
                }
            }
        }

        self.last_pointer = input.pointer;
        outcome
    }

    fn enter_countdown(&mut self) {
        self.countdown = 0.0;
        // The press that started the countdown anchors the paddle afresh
        self.game.track_pointer(None);
        self.set_phase(Phase::Countdown);
    }

    fn set_phase(&mut self, next: Phase) {
        if next != self.phase {
            log::info!("Frame {}: {:?} -> {:?}", self.frame, self.phase, next);
            self.phase = next;
        }
    }

    /// Whole seconds left before the serve, 3 down to 1 (countdown only)
    pub fn countdown_digit(&self) -> Option<u32> {
        if self.phase != Phase::Countdown {
            return None;
        }
        let left = (COUNTDOWN_SECS - self.countdown).ceil().max(1.0);
        Some(left as u32)
    }

    /// Centre-screen message for the current phase
    pub fn message(&self) -> Option<String> {
        match self.phase {
            Phase::Inactive => Some("Press to Play!".to_string()),
            Phase::Countdown => self.countdown_digit().map(|d| d.to_string()),
            Phase::Active => None,
            Phase::Paused => Some(format!("{} lives left.", self.game.tries())),
            Phase::Complete(Outcome::GameOver) => {
                Some(format!("GAME OVER, YOUR SCORE WAS {}", self.game.score()))
            }
            Phase::Complete(Outcome::Won) => Some("YOU WIN!".to_string()),
        }
    }

    /// Score label, shown while a play-through is on screen
    pub fn score_label(&self) -> Option<String> {
        match self.phase {
            Phase::Countdown | Phase::Active | Phase::Paused => {
                Some(format!("Score: {}", self.game.score()))
            }
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &Gameplay {
        &self.game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
