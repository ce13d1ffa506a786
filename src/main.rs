//! Breakout headless driver
//!
//! Runs the engine at a fixed 60 Hz with an autopilot pointer that chases
//! the ball. Useful for soak-testing the simulation and for feeding recorded
//! frames (`--dump`, one JSON object per line) into an external renderer.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use breakout::consts::{GAME_HEIGHT, GAME_WIDTH, PADDLE_WIDTH};
use breakout::{Breakout, DrawList, Phase, TickInput};

const FRAME_DT: f32 = 1.0 / 60.0;
/// How far the autopilot drags per frame
const MAX_DRAG: f32 = 6.0;

#[derive(Debug, Parser)]
#[command(name = "breakout", version)]
#[command(about = "Run the Breakout engine headless with an autopilot paddle")]
struct Args {
    /// Seed for the serve RNG
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Stop after this many frames (default: ten minutes at 60 Hz)
    #[arg(long, default_value_t = 60 * 60 * 10)]
    frames: u64,
    /// Print every frame's draw list as one JSON object per line
    #[arg(long, default_value_t = false)]
    dump: bool,
}

/// Presses to get through menus, then drags the paddle under the ball
struct Autopilot {
    pointer_x: f32,
    held: bool,
}

impl Autopilot {
    fn new() -> Self {
        Self {
            pointer_x: GAME_WIDTH / 2.0,
            held: false,
        }
    }

    fn input(&mut self, game: &Breakout) -> TickInput {
        match game.phase() {
            Phase::Countdown | Phase::Active => {
                let session = game.game();
                let target = session
                    .ball()
                    .map(|b| b.bounds().center().x)
                    .unwrap_or(GAME_WIDTH / 2.0);
                let paddle_center = session.paddle().x + PADDLE_WIDTH / 2.0;
                self.pointer_x += (target - paddle_center).clamp(-MAX_DRAG, MAX_DRAG);
                self.held = true;
            }
            // Release for a frame, then press again
            _ => self.held = !self.held,
        }

        if self.held {
            TickInput::pressed(self.pointer_x, GAME_HEIGHT / 4.0, FRAME_DT)
        } else {
            TickInput::released(FRAME_DT)
        }
    }
}

#[derive(Serialize)]
struct FrameDump<'a> {
    frame: u64,
    phase: Phase,
    draw: &'a DrawList,
}

fn run(args: &Args) -> Result<()> {
    let mut game = Breakout::new(args.seed);
    let mut pilot = Autopilot::new();
    let mut bricks_destroyed = 0;
    let mut paddle_hits = 0;

    for _ in 0..args.frames {
        let input = pilot.input(&game);
        if let Some(outcome) = game.tick(&input) {
            bricks_destroyed += outcome.bricks_destroyed;
            paddle_hits += usize::from(outcome.paddle_hit);
        }

        if args.dump {
            let draw = DrawList::capture(&game);
            let dump = FrameDump {
                frame: game.frame(),
                phase: game.phase(),
                draw: &draw,
            };
            let line = serde_json::to_string(&dump)
                .with_context(|| format!("failed to encode frame {}", game.frame()))?;
            println!("{line}");
        }

        if matches!(game.phase(), Phase::Complete(_)) {
            break;
        }
    }

    log::info!(
        "Stopped at frame {} in {:?}: score {}, tries {}, {} paddle hits, {} bricks",
        game.frame(),
        game.phase(),
        game.game().score(),
        game.game().tries(),
        paddle_hits,
        bricks_destroyed
    );
    if !args.dump {
        println!(
            "{:?} after {} frames, score {}",
            game.phase(),
            game.frame(),
            game.game().score()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();
    log::info!("Breakout (headless) starting, seed {}", args.seed);
    run(&args)
}
