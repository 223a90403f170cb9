//! Brickfall entry point
//!
//! Headless demo driver: runs a seeded game to completion with a simple
//! ball-tracking paddle and reports the result. Usage:
//!
//! ```text
//! brickfall [seed] [tuning.json]
//! ```

use brickfall::Tuning;
use brickfall::consts::PADDLE_WIDTH;
use brickfall::sim::{GamePhase, GameState, TickInput, tick};

/// Safety cap so a pathological orbit cannot spin forever
const MAX_TICKS: u64 = 2_000_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let seed = match args.next() {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                log::error!("invalid seed: {raw}");
                std::process::exit(1);
            }
        },
        None => 42,
    };

    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("failed to load tuning from {path}: {err}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("starting run with seed {seed}");
    let mut state = GameState::with_tuning(seed, tuning);

    while state.phase != GamePhase::GameOver && state.ticks < MAX_TICKS {
        // Track the ball like a pointer would, launch as soon as we can
        let input = TickInput {
            target_x: Some(state.arena.ball.pos.x - PADDLE_WIDTH / 2.0),
            launch: state.phase == GamePhase::Attached,
        };
        tick(&mut state, &input);
    }

    match state.outcome() {
        Some(outcome) => println!("{}  ({})", outcome.as_str(), state.status_line()),
        None => println!("stopped after {} ticks  ({})", state.ticks, state.status_line()),
    }
}

fn load_tuning(path: &str) -> Result<Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(Tuning::from_json(&json)?)
}
