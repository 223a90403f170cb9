//! Brickfall - a classic brick-breaking arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and input plumbing live outside this crate; the `brickfall`
//! binary is a headless driver that runs a seeded game to completion.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 420.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Brick field layout
    pub const NBRICK_ROWS: u32 = 10;
    pub const NBRICK_COLS: u32 = 10;
    /// Separation between bricks
    pub const BRICK_SEP: f32 = 4.0;
    /// floor((ARENA_WIDTH - (NBRICK_COLS + 1) * BRICK_SEP) / NBRICK_COLS)
    pub const BRICK_WIDTH: f32 = 37.0;
    pub const BRICK_HEIGHT: f32 = 8.0;
    /// Offset of the top brick row from the top of the arena
    pub const BRICK_Y_OFFSET: f32 = 70.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Absolute vertical speed while in play
    pub const VELOCITY_Y: f32 = 1.5;
    /// Horizontal launch speed is randomized between these bounds
    pub const VELOCITY_X_MIN: f32 = 1.0;
    pub const VELOCITY_X_MAX: f32 = 1.5;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Offset of the paddle from the bottom of the arena
    pub const PADDLE_Y_OFFSET: f32 = 30.0;

    /// Number of balls the player gets per game
    pub const NTURNS: u32 = 3;
}
