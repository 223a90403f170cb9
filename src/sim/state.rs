//! Game state and core simulation types
//!
//! The arena owns one ball, one paddle and the live brick field; `GameState`
//! wraps it with the turn bookkeeping and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball attached to paddle, waiting for launch input
    Attached,
    /// Active gameplay
    InPlay,
    /// Ball fell out or the field was cleared; resolved on the next tick
    TurnOver,
    /// Game ended
    GameOver,
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "YOU WIN!",
            Outcome::Lose => "GAME OVER",
        }
    }
}

/// Ball state - attached to paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Ball rides the paddle, waiting for launch
    Attached,
    /// Ball is free-moving
    Free,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Per-tick velocity; both components stay non-zero while free
    pub vel: Vec2,
    pub state: BallState,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: BALL_RADIUS,
            vel: Vec2::ZERO,
            state: BallState::Attached,
        }
    }

    /// The square circumscribing the ball
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos - Vec2::splat(self.radius), Vec2::splat(self.radius * 2.0))
    }

    /// Update attached ball position based on paddle
    pub fn update_attached(&mut self, paddle: &Paddle) {
        if self.state == BallState::Attached {
            self.pos = Vec2::new(
                paddle.rect.center().x,
                paddle.rect.min.y - self.radius - BRICK_SEP,
            );
        }
    }

    /// Launch the ball from attached state
    ///
    /// Vertical speed is fixed upward; horizontal speed magnitude is drawn
    /// uniformly from the tuned range with a random sign.
    pub fn launch(&mut self, rng: &mut Pcg32, tuning: &Tuning) {
        if self.state == BallState::Attached {
            let vx = rng.random_range(tuning.velocity_x_min..=tuning.velocity_x_max);
            let vx = if rng.random_bool(0.5) { vx } else { -vx };
            self.vel = Vec2::new(vx, -tuning.velocity_y);
            self.state = BallState::Free;
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle; only its x coordinate ever changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle centered horizontally at its fixed height
    pub fn new(arena_width: f32, arena_height: f32) -> Self {
        let min = Vec2::new(
            (arena_width - PADDLE_WIDTH) / 2.0,
            arena_height - PADDLE_Y_OFFSET - PADDLE_HEIGHT,
        );
        Self {
            rect: Rect::new(min, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
        }
    }
}

/// A brick; geometry is fixed for the game's lifetime, destruction removes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub row: u32,
    pub col: u32,
    pub rect: Rect,
}

/// What a spatial probe can land on. The ball is never a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Paddle,
    Brick(u32),
}

/// The playing field: ball, paddle, live bricks and the per-life hit flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Horizontal lookahead margin, one tick of max horizontal travel
    pub x_margin: f32,
    /// Vertical lookahead margin, one tick of vertical travel
    pub y_margin: f32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks; cardinality is the authoritative remaining count
    pub bricks: Vec<Brick>,
    /// Set on paddle contact, cleared by any other collision. Suppresses
    /// repeat bounces while the ball's box still overlaps the paddle.
    pub last_hit_is_paddle: bool,
}

impl Arena {
    /// Fresh arena with the full brick field and the ball on the paddle
    pub fn new(tuning: &Tuning) -> Self {
        let paddle = Paddle::new(ARENA_WIDTH, ARENA_HEIGHT);
        let mut ball = Ball::new();
        ball.update_attached(&paddle);

        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            x_margin: tuning.x_margin(),
            y_margin: tuning.y_margin(),
            ball,
            paddle,
            bricks: brick_field(ARENA_WIDTH),
            last_hit_is_paddle: false,
        }
    }

    /// Which live object contains the given point, if any
    pub fn object_at(&self, p: Vec2) -> Option<Occupant> {
        if self.paddle.rect.contains(p) {
            debug_assert!(
                !self.bricks.iter().any(|b| b.rect.contains(p)),
                "brick overlapping paddle at {p:?}"
            );
            return Some(Occupant::Paddle);
        }
        self.bricks
            .iter()
            .find(|b| b.rect.contains(p))
            .map(|b| Occupant::Brick(b.id))
    }

    /// Clamp the paddle's left edge into the arena and apply it.
    /// Returns the x actually applied.
    pub fn move_paddle_to(&mut self, x: f32) -> f32 {
        let x = x.clamp(0.0, self.width - self.paddle.rect.size.x);
        self.paddle.rect.min.x = x;
        x
    }

    /// Translate the ball's center. The only mutation path for its position.
    pub fn move_ball(&mut self, delta: Vec2) {
        self.ball.pos += delta;
    }

    /// Permanently remove a brick from all future spatial queries
    pub fn remove_brick(&mut self, id: u32) {
        self.bricks.retain(|b| b.id != id);
    }

    #[inline]
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }

    /// Ball loss: its top edge has crossed the arena bottom
    pub fn ball_lost(&self) -> bool {
        self.ball.bounds().min.y >= self.height
    }

    /// Re-attach the ball for a new life; bricks are untouched
    pub fn reset_ball(&mut self) {
        self.ball.vel = Vec2::ZERO;
        self.ball.state = BallState::Attached;
        self.ball.update_attached(&self.paddle);
        self.last_hit_is_paddle = false;
    }
}

/// Lay out the full brick field, horizontally centered
fn brick_field(arena_width: f32) -> Vec<Brick> {
    let total_width = NBRICK_COLS as f32 * BRICK_WIDTH + (NBRICK_COLS - 1) as f32 * BRICK_SEP;
    let start_x = (arena_width - total_width) / 2.0;

    let mut bricks = Vec::with_capacity((NBRICK_ROWS * NBRICK_COLS) as usize);
    for row in 0..NBRICK_ROWS {
        for col in 0..NBRICK_COLS {
            let min = Vec2::new(
                start_x + col as f32 * (BRICK_WIDTH + BRICK_SEP),
                BRICK_Y_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_SEP),
            );
            bricks.push(Brick {
                id: row * NBRICK_COLS + col,
                row,
                col,
                rect: Rect::new(min, Vec2::new(BRICK_WIDTH, BRICK_HEIGHT)),
            });
        }
    }
    bricks
}

/// RNG state wrapper for serialization; each draw derives a fresh stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// A fresh deterministic RNG for the next randomized event
    pub fn next_rng(&mut self) -> Pcg32 {
        self.draws += 1;
        Pcg32::seed_from_u64(self.seed.wrapping_add(self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub tuning: Tuning,
    /// Current turn, 1-based
    pub turn: u32,
    /// Simulation tick counter
    pub ticks: u64,
    pub phase: GamePhase,
    pub arena: Arena,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let arena = Arena::new(&tuning);
        Self {
            seed,
            rng_state: RngState::new(seed),
            tuning,
            turn: 1,
            ticks: 0,
            phase: GamePhase::Attached,
            arena,
        }
    }

    /// Final outcome, only once the game has ended
    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        Some(if self.arena.bricks_remaining() == 0 {
            Outcome::Win
        } else {
            Outcome::Lose
        })
    }

    /// Status text for the presentation layer
    pub fn status_line(&self) -> String {
        format!(
            "Balls left: {}   Bricks left: {}",
            self.tuning.turns.saturating_sub(self.turn),
            self.arena.bricks_remaining()
        )
    }
}
