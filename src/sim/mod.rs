//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;

pub use collision::resolve;
pub use geom::Rect;
pub use state::{Arena, Ball, BallState, Brick, GamePhase, GameState, Occupant, Outcome, Paddle};
pub use tick::{TickInput, TickReport, tick};
