//! Collision detection and resolution
//!
//! The tricky part of Brickfall: one tick's worth of contact between the
//! moving ball and the walls, paddle and bricks, applying exactly one
//! logical bounce per physical contact even when contact shows up at more
//! than one probe point in the same tick.
//!
//! Detection runs in three ordered phases, each of which may flip a
//! velocity component:
//! 1. Walls: the ball's extent crossing a lookahead margin at the left,
//!    right or top edge. The margin equals one tick of travel; without it
//!    a discrete check can tunnel a few pixels past the wall.
//! 2. Sides: one probe point per side of the ball's bounding box, offset
//!    outward by the margin.
//! 3. Corners: the bounding-box corners, confirmed by a distance test
//!    against the struck rectangle's opposite corner, because a square
//!    probe touching a rectangle does not mean the circular ball does.
//!
//! The bottom wall is deliberately absent: crossing it is ball loss and
//! belongs to the turn state machine.

use glam::Vec2;

use super::geom::Rect;
use super::state::{Arena, Occupant};

/// The four sides of the ball's bounding box, in probe order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

    /// Probe point: midpoint of the side, pushed outward by the margin
    fn probe(self, bounds: &Rect, x_margin: f32, y_margin: f32) -> Vec2 {
        let center = bounds.center();
        match self {
            Side::Left => Vec2::new(bounds.min.x - x_margin, center.y),
            Side::Right => Vec2::new(bounds.max().x + x_margin, center.y),
            Side::Bottom => Vec2::new(center.x, bounds.max().y + y_margin),
            Side::Top => Vec2::new(center.x, bounds.min.y - y_margin),
        }
    }

    /// Whether a hit on this side reverses the horizontal component
    /// (vertical otherwise)
    fn reverses_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// The four corners of the ball's bounding box, in check order.
/// Corners are mutually exclusive outcomes within a tick: only the first
/// occupied one is examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Nw,
    Ne,
    Se,
    Sw,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::Nw, Corner::Ne, Corner::Se, Corner::Sw];

    /// Probe point: the bounding-box corner itself
    fn probe(self, bounds: &Rect) -> Vec2 {
        match self {
            Corner::Nw => bounds.top_left(),
            Corner::Ne => bounds.top_right(),
            Corner::Se => bounds.bottom_right(),
            Corner::Sw => bounds.bottom_left(),
        }
    }

    /// Expected impact point on the struck rectangle: the corner
    /// diagonally opposite the approach direction
    fn impact_point(self, rect: &Rect) -> Vec2 {
        match self {
            Corner::Nw => rect.bottom_right(),
            Corner::Ne => rect.bottom_left(),
            Corner::Se => rect.top_left(),
            Corner::Sw => rect.top_right(),
        }
    }

    /// Which velocity components to reverse: only those whose current
    /// sign points toward this corner
    fn reversals(self, vel: Vec2) -> (bool, bool) {
        match self {
            Corner::Nw => (vel.x < 0.0, vel.y < 0.0),
            Corner::Ne => (vel.x > 0.0, vel.y < 0.0),
            Corner::Se => (vel.x > 0.0, vel.y > 0.0),
            Corner::Sw => (vel.x < 0.0, vel.y > 0.0),
        }
    }
}

/// Detect and resolve one tick's worth of collisions.
///
/// Flips velocity components in place, removes struck bricks and maintains
/// the paddle suppression flag. Returns the ids of bricks destroyed this
/// tick, for the caller to erase visually.
pub fn resolve(arena: &mut Arena) -> Vec<u32> {
    let mut destroyed = Vec::new();
    check_walls(arena);
    check_sides(arena, &mut destroyed);
    check_corners(arena, &mut destroyed);
    destroyed
}

fn check_walls(arena: &mut Arena) {
    let bounds = arena.ball.bounds();

    if bounds.min.x <= arena.x_margin
        || bounds.min.x >= arena.width - bounds.size.x - arena.x_margin
    {
        arena.ball.vel.x = -arena.ball.vel.x;
        arena.last_hit_is_paddle = false;
    }

    if bounds.min.y <= arena.y_margin {
        arena.ball.vel.y = -arena.ball.vel.y;
        arena.last_hit_is_paddle = false;
    }
}

fn check_sides(arena: &mut Arena, destroyed: &mut Vec<u32>) {
    for side in Side::ALL {
        let probe = side.probe(&arena.ball.bounds(), arena.x_margin, arena.y_margin);
        let Some(occupant) = arena.object_at(probe) else {
            continue;
        };

        // A paddle contact while the flag is still set is the same
        // physical bounce showing up again; skip the reversal.
        if !(occupant == Occupant::Paddle && arena.last_hit_is_paddle) {
            if side.reverses_horizontal() {
                arena.ball.vel.x = -arena.ball.vel.x;
            } else {
                arena.ball.vel.y = -arena.ball.vel.y;
            }
        }

        resolve_hit(arena, occupant, destroyed);
    }
}

fn check_corners(arena: &mut Arena, destroyed: &mut Vec<u32>) {
    let bounds = arena.ball.bounds();
    let Some((corner, occupant)) = Corner::ALL
        .into_iter()
        .find_map(|c| arena.object_at(c.probe(&bounds)).map(|o| (c, o)))
    else {
        return;
    };

    // The probe touching the rectangle's bounding box does not mean the
    // circular ball reaches its corner; gate on the actual distance.
    let rect = occupant_rect(arena, occupant);
    let impact = corner.impact_point(&rect);
    if arena.ball.pos.distance(impact) > arena.ball.radius {
        return;
    }

    if !(occupant == Occupant::Paddle && arena.last_hit_is_paddle) {
        let (flip_x, flip_y) = corner.reversals(arena.ball.vel);
        if flip_x {
            arena.ball.vel.x = -arena.ball.vel.x;
        }
        if flip_y {
            arena.ball.vel.y = -arena.ball.vel.y;
        }
    }

    resolve_hit(arena, occupant, destroyed);
}

fn occupant_rect(arena: &Arena, occupant: Occupant) -> Rect {
    match occupant {
        Occupant::Paddle => arena.paddle.rect,
        Occupant::Brick(id) => {
            arena
                .bricks
                .iter()
                .find(|b| b.id == id)
                .map(|b| b.rect)
                // object_at only ever reports live bricks
                .unwrap_or_else(|| unreachable!("probe returned dead brick {id}"))
        }
    }
}

/// Apply the hit's side effects: bricks die and clear the suppression
/// flag, the paddle arms it.
fn resolve_hit(arena: &mut Arena, occupant: Occupant, destroyed: &mut Vec<u32>) {
    match occupant {
        Occupant::Brick(id) => {
            arena.remove_brick(id);
            arena.last_hit_is_paddle = false;
            destroyed.push(id);
            log::debug!("brick {id} destroyed, {} remaining", arena.bricks_remaining());
        }
        Occupant::Paddle => {
            arena.last_hit_is_paddle = true;
        }
    }
}
