//! Collision detection for circles and the bin
//!
//! Detection only: these functions report overlap geometry and never move
//! anything. Resolution policies live in [`super::resolver`].

use glam::Vec2;

use super::state::{Ball, Bin};
use super::vector::{add, length, normalize_or, scale, sub};

/// Separation direction used when two centres coincide (straight up)
pub const COINCIDENT_NORMAL: Vec2 = Vec2::NEG_Y;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point on the surface of the second shape (if hit)
    pub point: Vec2,
    /// Unit normal pointing from the second shape toward the first
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check overlap between circle `a` and circle `b`.
///
/// The normal points from `b` toward `a`. Touching circles (distance equal
/// to the radius sum) do not collide.
pub fn circle_circle_collision(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> CollisionResult {
    let d = sub(a_pos, b_pos);
    let dist = length(d);
    let reach = a_radius + b_radius;

    if dist >= reach {
        return CollisionResult::miss();
    }

    let normal = normalize_or(d, COINCIDENT_NORMAL);
    CollisionResult {
        hit: true,
        point: add(b_pos, scale(normal, b_radius)),
        normal,
        penetration: reach - dist,
    }
}

/// Overlap between two balls (normal points from `b` toward `a`)
#[inline]
pub fn ball_ball_collision(a: &Ball, b: &Ball) -> CollisionResult {
    circle_circle_collision(a.pos, a.radius(), b.pos, b.radius())
}

/// Check whether a circle pokes through the bin floor
pub fn ball_floor_collision(pos: Vec2, radius: f32, bin: &Bin) -> CollisionResult {
    let floor = bin.bottom();
    let penetration = pos.y + radius - floor;
    if penetration <= 0.0 {
        return CollisionResult::miss();
    }
    CollisionResult {
        hit: true,
        point: Vec2::new(pos.x, floor),
        normal: COINCIDENT_NORMAL,
        penetration,
    }
}

/// Position of a circle pushed back inside the bin's left, right and bottom
/// edges, each axis corrected independently. The open top is not enforced.
pub fn contain_in_bin(pos: Vec2, radius: f32, bin: &Bin) -> Vec2 {
    let mut out = pos;
    if out.x - radius < bin.left() {
        out.x = bin.left() + radius;
    } else if out.x + radius > bin.right() {
        out.x = bin.right() - radius;
    }
    if out.y + radius > bin.bottom() {
        out.y = bin.bottom() - radius;
    }
    out
}
