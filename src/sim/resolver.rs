//! Collision resolution policies
//!
//! Two models, picked once per world:
//! - `Impulse`: semi-implicit Euler with positional de-penetration and a
//!   damped normal impulse between overlapping balls, plus a damped floor
//!   bounce. Stacks converge over several ticks.
//! - `StepDescent`: sand-pile constraint satisfaction. Balls creep down a
//!   fixed step when nothing blocks them, then get pushed out of overlaps and
//!   back inside the bin. No velocity, no bounce.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{ball_ball_collision, ball_floor_collision, circle_circle_collision, contain_in_bin};
use super::state::{Ball, Bin};
use super::vector::{add, dot, length, scale, sub};
use crate::config::WorldConfig;

/// How penetration depth is shared between two overlapping balls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepthSplit {
    /// Each ball moves half the depth
    #[default]
    Half,
    /// Each ball moves the full depth (over-corrects every pair)
    Full,
}

impl DepthSplit {
    /// Distance each ball of a pair is moved
    #[inline]
    pub fn share(self, depth: f32) -> f32 {
        match self {
            DepthSplit::Half => depth * 0.5,
            DepthSplit::Full => depth,
        }
    }
}

/// Collision resolution model for a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionResolver {
    Impulse {
        #[serde(default)]
        split: DepthSplit,
    },
    StepDescent,
}

impl Default for CollisionResolver {
    fn default() -> Self {
        CollisionResolver::Impulse {
            split: DepthSplit::Half,
        }
    }
}

/// Contacts handled during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactCounts {
    pub pairs: usize,
    pub floor: usize,
}

impl CollisionResolver {
    /// Advance every settled ball by one tick under this model
    pub fn resolve(&self, balls: &mut [Ball], bin: &Bin, config: &WorldConfig) -> ContactCounts {
        match *self {
            CollisionResolver::Impulse { split } => {
                apply_gravity(balls, config.gravity);
                integrate_positions(balls);
                let pairs = resolve_pairs(balls, split, config.restitution);
                let floor = bounce_off_floor(balls, bin, config.bounce_damping);
                apply_velocity_floor(balls, config.velocity_floor);
                ContactCounts { pairs, floor }
            }
            CollisionResolver::StepDescent => {
                let floor = descend(balls, bin, config.descent_step);
                let pairs = push_out(balls, bin);
                ContactCounts { pairs, floor }
            }
        }
    }
}

pub fn apply_gravity(balls: &mut [Ball], gravity: Vec2) {
    for ball in balls.iter_mut() {
        ball.vel = add(ball.vel, gravity);
    }
}

/// Move each ball by its (already updated) velocity
pub fn integrate_positions(balls: &mut [Ball]) {
    for ball in balls.iter_mut() {
        ball.pos = add(ball.pos, ball.vel);
    }
}

/// De-penetrate and exchange a damped normal impulse for every ordered pair.
///
/// Pairs are visited as (i, j) and later (j, i); the second visit only acts
/// if the first left them overlapping. Returns the number of overlaps handled.
pub fn resolve_pairs(balls: &mut [Ball], split: DepthSplit, restitution: f32) -> usize {
    let mut contacts = 0;
    for i in 0..balls.len() {
        for j in 0..balls.len() {
            if i == j {
                continue;
            }
            let result = ball_ball_collision(&balls[i], &balls[j]);
            if !result.hit {
                continue;
            }
            contacts += 1;

            let n = result.normal;
            let shift = scale(n, split.share(result.penetration));
            balls[i].pos = add(balls[i].pos, shift);
            balls[j].pos = sub(balls[j].pos, shift);

            let rel = sub(balls[i].vel, balls[j].vel);
            let impulse = scale(n, dot(rel, n) * restitution);
            balls[i].vel = sub(balls[i].vel, impulse);
            balls[j].vel = add(balls[j].vel, impulse);
        }
    }
    contacts
}

/// Rest balls on the floor and reflect their fall with damping
pub fn bounce_off_floor(balls: &mut [Ball], bin: &Bin, damping: f32) -> usize {
    let mut contacts = 0;
    for ball in balls.iter_mut() {
        if ball_floor_collision(ball.pos, ball.radius(), bin).hit {
            ball.pos.y = bin.bottom() - ball.radius();
            ball.vel.y *= -damping;
            contacts += 1;
        }
    }
    contacts
}

/// Snap slow balls to a full stop
pub fn apply_velocity_floor(balls: &mut [Ball], threshold: f32) {
    for ball in balls.iter_mut() {
        if length(ball.vel) < threshold {
            ball.vel = Vec2::ZERO;
        }
    }
}

/// Try to move each ball down by `step`, clipped at the floor.
///
/// A step is rejected if it would create an overlap with a ball that was not
/// already overlapping. Returns how many balls are resting on the floor.
pub fn descend(balls: &mut [Ball], bin: &Bin, step: f32) -> usize {
    let floor = bin.bottom();
    let mut on_floor = 0;
    for i in 0..balls.len() {
        let ball = balls[i];
        balls[i].vel = Vec2::ZERO;

        let dy = step.min(floor - ball.bottom());
        if dy <= 0.0 {
            on_floor += 1;
            continue;
        }

        let candidate = add(ball.pos, Vec2::new(0.0, dy));
        let blocked = balls.iter().enumerate().any(|(j, other)| {
            j != i
                && circle_circle_collision(candidate, ball.radius(), other.pos, other.radius()).hit
                && !ball_ball_collision(&ball, other).hit
        });
        if !blocked {
            balls[i].pos = candidate;
            if dy < step {
                on_floor += 1;
            }
        }
    }
    on_floor
}

/// Push each ball fully out of every ball it overlaps, then back inside the
/// bin walls and floor. Returns the number of overlaps corrected.
pub fn push_out(balls: &mut [Ball], bin: &Bin) -> usize {
    let mut corrected = 0;
    for i in 0..balls.len() {
        for j in 0..balls.len() {
            if i == j {
                continue;
            }
            let result = ball_ball_collision(&balls[i], &balls[j]);
            if result.hit {
                balls[i].pos = add(balls[i].pos, scale(result.normal, result.penetration));
                corrected += 1;
            }
        }
        balls[i].pos = contain_in_bin(balls[i].pos, balls[i].radius(), bin);
    }
    corrected
}
