//! World state and core simulation types
//!
//! The world exclusively owns every ball. Callers get read access through
//! accessors; only [`super::tick`] mutates positions and velocities.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tick::{StepSummary, TickInput, tick};
use crate::config::WorldConfig;
use crate::error::ConfigError;

/// A ball (circle) in the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation
    radius: f32,
}

impl Ball {
    /// A ball at rest
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Y of the lowest point of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// The static rectangular container (open at the top)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bin {
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Y of the bin floor
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Complete simulation state: the held ball plus everything dropped so far
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    pub(crate) config: WorldConfig,
    pub(crate) bin: Bin,
    /// Ball under player control, not yet released
    pub(crate) active: Ball,
    /// Released balls in drop order
    pub(crate) settled: Vec<Ball>,
    /// Signed horizontal nudge speed of the active ball
    pub(crate) horizontal_speed: f32,
    pub(crate) rng: Pcg32,
    seed: u64,
    pub(crate) time_ticks: u64,
}

impl PhysicsWorld {
    /// Validate `config` and build a world with a fresh active ball.
    ///
    /// The seed drives ball radii and spawn jitter; equal seeds and inputs
    /// give identical runs.
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let bin = config.bin();
        let spawn = config.spawn_point();
        let mut world = Self {
            config,
            bin,
            active: Ball::new(spawn, 0.0),
            settled: Vec::new(),
            horizontal_speed: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            time_ticks: 0,
        };
        world.active = Ball::new(spawn, world.pick_radius());

        log::info!(
            "World ready: bin=({}, {}, {}x{}), resolver={:?}, seed={}",
            bin.x,
            bin.y,
            bin.width,
            bin.height,
            world.config.resolver,
            seed
        );
        Ok(world)
    }

    /// Advance one fixed tick
    pub fn step(&mut self, input: &TickInput) -> StepSummary {
        tick(self, input)
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn bin(&self) -> &Bin {
        &self.bin
    }

    pub fn active(&self) -> &Ball {
        &self.active
    }

    pub fn settled(&self) -> &[Ball] {
        &self.settled
    }

    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_speed
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Put a ball straight into the bin, bypassing the active ball.
    ///
    /// Used by scripted scenarios that need exact starting layouts.
    pub fn settle(&mut self, ball: Ball) {
        self.settled.push(ball);
    }

    /// Draw a radius from the configured set
    fn pick_radius(&mut self) -> f32 {
        let index = self.rng.random_range(0..self.config.radii.len());
        self.config.radii[index]
    }

    /// Move the active ball into the bin and spawn its replacement
    pub(crate) fn release_active(&mut self) {
        let released = self.active;
        self.settled.push(released);

        let mut pos = self.config.spawn_point();
        if self.config.carry_release_x {
            pos.x = released.pos.x;
        }
        let jitter = self.config.spawn_jitter;
        if jitter > 0.0 {
            pos.x += self.rng.random_range(-jitter..=jitter);
        }

        // horizontal_speed carries over to the new ball
        self.active = Ball::new(pos, self.pick_radius());

        log::debug!(
            "Released r={} at ({:.1}, {:.1}), {} in bin",
            released.radius,
            released.pos.x,
            released.pos.y,
            self.settled.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_spawns_active_ball() {
        let world = PhysicsWorld::new(WorldConfig::default(), 7).unwrap();
        assert_eq!(world.active().pos, Vec2::new(200.0, 50.0));
        assert_eq!(world.active().vel, Vec2::ZERO);
        assert!(world.config().radii.contains(&world.active().radius()));
        assert!(world.settled().is_empty());
        assert_eq!(world.time_ticks(), 0);
    }

    #[test]
    fn test_invalid_config_refuses_to_start() {
        let config = WorldConfig {
            bin_width: -1.0,
            ..Default::default()
        };
        assert!(PhysicsWorld::new(config, 1).is_err());
    }

    #[test]
    fn test_release_copies_active_ball() {
        let mut world = PhysicsWorld::new(WorldConfig::default(), 3).unwrap();
        let before = *world.active();
        world.release_active();
        assert_eq!(world.settled(), &[before]);
        assert_eq!(world.active().pos.y, 50.0);
        assert!((world.active().pos.x - before.pos.x).abs() <= 0.5);
    }

    #[test]
    fn test_release_without_carry_or_jitter_uses_spawn_point() {
        let config = WorldConfig {
            carry_release_x: false,
            spawn_jitter: 0.0,
            ..Default::default()
        };
        let mut world = PhysicsWorld::new(config, 3).unwrap();
        world.active.pos.x = 150.0;
        world.release_active();
        assert_eq!(world.settled()[0].pos.x, 150.0);
        assert_eq!(world.active().pos, Vec2::new(200.0, 50.0));
    }

    #[test]
    fn test_release_with_widest_jitter() {
        let config = WorldConfig {
            spawn_jitter: 200.0,
            ..Default::default()
        };
        let mut world = PhysicsWorld::new(config, 11).unwrap();
        for _ in 0..50 {
            let x = world.active().pos.x;
            world.release_active();
            assert!((world.active().pos.x - x).abs() <= 200.0);
            assert!(world.active().is_finite());
        }
    }

    #[test]
    fn test_radius_sequence_is_seeded() {
        let radii = |seed| {
            let mut world = PhysicsWorld::new(WorldConfig::default(), seed).unwrap();
            (0..20)
                .map(|_| {
                    world.release_active();
                    world.active().radius()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(radii(42), radii(42));
    }

    #[test]
    fn test_bin_edges() {
        let bin = Bin {
            x: 125.0,
            y: 80.0,
            width: 150.0,
            height: 200.0,
        };
        assert_eq!(bin.left(), 125.0);
        assert_eq!(bin.right(), 275.0);
        assert_eq!(bin.top(), 80.0);
        assert_eq!(bin.bottom(), 280.0);
    }
}
