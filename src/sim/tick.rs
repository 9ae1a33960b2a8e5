//! Fixed timestep simulation tick
//!
//! One call advances the world by one physics tick: player control, release,
//! then the world's collision resolver over every settled ball.

use super::state::PhysicsWorld;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Drop the active ball into the bin
    pub release: bool,
    /// Nudge the active ball left (wins if both directions are held)
    pub left_held: bool,
    /// Nudge the active ball right
    pub right_held: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub released: bool,
    /// Ball-ball overlaps resolved
    pub pair_contacts: usize,
    /// Balls touching the bin floor
    pub floor_contacts: usize,
}

/// Advance the world by one fixed tick
pub fn tick(world: &mut PhysicsWorld, input: &TickInput) -> StepSummary {
    world.time_ticks += 1;

    nudge_active(world, input);

    let released = input.release;
    if released {
        world.release_active();
    }

    let contacts = world
        .config
        .resolver
        .resolve(&mut world.settled, &world.bin, &world.config);

    debug_assert!(
        world.settled.iter().all(|b| b.is_finite()),
        "non-finite ball state after tick {}",
        world.time_ticks
    );

    StepSummary {
        released,
        pair_contacts: contacts.pairs,
        floor_contacts: contacts.floor,
    }
}

/// Eased horizontal control of the held ball.
///
/// Speed ramps by `nudge_accel` per tick toward the held direction and drops
/// to zero when the direction flips or nothing is held.
fn nudge_active(world: &mut PhysicsWorld, input: &TickInput) {
    let accel = world.config.nudge_accel;
    if input.left_held {
        if world.horizontal_speed > 0.0 {
            world.horizontal_speed = 0.0;
        }
        world.horizontal_speed -= accel;
    } else if input.right_held {
        if world.horizontal_speed < 0.0 {
            world.horizontal_speed = 0.0;
        }
        world.horizontal_speed += accel;
    } else {
        world.horizontal_speed = 0.0;
        return;
    }

    let ball = &mut world.active;
    ball.pos.x += world.horizontal_speed;

    // Keep the held ball on screen
    let min_x = ball.radius();
    let max_x = world.config.playfield_width - ball.radius();
    if ball.pos.x < min_x {
        ball.pos.x = min_x;
        world.horizontal_speed = 0.0;
    } else if ball.pos.x > max_x {
        ball.pos.x = max_x;
        world.horizontal_speed = 0.0;
    }
}
