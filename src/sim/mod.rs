//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (drop order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod resolver;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{CollisionResult, ball_ball_collision, ball_floor_collision, contain_in_bin};
pub use resolver::{CollisionResolver, ContactCounts, DepthSplit};
pub use state::{Ball, Bin, PhysicsWorld};
pub use tick::{StepSummary, TickInput, tick};
