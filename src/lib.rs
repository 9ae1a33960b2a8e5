//! Ball Bin - drop balls into a bin and watch them pack
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, collisions, world state, tick)
//! - `config`: Validated world configuration
//! - `scene`: Draw primitives for an external renderer
//! - `error`: Error types

pub mod config;
pub mod error;
pub mod scene;
pub mod sim;

pub use config::WorldConfig;
pub use error::{ConfigError, VectorError};

/// Default configuration constants
pub mod consts {
    /// Fixed simulation timestep (one physics tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 300.0;

    /// Bin dimensions (bin is horizontally centred in the playfield)
    pub const BIN_WIDTH: f32 = 150.0;
    pub const BIN_HEIGHT: f32 = 200.0;
    pub const BIN_TOP: f32 = 80.0;

    /// Height at which new active balls appear
    pub const SPAWN_Y: f32 = 50.0;

    /// Downward acceleration per tick (screen y grows downward)
    pub const GRAVITY_Y: f32 = 0.5;

    /// Fraction of the normal relative velocity exchanged on ball-ball contact
    pub const RESTITUTION: f32 = 0.25;
    /// Fraction of vertical speed kept (and inverted) on floor contact
    pub const BOUNCE_DAMPING: f32 = 0.3;
    /// Speeds below this are snapped to zero
    pub const VELOCITY_FLOOR: f32 = 0.1;

    /// Radii a new ball can be drawn from
    pub const BALL_RADII: [f32; 6] = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0];

    /// Horizontal nudge ramp per tick while a direction is held
    pub const NUDGE_ACCEL: f32 = 0.3;
    /// Max horizontal offset applied to a freshly spawned ball
    pub const SPAWN_JITTER: f32 = 0.5;

    /// Downward step attempted per tick by the step-descent resolver
    pub const DESCENT_STEP: f32 = 1.0;
}
