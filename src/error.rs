//! Error types for configuration and vector math.
//!
//! A world under a valid configuration never fails during a tick, so the only
//! errors are arithmetic degeneracies and rejected configs.

use thiserror::Error;

/// Failures of the checked vector operations in [`crate::sim::vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Division of a vector by a zero scalar.
    #[error("division of a vector by zero")]
    DivisionByZero,
    /// Normalization of a vector with zero (or non-finite) length.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}

/// Reasons a [`crate::WorldConfig`] is refused.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No radii to draw new balls from.
    #[error("radius set is empty")]
    EmptyRadiusSet,
    /// A radius in the radius set is zero or negative.
    #[error("ball radius must be positive, got {value}")]
    NonPositiveRadius { value: f32 },
    /// A playfield or bin dimension is zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },
    /// A rate or threshold is negative.
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    /// A field holds NaN or infinity.
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    /// A damping/restitution style factor is outside its allowed range.
    #[error("{name} = {value} is outside [0, 1]")]
    FactorOutOfRange { name: &'static str, value: f32 },
    /// A value is larger than the playfield allows.
    #[error("{name} = {value} exceeds {max}")]
    TooLarge {
        name: &'static str,
        value: f32,
        max: f32,
    },
    /// An edge of the bin lies outside the playfield.
    #[error("bin {edge} edge at {value} is outside the playfield (limit {limit})")]
    BinOutsidePlayfield {
        edge: &'static str,
        value: f32,
        limit: f32,
    },
    /// A ball in the radius set cannot fit between the bin walls.
    #[error("ball radius {radius} does not fit in a bin {bin_width} wide")]
    BallWiderThanBin { radius: f32, bin_width: f32 },
    /// Reading a config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Parsing a config file failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
