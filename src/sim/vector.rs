//! 2D vector math
//!
//! Thin free-function layer over [`glam::Vec2`]. Everything here is total
//! except the checked division and normalization, which return
//! [`VectorError`] instead of letting NaN or infinity into world state.

use glam::Vec2;

use crate::error::VectorError;

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn negate(v: Vec2) -> Vec2 {
    Vec2::new(-v.x, -v.y)
}

#[inline]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    add(a, negate(b))
}

#[inline]
pub fn scale(v: Vec2, s: f32) -> Vec2 {
    Vec2::new(v.x * s, v.y * s)
}

/// Add the same scalar to both components
#[inline]
pub fn add_scalar(v: Vec2, s: f32) -> Vec2 {
    Vec2::new(v.x + s, v.y + s)
}

#[inline]
pub fn sub_scalar(v: Vec2, s: f32) -> Vec2 {
    add_scalar(v, -s)
}

/// Divide by a scalar. Division by zero is an error, never ±infinity.
#[inline]
pub fn div_scale(v: Vec2, s: f32) -> Result<Vec2, VectorError> {
    if s == 0.0 {
        return Err(VectorError::DivisionByZero);
    }
    Ok(scale(v, 1.0 / s))
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Scalar 2D cross product (determinant form)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Euclidean length, exact for axis-aligned vectors. Never negative.
#[inline]
pub fn length(v: Vec2) -> f32 {
    if v.x == 0.0 {
        v.y.abs()
    } else if v.y == 0.0 {
        v.x.abs()
    } else {
        (v.x * v.x + v.y * v.y).sqrt()
    }
}

/// Unit vector in the direction of `v`
pub fn normalize(v: Vec2) -> Result<Vec2, VectorError> {
    let len = length(v);
    if len == 0.0 || !len.is_finite() {
        return Err(VectorError::ZeroLength);
    }
    div_scale(v, len)
}

/// Unit vector in the direction of `v`, or `fallback` if `v` has no direction
#[inline]
pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    normalize(v).unwrap_or(fallback)
}

/// Angle from the +x axis in radians, in (-π, π]
#[inline]
pub fn angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
