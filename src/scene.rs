//! Draw primitives for an external renderer
//!
//! The simulation does not draw. It hands the frame driver a flat list of
//! outlined shapes in screen coordinates, back to front.

use glam::Vec2;

use crate::sim::{Ball, Bin, PhysicsWorld};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

pub const ACTIVE_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
pub const SETTLED_COLOR: Color = [0.0, 0.0, 1.0, 1.0];
pub const BIN_COLOR: Color = [0.0, 1.0, 0.0, 1.0];

/// Outline thickness in playfield units
pub const STROKE_WIDTH: f32 = 1.0;

/// An outlined shape to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
}

impl Shape {
    fn ball(ball: &Ball, color: Color) -> Self {
        Shape::Circle {
            center: ball.pos,
            radius: ball.radius(),
            color,
        }
    }

    fn bin(bin: &Bin) -> Self {
        Shape::Rect {
            min: Vec2::new(bin.x, bin.y),
            size: Vec2::new(bin.width, bin.height),
            color: BIN_COLOR,
        }
    }
}

/// Bin, then settled balls in drop order, then the active ball on top
pub fn draw_list(world: &PhysicsWorld) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(world.settled().len() + 2);
    shapes.push(Shape::bin(world.bin()));
    shapes.extend(world.settled().iter().map(|b| Shape::ball(b, SETTLED_COLOR)));
    shapes.push(Shape::ball(world.active(), ACTIVE_COLOR));
    shapes
}
