//! Layout primitives shared by the panel and the rasterizer
//!
//! All coordinates are in surface pixels with the origin at the top-left
//! corner and `y` growing downward.

use std::f32::consts::FRAC_PI_2;
use std::ops::{Add, Neg, Sub};

/// A point or offset in surface pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise product
    pub fn scale(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x * other.x, self.y * other.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow the rectangle by `dx`/`dy` on every side
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + dx * 2.0,
            self.height + dy * 2.0,
        )
    }
}

/// Points tracing a rounded rectangle clockwise, starting at the top edge.
///
/// `radius` is clamped to half of the shorter side. Each corner arc is
/// approximated by `segments` line segments; zero segments (or a zero
/// radius) yields the four plain corners.
pub fn rounded_rect_points(rect: Rect, radius: f32, segments: usize) -> Vec<Vec2> {
    let radius = radius
        .max(0.0)
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);

    if radius <= 0.0 || segments == 0 {
        return vec![
            Vec2::new(rect.x, rect.y),
            Vec2::new(rect.right(), rect.y),
            Vec2::new(rect.right(), rect.bottom()),
            Vec2::new(rect.x, rect.bottom()),
        ];
    }

    // Arc centres, in clockwise order, paired with the angle each arc starts at.
    // Angles follow screen space (y down), so -90° points up.
    let arcs = [
        (Vec2::new(rect.right() - radius, rect.y + radius), -FRAC_PI_2),
        (Vec2::new(rect.right() - radius, rect.bottom() - radius), 0.0),
        (Vec2::new(rect.x + radius, rect.bottom() - radius), FRAC_PI_2),
        (Vec2::new(rect.x + radius, rect.y + radius), 2.0 * FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(arcs.len() * (segments + 1));
    for (centre, start) in arcs {
        for step in 0..=segments {
            let angle = start + FRAC_PI_2 * step as f32 / segments as f32;
            points.push(Vec2::new(
                centre.x + radius * angle.cos(),
                centre.y + radius * angle.sin(),
            ));
        }
    }
    points
}
