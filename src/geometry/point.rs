//! Points and vectors in the sketch plane.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A location in sketch coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}

impl Pt {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Pt) -> f64 {
        Vec2::between(*self, other).mag()
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: Pt, t: f64) -> Pt {
        *self + Vec2::between(*self, other) * t
    }
}

/// A displacement, or a two-component parameter such as `(t, s)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The vector pointing from `a` to `b`.
    pub fn between(a: Pt, b: Pt) -> Self {
        Self {
            x: b.x - a.x,
            y: b.y - a.y,
        }
    }

    pub fn mag(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Left-hand normal (counter-clockwise rotation by 90 degrees).
    pub fn perp(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }
}

impl Add<Vec2> for Pt {
    type Output = Pt;

    fn add(self, rhs: Vec2) -> Pt {
        Pt::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pt {
    type Output = Vec2;

    fn sub(self, rhs: Pt) -> Vec2 {
        Vec2::between(rhs, self)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}
