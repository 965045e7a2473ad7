use nalgebra as na;
use serde::{Deserialize, Serialize};

/// A point or direction in the vertical plane of an experiment, metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Point at distance `r` along a direction `angle` radians counter-clockwise from +x.
    pub fn polar(r: f64, angle: f64) -> Self {
        let rotated = na::Rotation2::new(angle) * na::Vector2::new(r, 0.0);
        Self::from_na(&rotated)
    }

    pub fn from_na(v: &na::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}
