use super::{Figure, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Circle with a center and a radius. The radius is expected to be
/// non-negative but is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Figure for Circle {
    fn describe(&self) -> String {
        format!("Circle of radius {} and center {}", self.radius, self.center)
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn surface(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
