use super::{Figure, Point};
use serde::{Deserialize, Serialize};

/// Rectangle given by two opposite corners. Width and height are absolute
/// differences, so corner order does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    p1: Point,
    p2: Point,
}

impl Rectangle {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn corners(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    pub fn width(&self) -> f64 {
        (self.p1.x() - self.p2.x()).abs()
    }

    pub fn height(&self) -> f64 {
        (self.p1.y() - self.p2.y()).abs()
    }

    /// Moves the first corner by `(dx, dy)`. The second corner stays put, so
    /// the rectangle is reshaped rather than translated.
    pub fn displace(&mut self, dx: f64, dy: f64) {
        self.p1 = self.p1.offset(dx, dy);
    }
}

impl Figure for Rectangle {
    fn describe(&self) -> String {
        format!("Rectangle with corners {} and {}", self.p1, self.p2)
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    fn surface(&self) -> f64 {
        self.width() * self.height()
    }
}
