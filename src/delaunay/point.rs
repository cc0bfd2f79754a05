//! 2D point type shared by every stage of the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used by all epsilon comparisons in this crate.
pub const EPSILON: f64 = 1e-6;

/// A 2D coordinate.
///
/// The derived [`PartialEq`] is *exact* value equality. Geometric code that wants
/// tolerance should use [`Point::equals`] instead; exact equality is reserved for
/// identity checks such as recognizing the super-triangle corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Epsilon-tolerant equality, checked on each axis independently.
    ///
    /// This is not a metric and not transitive: `a ~ b` and `b ~ c` does not imply `a ~ c`.
    pub fn equals(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    /// Scales this point towards/away from `center` in place.
    ///
    /// A factor of `1.0` leaves the point unchanged. Returns `self` for chaining.
    pub fn scale(&mut self, factor: f64, center: Point) -> &mut Self {
        self.x = center.x + (self.x - center.x) * factor;
        self.y = center.y + (self.y - center.y) * factor;
        self
    }

    /// [`Point::scale`] about the origin.
    pub fn scale_origin(&mut self, factor: f64) -> &mut Self {
        self.scale(factor, Self::ORIGIN)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        self.lerp(other, 0.5)
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
