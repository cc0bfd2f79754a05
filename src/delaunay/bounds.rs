use super::point::Point;

/// Axis-aligned bounding box.
///
/// `width`/`height` may be zero for degenerate inputs (a single point, collinear points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Bounding box of a point set, or `None` for an empty set.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut bounds = Self {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x,
            y_max: first.y,
        };
        for point in iter {
            bounds.x_min = bounds.x_min.min(point.x);
            bounds.y_min = bounds.y_min.min(point.y);
            bounds.x_max = bounds.x_max.max(point.x);
            bounds.y_max = bounds.y_max.max(point.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn min(&self) -> Point {
        Point::new(self.x_min, self.y_min)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x_max, self.y_max)
    }

    pub fn center(&self) -> Point {
        self.min().midpoint(&self.max())
    }
}
