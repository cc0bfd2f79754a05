//! Validation and post-processing helpers for triangulations.

use super::point::Point;
use super::triangle::Triangle;

// ============================================================================
// 公开 API
// ============================================================================

/// Checks the empty-circumcircle property.
///
/// No point of `points` may lie strictly inside any triangle's circumcircle. Points on
/// the circle (cocircular input) are allowed; `tolerance` is relative to the squared
/// radius. Triangle vertices themselves are skipped.
///
/// # Example
/// ```
/// use delaunay_voronoi::{triangulate, validate_delaunay, Point};
///
/// let points = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(1.0, 3.0), Point::new(3.0, 3.5)];
/// let triangles = triangulate(&points);
/// assert!(validate_delaunay(&triangles, &points, 1e-9));
/// ```
pub fn validate_delaunay(triangles: &[Triangle], points: &[Point], tolerance: f64) -> bool {
    triangles.iter().all(|triangle| {
        let limit = triangle.radius_squared() * (1.0 - tolerance);
        points
            .iter()
            .filter(|&&p| !triangle.has_vertex(p))
            .all(|p| triangle.center().distance_squared(p) >= limit)
    })
}

/// Convex hull in counter-clockwise order (Andrew's monotone chain).
///
/// Collinear points on the hull boundary are dropped. Fewer than 3 points are returned
/// as given.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len() * 2);

    // 下凸包
    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    // 上凸包
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop();
    hull
}

/// Unsigned area of a simple polygon (shoelace formula).
pub fn polygon_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice_area: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice_area.abs() / 2.0
}

/// Total area covered by a triangle set.
pub fn total_area(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(Triangle::area).sum()
}

/// Grows every triangle about its circumcenter by `gap`, closing the hairline seams
/// that appear between filled neighbours when rendering.
///
/// Each result is a freshly constructed triangle with its own circumcircle; the input
/// is left untouched.
pub fn expand_triangles(triangles: &[Triangle], gap: f64) -> Vec<Triangle> {
    triangles.iter().map(|t| t.expanded(gap)).collect()
}

/// Drops later points that epsilon-match an earlier one, preserving order.
pub fn deduplicate_points(points: &[Point]) -> Vec<Point> {
    let mut unique_points: Vec<Point> = Vec::with_capacity(points.len());

    for &point in points {
        if !unique_points.iter().any(|p| p.equals(&point)) {
            unique_points.push(point);
        }
    }

    unique_points
}

// ============================================================================
// 内部辅助函数
// ============================================================================

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn hull_drops_interior_and_collinear_points() {
        let points = [
            p(0.0, 0.0),
            p(5.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(4.0, 6.0),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&p(5.0, 0.0)));
        assert!(!hull.contains(&p(4.0, 6.0)));
        assert_eq!(polygon_area(&hull), 100.0);
    }

    #[test]
    fn polygon_area_ignores_winding() {
        let ccw = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0)];
        let cw = [p(0.0, 0.0), p(0.0, 3.0), p(4.0, 0.0)];
        assert_eq!(polygon_area(&ccw), 6.0);
        assert_eq!(polygon_area(&cw), 6.0);
    }

    #[test]
    fn deduplicate_keeps_first_occurrence() {
        let points = [p(1.0, 1.0), p(2.0, 2.0), p(1.0 + 1e-8, 1.0), p(3.0, 3.0)];
        assert_eq!(
            deduplicate_points(&points),
            vec![p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)]
        );
    }

    #[test]
    fn validate_rejects_point_inside_circumcircle() {
        let t = Triangle::new(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0));
        assert!(validate_delaunay(&[t], &t.vertices(), 1e-9));
        assert!(!validate_delaunay(&[t], &[p(5.0, 4.0)], 1e-9));
        // 共圆点允许落在圆上
        assert!(validate_delaunay(&[t], &[p(5.0, -2.5)], 1e-9));
    }

    #[test]
    fn expand_triangles_returns_new_set() {
        let t = Triangle::new(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0));
        let expanded = expand_triangles(&[t], 1.0);
        assert_eq!(expanded.len(), 1);
        assert!(expanded[0].area() > t.area());
        assert!((expanded[0].radius() - 7.25).abs() < 1e-9);
    }
}
