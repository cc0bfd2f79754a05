//! Bowyer–Watson incremental Delaunay triangulation.
//!
//! ```text
//! points ──► super-triangle ──► insert p0, p1, ... ──► drop super corners ──► fill hull pockets ──► triangles
//!                                  │
//!                                  ├─ partition: bad (p in circumcircle) / survivors
//!                                  ├─ keep cavity edges that occur exactly once
//!                                  └─ fan new triangles from p to those edges
//! ```
//!
//! This is the O(n²) textbook variant: every insertion scans the whole working set.
//!
//! The super-triangle is finite, so a thin triangle along the convex hull can have a
//! super corner inside its circumcircle and never appear in the working set. Dropping the
//! corners then leaves a pocket between the result and the hull; [`fill_hull_pockets`]
//! caps those pockets so the result covers the whole hull.

use super::bounds::Bounds;
use super::point::{Point, EPSILON};
use super::triangle::Triangle;
use super::utils::deduplicate_points;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

/// Working-set size from which a parallel scan is worth the rayon overhead.
const PARALLEL_SCAN_THRESHOLD: usize = 2048;

/// Relative tolerance for the pocket-cap circumcircle test, matching the one
/// `validate_delaunay` is usually called with.
const POCKET_CIRCLE_TOLERANCE: f64 = 1e-9;

/// Turns flatter than this (relative to the two edge lengths) count as straight.
const REFLEX_TOLERANCE: f64 = 1e-12;

// ============================================================================
// 配置
// ============================================================================

/// Triangulation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangulatorConfig {
    /// Drop points that epsilon-match an earlier point before inserting.
    ///
    /// Off by default: near-duplicates are inserted and may yield zero-area triangles.
    pub deduplicate: bool,

    /// Run the bad-triangle scan of each insertion on the rayon pool once the working
    /// set is large. Insertions themselves stay sequential.
    pub parallel: bool,
}

// ============================================================================
// 公开 API
// ============================================================================

/// Triangulates `points` with the default [`TriangulatorConfig`].
///
/// Returns an empty set for fewer than 3 (epsilon-distinct) points. For 3 or more
/// non-collinear points the triangles cover the convex hull exactly.
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
    Triangulator::default().triangulate(points)
}

#[derive(Debug, Clone, Default)]
pub struct Triangulator {
    config: TriangulatorConfig,
}

impl Triangulator {
    pub fn new(config: TriangulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriangulatorConfig {
        &self.config
    }

    pub fn triangulate(&self, points: &[Point]) -> Vec<Triangle> {
        let start_time = Instant::now();
        log::debug!("Triangulating {} points", points.len());

        let deduplicated;
        let points = if self.config.deduplicate {
            deduplicated = deduplicate_points(points);
            if deduplicated.len() != points.len() {
                log::debug!(
                    "Dropped {} duplicate points",
                    points.len() - deduplicated.len()
                );
            }
            &deduplicated[..]
        } else {
            points
        };

        if !has_three_distinct_points(points) {
            log::debug!("Fewer than 3 distinct points, nothing to triangulate");
            return Vec::new();
        }

        let Some(mut triangulation) = IncrementalTriangulation::new(points) else {
            return Vec::new();
        };
        triangulation.set_parallel(self.config.parallel);

        for &point in points {
            triangulation.insert(point);
        }

        let mut triangles = triangulation.finish();
        let filled = fill_hull_pockets(&mut triangles, points);
        if filled > 0 {
            log::debug!("Capped {filled} hull pocket triangles");
        }

        log::debug!(
            "Triangulation produced {} triangles in {:.2?}",
            triangles.len(),
            start_time.elapsed()
        );
        triangles
    }
}

/// The working state of a Bowyer–Watson run.
///
/// The working set always covers the super-triangle; [`IncrementalTriangulation::finish`]
/// strips everything still attached to its corners. Points must lie strictly inside the
/// super-triangle, which holds for any point inside the bounds it was created from.
#[derive(Debug, Clone)]
pub struct IncrementalTriangulation {
    super_triangle: Triangle,
    triangles: Vec<Triangle>,
    parallel: bool,
}

impl IncrementalTriangulation {
    /// Seeds the working set with a super-triangle enclosing `points`.
    ///
    /// Returns `None` for an empty point set.
    pub fn new(points: &[Point]) -> Option<Self> {
        create_super_triangle(points).map(Self::with_super_triangle)
    }

    pub fn with_super_triangle(super_triangle: Triangle) -> Self {
        Self {
            super_triangle,
            triangles: vec![super_triangle],
            parallel: false,
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn super_triangle(&self) -> &Triangle {
        &self.super_triangle
    }

    /// The current working set, super-triangle fan included.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Inserts one point, re-triangulating the cavity of every triangle whose
    /// circumcircle contains it.
    pub fn insert(&mut self, point: Point) {
        let working = std::mem::take(&mut self.triangles);

        // 收集不合法三角形，其余的保留到新集合中
        let (bad, mut survivors): (Vec<Triangle>, Vec<Triangle>) =
            if self.parallel && working.len() >= PARALLEL_SCAN_THRESHOLD {
                working
                    .into_par_iter()
                    .partition(|t| t.in_circumcircle(point))
            } else {
                working.into_iter().partition(|t| t.in_circumcircle(point))
            };

        let edges: Vec<Edge> = bad.iter().flat_map(Edge::of_triangle).collect();
        let boundary = unique_edges(&edges);

        log::trace!(
            "Inserting {}: {} bad triangles, {} boundary edges",
            point,
            bad.len(),
            boundary.len()
        );

        survivors.extend(
            boundary
                .into_iter()
                .map(|edge| Triangle::new(edge.a, edge.b, point)),
        );
        self.triangles = survivors;
    }

    /// Drops every triangle that still references a super-triangle corner.
    ///
    /// Corners are matched by exact value, never by epsilon, so input points that merely
    /// lie close to a corner are kept.
    pub fn finish(self) -> Vec<Triangle> {
        let corners = self.super_triangle.vertices();
        self.triangles
            .into_iter()
            .filter(|t| !corners.iter().any(|&corner| t.has_vertex_exact(corner)))
            .collect()
    }
}

/// Creates a triangle enclosing all `points` with plenty of room to spare.
///
/// The triangle extends 10× the point-set extent beyond the bounding box, with two
/// corners skewed a further 3×. A flat extent borrows the other axis (or 1.0) so the
/// triangle never degenerates.
pub fn create_super_triangle(points: &[Point]) -> Option<Triangle> {
    let bounds = Bounds::from_points(points)?;

    let (width, height) = padded_extent(&bounds);
    let dx = width * 10.0;
    let dy = height * 10.0;

    Some(Triangle::new(
        Point::new(bounds.x_min - dx, bounds.y_min - dy * 3.0),
        Point::new(bounds.x_min - dx, bounds.y_max + dy),
        Point::new(bounds.x_max + dx * 3.0, bounds.y_max + dy),
    ))
}

/// Caps the pockets left between `triangles` and the convex hull of `points`.
///
/// The boundary of the triangle set is walked counter-clockwise. While some boundary
/// vertex `b` turns right between its neighbours `a` and `c`, the triangle `(a, b, c)` is
/// added and `b` leaves the boundary. Caps whose circumcircle holds no other point are
/// taken first, so a pocket is filled with the triangles the unbounded triangulation would
/// have. Returns the number of triangles added.
pub fn fill_hull_pockets(triangles: &mut Vec<Triangle>, points: &[Point]) -> usize {
    let mut boundary = boundary_edges(triangles);
    let mut added = 0;

    while let Some((incoming, outgoing)) = next_pocket_cap(&boundary, points) {
        let (a, b) = boundary[incoming];
        let c = boundary[outgoing].1;
        log::trace!("Capping hull pocket at {b} between {a} and {c}");

        triangles.push(Triangle::new(a, b, c));
        boundary[incoming] = (a, c);
        boundary.swap_remove(outgoing);
        added += 1;
    }
    added
}

// ============================================================================
// 内部实现
// ============================================================================

type PointKey = (u64, u64);

fn point_key(p: Point) -> PointKey {
    (p.x.to_bits(), p.y.to_bits())
}

/// Edges used by exactly one triangle, directed so the triangle set lies on their left.
///
/// Returned in triangle order, so the result is deterministic for a given input.
fn boundary_edges(triangles: &[Triangle]) -> Vec<(Point, Point)> {
    let directed: Vec<(Point, Point)> = triangles
        .iter()
        .flat_map(|triangle| {
            let [a, b, c] = triangle.vertices();
            if orientation(a, b, c) >= 0.0 {
                [(a, b), (b, c), (c, a)]
            } else {
                [(b, a), (c, b), (a, c)]
            }
        })
        .collect();

    let undirected = |(a, b): (Point, Point)| {
        let (ka, kb) = (point_key(a), point_key(b));
        if ka <= kb {
            (ka, kb)
        } else {
            (kb, ka)
        }
    };

    let mut uses: HashMap<(PointKey, PointKey), usize> = HashMap::with_capacity(directed.len());
    for &edge in &directed {
        *uses.entry(undirected(edge)).or_default() += 1;
    }

    directed
        .into_iter()
        .filter(|&edge| uses.get(&undirected(edge)) == Some(&1))
        .collect()
}

/// Finds a boundary edge pair `(a → b, b → c)` whose vertex `b` is reflex.
///
/// Vertices with more than one outgoing boundary edge are skipped. Falls back to a cap
/// whose circumcircle is not empty as long as no point lies strictly inside the cap.
fn next_pocket_cap(boundary: &[(Point, Point)], points: &[Point]) -> Option<(usize, usize)> {
    let mut outgoing: HashMap<PointKey, Vec<usize>> = HashMap::with_capacity(boundary.len());
    for (i, &(start, _)) in boundary.iter().enumerate() {
        outgoing.entry(point_key(start)).or_default().push(i);
    }

    let mut fallback = None;
    for (i, &(a, b)) in boundary.iter().enumerate() {
        let j = match outgoing.get(&point_key(b)).map(Vec::as_slice) {
            Some(&[j]) => j,
            _ => continue,
        };
        let c = boundary[j].1;
        if c == a || !is_reflex(a, b, c) {
            continue;
        }

        let cap = Triangle::new(a, b, c);
        let limit = cap.radius_squared() * (1.0 - POCKET_CIRCLE_TOLERANCE);
        let mut others = points.iter().filter(|&&p| !cap.has_vertex(p));
        if others
            .clone()
            .all(|p| cap.center().distance_squared(p) >= limit)
        {
            return Some((i, j));
        }
        if fallback.is_none() && others.all(|&p| !cap.contains_point(p)) {
            fallback = Some((i, j));
        }
    }
    fallback
}

/// Twice the signed area of `(a, b, c)`; positive when counter-clockwise.
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether the boundary turns right at `b` (the triangle set lies on the left).
fn is_reflex(a: Point, b: Point, c: Point) -> bool {
    let scale = a.distance(&b) * b.distance(&c);
    orientation(a, b, c) < -REFLEX_TOLERANCE * scale
}

/// An undirected edge, only alive during one insertion.
#[derive(Debug, Clone, Copy)]
struct Edge {
    a: Point,
    b: Point,
}

impl Edge {
    fn of_triangle(triangle: &Triangle) -> [Edge; 3] {
        let [a, b, c] = triangle.vertices();
        [Edge { a, b }, Edge { a: b, b: c }, Edge { a: c, b: a }]
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// Keeps the edges that occur exactly once; shared edges are interior to the cavity.
fn unique_edges(edges: &[Edge]) -> Vec<Edge> {
    edges
        .iter()
        .enumerate()
        .filter(|&(i, edge)| {
            !edges
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && other == edge)
        })
        .map(|(_, edge)| *edge)
        .collect()
}

fn padded_extent(bounds: &Bounds) -> (f64, f64) {
    let (width, height) = (bounds.width(), bounds.height());
    let largest = width.max(height);
    let fallback = if largest > EPSILON { largest } else { 1.0 };
    (
        if width > EPSILON { width } else { fallback },
        if height > EPSILON { height } else { fallback },
    )
}

fn has_three_distinct_points(points: &[Point]) -> bool {
    let Some(first) = points.first() else {
        return false;
    };
    let Some(second) = points.iter().find(|p| !p.equals(first)) else {
        return false;
    };
    points
        .iter()
        .any(|p| !p.equals(first) && !p.equals(second))
}
