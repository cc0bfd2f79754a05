//! Smooth outlines for Voronoi cells as quadratic or cubic Bezier data.
//!
//! With `n` ring vertices `v[i]` and edge midpoints `m(i) = mid(v[i], v[i+1 mod n])`:
//!
//! | mode      | closed ring        | open ring                    |
//! |-----------|--------------------|------------------------------|
//! | quadratic | `2n + 1` points    | `2n - 3` points              |
//! | cubic     | `3n + 1` points    | `3n - 5` points              |
//!
//! Both sequences start at `m(0)`. Closed data ends back on `m(0)`; open data stops at
//! `m(n-2)` and never synthesizes a closing segment. Rings with fewer than 3 vertices
//! convert to nothing.

use super::point::Point;

/// An ordered vertex ring, usually the circumcenters of a Voronoi cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
    is_open: bool,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>, is_open: bool) -> Self {
        Self { vertices, is_open }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of ring edges the curve data walks past `m(0)`.
    fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if self.is_open {
            n - 2
        } else {
            n
        }
    }

    fn vertex(&self, index: usize) -> Point {
        self.vertices[index % self.vertices.len()]
    }

    fn edge_midpoint(&self, index: usize) -> Point {
        self.vertex(index).midpoint(&self.vertex(index + 1))
    }

    /// Quadratic curve data: `[m0, v1, m1, v2, m2, ...]`.
    ///
    /// The first entry is the start point; after that come `(control, end)` pairs, each
    /// ring vertex acting as the control point between two edge midpoints.
    pub fn to_quadratic_bezier_data(&self) -> Vec<Point> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }

        let limit = self.segment_count();
        let mut qbezier = Vec::with_capacity(1 + 2 * limit);
        qbezier.push(self.edge_midpoint(0));
        for t in 1..=limit {
            qbezier.push(self.vertex(t));
            qbezier.push(self.edge_midpoint(t));
        }
        qbezier
    }

    /// Cubic curve data: the start point followed by `(control1, control2, end)` triples.
    ///
    /// For ring vertex `b` between midpoints `ma` (incoming edge) and `mb` (outgoing edge)
    /// the controls are `ma + (b - ma) * threshold` and `mb + (b - mb) * threshold`. A
    /// threshold of `0` puts them on the midpoints (straight chords); `1` puts both on the
    /// vertex. Values outside `[0, 1]` extrapolate and are not clamped.
    pub fn to_cubic_bezier_data(&self, threshold: f64) -> Vec<Point> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }

        let limit = self.segment_count();
        let mut cbezier = Vec::with_capacity(1 + 3 * limit);
        cbezier.push(self.edge_midpoint(0));
        for t in 0..limit {
            let b = self.vertex(t + 1);
            let a_center = self.edge_midpoint(t);
            let b_center = self.edge_midpoint(t + 1);

            cbezier.push(a_center.lerp(&b, threshold));
            cbezier.push(b_center.lerp(&b, threshold));
            cbezier.push(b_center);
        }
        cbezier
    }

    /// SVG path data: `"M x y Q cx cy, ex ey Q ..."`. Empty for fewer than 3 vertices.
    pub fn to_quadratic_bezier_svg_string(&self) -> String {
        let qdata = self.to_quadratic_bezier_data();
        let Some((start, rest)) = qdata.split_first() else {
            return String::new();
        };

        std::iter::once(format!("M {} {}", start.x, start.y))
            .chain(rest.chunks_exact(2).map(|pair| {
                format!("Q {} {}, {} {}", pair[0].x, pair[0].y, pair[1].x, pair[1].y)
            }))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// SVG path data: `"M x y C c1x c1y, c2x c2y, ex ey C ..."`. Empty for fewer than 3
    /// vertices.
    pub fn to_cubic_bezier_svg_string(&self, threshold: f64) -> String {
        let cdata = self.to_cubic_bezier_data(threshold);
        let Some((start, rest)) = cdata.split_first() else {
            return String::new();
        };

        std::iter::once(format!("M {} {}", start.x, start.y))
            .chain(rest.chunks_exact(3).map(|triple| {
                format!(
                    "C {} {}, {} {}, {} {}",
                    triple[0].x, triple[0].y, triple[1].x, triple[1].y, triple[2].x, triple[2].y
                )
            }))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
