use super::bounds::Bounds;
use super::point::{Point, EPSILON};
use std::fmt;

/// Circumscribed circle of a [`Triangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    pub center: Point,
    pub radius: f64,
}

/// A triangle with its circumcircle cached at construction.
///
/// The vertex order `a, b, c` is kept as given (no winding normalization). The vertices
/// are private so the cached circumcircle can never go stale: every way of replacing them
/// ([`Triangle::set_vertices`], [`Triangle::scaled`], [`Triangle::expanded`]) recomputes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    center: Point,
    radius: f64,
    radius_squared: f64,
}

impl Triangle {
    /// 创建新的三角形
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let mut triangle = Self {
            a,
            b,
            c,
            center: Point::ORIGIN,
            radius: 0.0,
            radius_squared: 0.0,
        };
        triangle.calc_circumcircle();
        triangle
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }

    pub fn c(&self) -> Point {
        self.c
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Replaces all three vertices and recomputes the circumcircle.
    pub fn set_vertices(&mut self, a: Point, b: Point, c: Point) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.calc_circumcircle();
    }

    /// Returns a copy of the cached circumcircle.
    pub fn circumcircle(&self) -> Circumcircle {
        Circumcircle {
            center: self.center,
            radius: self.radius,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn radius_squared(&self) -> f64 {
        self.radius_squared
    }

    /// Solves the circumcircle linear system relative to `a`.
    ///
    /// For collinear vertices (`|G| < ε`) there is no circumcircle; the center falls back
    /// to the midpoint of the bounding box and the radius to the distance from that
    /// midpoint to the box's min corner.
    fn calc_circumcircle(&mut self) {
        let (a, b, c) = (self.a, self.b, self.c);

        let big_a = b.x - a.x;
        let big_b = b.y - a.y;
        let big_c = c.x - a.x;
        let big_d = c.y - a.y;

        let big_e = big_a * (a.x + b.x) + big_b * (a.y + b.y);
        let big_f = big_c * (a.x + c.x) + big_d * (a.y + c.y);

        let big_g = 2.0 * (big_a * (c.y - b.y) - big_b * (c.x - b.x));

        let (center, reference) = if big_g.abs() < EPSILON {
            // 共线：退化为包围盒中点
            let bounds = self.bounds();
            (bounds.center(), bounds.min())
        } else {
            let center = Point::new(
                (big_d * big_e - big_b * big_f) / big_g,
                (big_a * big_f - big_c * big_e) / big_g,
            );
            (center, a)
        };

        self.center = center;
        self.radius_squared = center.distance_squared(&reference);
        self.radius = self.radius_squared.sqrt();
    }

    /// Whether `v` lies inside or on the circumcircle.
    ///
    /// The boundary is inclusive; Bowyer–Watson relies on this for cocircular points.
    pub fn in_circumcircle(&self, v: Point) -> bool {
        self.center.distance_squared(&v) <= self.radius_squared
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x_min: self.a.x.min(self.b.x).min(self.c.x),
            y_min: self.a.y.min(self.b.y).min(self.c.y),
            x_max: self.a.x.max(self.b.x).max(self.c.x),
            y_max: self.a.y.max(self.b.y).max(self.c.y),
        }
    }

    /// 检查点是否严格位于三角形内部
    ///
    /// Barycentric sign test; points on an edge or vertex are outside, as is everything
    /// for a zero-area triangle. No size cutoff applies, so tiny triangles still work.
    pub fn contains_point(&self, p: Point) -> bool {
        let (p0, p1, p2) = (self.a, self.b, self.c);

        let area = 0.5
            * (-p1.y * p2.x + p0.y * (-p1.x + p2.x) + p0.x * (p1.y - p2.y) + p1.x * p2.y);
        let inverse = 1.0 / (2.0 * area);
        if area == 0.0 || !inverse.is_finite() {
            return false;
        }

        let s = inverse
            * (p0.y * p2.x - p0.x * p2.y + (p2.y - p0.y) * p.x + (p0.x - p2.x) * p.y);
        let t = inverse
            * (p0.x * p1.y - p0.y * p1.x + (p0.y - p1.y) * p.x + (p1.x - p0.x) * p.y);

        s > 0.0 && t > 0.0 && (1.0 - s - t) > 0.0
    }

    /// Whether the two triangles share an edge, i.e. at least two vertices (epsilon match).
    pub fn is_adjacent(&self, other: &Triangle) -> bool {
        let a = other.has_vertex(self.a);
        let b = other.has_vertex(self.b);
        let c = other.has_vertex(self.c);
        (a && b) || (a && c) || (b && c)
    }

    /// Whether `p` is one of the vertices (epsilon match).
    pub fn has_vertex(&self, p: Point) -> bool {
        self.a.equals(&p) || self.b.equals(&p) || self.c.equals(&p)
    }

    /// Whether `p` is one of the vertices by exact value.
    pub fn has_vertex_exact(&self, p: Point) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    pub fn centroid(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs()
    }

    /// A new triangle with every vertex scaled about `center`.
    pub fn scaled(&self, factor: f64, center: Point) -> Triangle {
        let mut vertices = self.vertices();
        for v in &mut vertices {
            v.scale(factor, center);
        }
        let [a, b, c] = vertices;
        Triangle::new(a, b, c)
    }

    /// Grows the triangle about its circumcenter so the circumradius increases by `gap`.
    ///
    /// Used to close hairline seams between filled neighbours. Triangles with a zero
    /// radius are returned unchanged.
    pub fn expanded(&self, gap: f64) -> Triangle {
        if self.radius <= 0.0 {
            return *self;
        }
        let factor = (self.radius + gap) / self.radius;
        self.scaled(factor, self.center)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ a : {}, b : {}, c : {}}}", self.a, self.b, self.c)
    }
}
