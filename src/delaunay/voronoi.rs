//! Voronoi cells derived from a Delaunay triangulation.
//!
//! Voronoi 图是 Delaunay 三角剖分的对偶图：每个三角形的外心是一个 Voronoi 顶点。
//! A cell is stored as the fan of triangles around its site, ordered so that consecutive
//! triangles share an edge. Walking the fan and taking circumcenters yields the cell
//! boundary.
//!
//! # Example
//! ```
//! use delaunay_voronoi::{build_voronoi, triangulate, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(4.0, 6.0),
//! ];
//! let triangles = triangulate(&points);
//! let cells = build_voronoi(&points, &triangles).unwrap();
//!
//! assert_eq!(cells.len(), points.len());
//! assert!(!cells[4].is_open()); // interior site
//! assert!(cells[0].is_open()); // hull site
//! ```

use super::error::{VoronoiError, VoronoiResult};
use super::point::Point;
use super::polygon::Polygon;
use super::triangle::Triangle;
use std::time::Instant;

// ============================================================================
// 公开类型定义
// ============================================================================

/// The Voronoi cell of one site.
///
/// Holds the triangles incident to `site`, ordered into a connected path. Cells of convex
/// hull sites are unbounded; they are reported through [`VoronoiCell::is_open`] and their
/// boundary stops at the outermost circumcenters.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    triangles: Vec<Triangle>,
    site: Point,
}

impl VoronoiCell {
    /// `triangles` must be an ordered path of adjacent triangles sharing `site`.
    pub fn new(triangles: Vec<Triangle>, site: Point) -> Self {
        Self { triangles, site }
    }

    pub fn site(&self) -> Point {
        self.site
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Whether the fan fails to close: fewer than 3 triangles, or the first and last
    /// triangle are not adjacent. Such a site lies on the convex hull.
    pub fn is_open(&self) -> bool {
        match (self.triangles.first(), self.triangles.last()) {
            (Some(first), Some(last)) if self.triangles.len() >= 3 => !first.is_adjacent(last),
            _ => true,
        }
    }

    /// The cell boundary: circumcenters of the fan in order.
    ///
    /// Open cells are not extended towards infinity.
    pub fn to_path_array(&self) -> Vec<Point> {
        self.triangles.iter().map(Triangle::center).collect()
    }

    /// The boundary as SVG polygon points: `"x0,y0 x1,y1 ..."`.
    pub fn to_path_svg_string(&self) -> String {
        self.to_path_array()
            .iter()
            .map(|v| format!("{},{}", v.x, v.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Wraps the boundary in a [`Polygon`] for curve conversion.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.to_path_array(), self.is_open())
    }
}

/// Converts a triangle set plus its original sites into Voronoi cells.
#[derive(Debug, Clone, Copy)]
pub struct VoronoiBuilder<'a> {
    points: &'a [Point],
    triangles: &'a [Triangle],
}

impl<'a> VoronoiBuilder<'a> {
    pub fn new(points: &'a [Point], triangles: &'a [Triangle]) -> Self {
        Self { points, triangles }
    }

    /// Builds one cell per site, in site order.
    ///
    /// # Errors
    /// [`VoronoiError::DisconnectedFan`] if the triangles around any site cannot be linked
    /// into a single path. The whole build fails; no partial diagram is returned.
    pub fn build(&self) -> VoronoiResult<Vec<VoronoiCell>> {
        let start_time = Instant::now();

        let cells = self
            .points
            .iter()
            .map(|&site| self.build_cell(site))
            .collect::<VoronoiResult<Vec<_>>>()
            .inspect_err(|err| log::warn!("Voronoi build failed: {err}"))?;

        log::debug!(
            "Built {} Voronoi cells ({} open) from {} triangles in {:.2?}",
            cells.len(),
            cells.iter().filter(|c| c.is_open()).count(),
            self.triangles.len(),
            start_time.elapsed()
        );
        Ok(cells)
    }

    fn build_cell(&self, site: Point) -> VoronoiResult<VoronoiCell> {
        let incident: Vec<Triangle> = self
            .triangles
            .iter()
            .filter(|t| t.has_vertex(site))
            .copied()
            .collect();

        let path = subset_to_path(&incident).ok_or_else(|| VoronoiError::DisconnectedFan {
            site,
            triangles: incident.clone(),
        })?;
        Ok(VoronoiCell::new(path, site))
    }
}

/// [`VoronoiBuilder::build`] as a free function.
pub fn build_voronoi(points: &[Point], triangles: &[Triangle]) -> VoronoiResult<Vec<VoronoiCell>> {
    VoronoiBuilder::new(points, triangles).build()
}

// ============================================================================
// 内部实现
// ============================================================================

/// Orders a site's triangles into a path of adjacent triangles.
///
/// Starts at the first member and greedily appends the first unvisited neighbour of the
/// path's tail. An open fan entered mid-chain leaves one side unvisited, so on a short
/// result the walk is retried once from a fan end (a member with at most one neighbour).
/// Returns `None` when no walk visits every member.
fn subset_to_path(subset: &[Triangle]) -> Option<Vec<Triangle>> {
    if subset.is_empty() {
        return Some(Vec::new());
    }

    if let Some(path) = walk_from(subset, 0) {
        return Some(path);
    }

    let fan_end = (0..subset.len()).find(|&i| {
        subset
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != i && subset[i].is_adjacent(other))
            .count()
            <= 1
    })?;
    if fan_end == 0 {
        return None;
    }
    walk_from(subset, fan_end)
}

fn walk_from(subset: &[Triangle], start: usize) -> Option<Vec<Triangle>> {
    let mut visited = vec![false; subset.len()];
    visited[start] = true;
    let mut path = vec![subset[start]];
    let mut current = start;

    while path.len() < subset.len() {
        let next = (0..subset.len())
            .find(|&j| !visited[j] && subset[j].is_adjacent(&subset[current]))?;
        visited[next] = true;
        path.push(subset[next]);
        current = next;
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Fan of `n` triangles around the origin; closed when `closed` is set.
    fn fan(n: usize, closed: bool) -> Vec<Triangle> {
        let steps = if closed { n } else { n + 1 };
        let rim: Vec<Point> = (0..steps)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / steps as f64;
                p(10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        (0..n)
            .map(|i| Triangle::new(p(0.0, 0.0), rim[i], rim[(i + 1) % rim.len()]))
            .collect()
    }

    #[test]
    fn closed_fan_is_linked_in_order() {
        let mut triangles = fan(6, true);
        triangles.swap(1, 4);
        let path = subset_to_path(&triangles).unwrap();
        assert_eq!(path.len(), 6);
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
        assert!(path[0].is_adjacent(&path[5]));
    }

    #[test]
    fn open_fan_entered_mid_chain_is_retried_from_its_end() {
        let triangles = fan(4, false);
        // 从链中间开始
        let shuffled = vec![triangles[1], triangles[3], triangles[0], triangles[2]];
        let path = subset_to_path(&shuffled).unwrap();
        assert_eq!(path.len(), 4);
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
        assert!(!path[0].is_adjacent(&path[3]));
    }

    #[test]
    fn disconnected_fan_fails() {
        let triangles = vec![
            Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)),
            Triangle::new(p(0.0, 0.0), p(-1.0, 0.0), p(0.0, -1.0)),
        ];
        assert!(subset_to_path(&triangles).is_none());

        let err = build_voronoi(&[p(0.0, 0.0)], &triangles).unwrap_err();
        let VoronoiError::DisconnectedFan { site, triangles: subset } = err;
        assert_eq!(site, p(0.0, 0.0));
        assert_eq!(subset, triangles);
    }

    #[test]
    fn open_and_closed_cells() {
        let closed = VoronoiCell::new(fan(5, true), p(0.0, 0.0));
        assert!(!closed.is_open());

        let open = VoronoiCell::new(fan(5, false), p(0.0, 0.0));
        assert!(open.is_open());

        let short = VoronoiCell::new(fan(2, true), p(0.0, 0.0));
        assert!(short.is_open());

        assert!(VoronoiCell::new(Vec::new(), p(0.0, 0.0)).is_open());
    }

    #[test]
    fn path_svg_string_lists_circumcenters() {
        let t = Triangle::new(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0));
        let cell = VoronoiCell::new(vec![t, t], p(0.0, 0.0));
        assert_eq!(cell.to_path_svg_string(), "5,3.75 5,3.75");
        assert_eq!(VoronoiCell::new(Vec::new(), p(0.0, 0.0)).to_path_svg_string(), "");
    }
}
