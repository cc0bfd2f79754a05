//! Delaunay 三角剖分与 Voronoi 图模块
//!
//! Core geometry pipeline:
//! - **Delaunay triangulation**: Bowyer–Watson incremental insertion
//! - **Voronoi cells**: the dual of the triangulation, one fan of triangles per site
//! - **Bezier outlines**: smooth quadratic/cubic curves and SVG path data per cell
//!
//! # 架构概览
//!
//! ```text
//! 输入点集 (Vec<Point>)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │   triangulate()  │  ── Delaunay 三角剖分
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Vec<Triangle>
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ build_voronoi()  │  ── Voronoi 单元格 (may fail with DisconnectedFan)
//! └────────┬─────────┘
//!          │
//!          ▼
//!   Vec<VoronoiCell> ──► to_polygon() ──► Bezier data / SVG path strings
//! ```
//!
//! # 使用示例
//!
//! ```
//! use delaunay_voronoi::{build_voronoi, triangulate, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 0.0),
//!     Point::new(50.0, 100.0),
//!     Point::new(50.0, 40.0),
//! ];
//!
//! let triangles = triangulate(&points);
//! let cells = build_voronoi(&points, &triangles).unwrap();
//!
//! for cell in cells.iter().filter(|c| !c.is_open()) {
//!     let path = cell.to_polygon().to_quadratic_bezier_svg_string();
//!     assert!(path.starts_with("M "));
//! }
//! ```

mod bounds;
#[allow(clippy::module_inception)]
mod delaunay;
mod error;
mod point;
mod polygon;
pub mod sampling;
mod triangle;
mod utils;
mod voronoi;


// ============================================================================
// 公开 API
// ============================================================================

pub use bounds::Bounds;
pub use delaunay::{
    create_super_triangle, fill_hull_pockets, triangulate, IncrementalTriangulation, Triangulator,
    TriangulatorConfig,
};
pub use error::{VoronoiError, VoronoiResult};
pub use point::{Point, EPSILON};
pub use polygon::Polygon;
pub use triangle::{Circumcircle, Triangle};
pub use utils::{
    convex_hull, deduplicate_points, expand_triangles, polygon_area, total_area,
    validate_delaunay,
};
pub use voronoi::{build_voronoi, VoronoiBuilder, VoronoiCell};
