#![warn(clippy::all, rust_2018_idioms)]

pub mod delaunay;

pub use delaunay::{
    build_voronoi, triangulate, validate_delaunay, Circumcircle, Point, Polygon, Triangle,
    Triangulator, TriangulatorConfig, VoronoiBuilder, VoronoiCell, VoronoiError,
};
