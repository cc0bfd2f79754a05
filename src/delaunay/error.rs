use super::point::Point;
use super::triangle::Triangle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// The triangles incident to `site` could not be linked into one connected fan.
    ///
    /// `triangles` is the full incident subset so callers can render it for diagnosis.
    #[error(
        "triangles around site {site} do not form a connected fan ({} incident triangles)",
        .triangles.len()
    )]
    DisconnectedFan { site: Point, triangles: Vec<Triangle> },
}

pub type VoronoiResult<T> = Result<T, VoronoiError>;
