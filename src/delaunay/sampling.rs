//! Random site generation.

use super::point::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters for [`sample_points`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Total number of points to produce.
    pub count: usize,
    pub width: f64,
    pub height: f64,

    /// Seed the rectangle border and corners before filling the interior, so the
    /// triangulation covers the whole area.
    pub full_cover: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            count: 25,
            width: 1024.0,
            height: 768.0,
            full_cover: false,
        }
    }
}

/// Uniformly distributed points in `[0, width) × [0, height)`.
pub fn random_points<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    width: f64,
    height: f64,
) -> Vec<Point> {
    (0..count)
        .map(|_| random_point(rng, width, height))
        .collect()
}

/// Border-covering point set.
///
/// About `sqrt(count) / 2` points are spread over the four rectangle edges (split by the
/// aspect ratio, each placed in mirrored pairs on opposite edges), then the four corners,
/// then uniform interior points until `count` is reached. The result may exceed `count`
/// for very small counts, since border pairs and corners are always emitted whole.
pub fn full_cover_points<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    width: f64,
    height: f64,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(count.max(4));

    let border_points = (count as f64).sqrt();
    let ratio = if width > 0.0 { height / width } else { 1.0 };
    let horizontal = ((border_points / 2.0) * ratio).round() as usize;
    let vertical = ((border_points / 2.0) - horizontal as f64).max(0.0).ceil() as usize;

    for _ in 0..vertical {
        points.push(Point::new(0.0, random_coordinate(rng, height)));
        points.push(Point::new(width, random_coordinate(rng, height)));
    }
    for _ in 0..horizontal {
        points.push(Point::new(random_coordinate(rng, width), 0.0));
        points.push(Point::new(random_coordinate(rng, width), height));
    }

    points.push(Point::new(0.0, 0.0));
    points.push(Point::new(width, 0.0));
    points.push(Point::new(width, height));
    points.push(Point::new(0.0, height));

    while points.len() < count {
        points.push(random_point(rng, width, height));
    }
    points
}

/// Generates points according to `config`.
pub fn sample_points<R: Rng + ?Sized>(rng: &mut R, config: &SamplingConfig) -> Vec<Point> {
    if config.full_cover {
        full_cover_points(rng, config.count, config.width, config.height)
    } else {
        random_points(rng, config.count, config.width, config.height)
    }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Point {
    Point::new(random_coordinate(rng, width), random_coordinate(rng, height))
}

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}
