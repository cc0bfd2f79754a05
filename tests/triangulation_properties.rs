// Property checks of the full pipeline on seeded random point sets.
//
// Most checks use a regular ring (the convex hull) plus random interior points, so the hull
// is known in advance. Border-covering sets put many sites close to the hull edges and
// exercise the hull pocket repair.

use approx::assert_relative_eq;
use delaunay_voronoi::delaunay::sampling::full_cover_points;
use delaunay_voronoi::delaunay::{convex_hull, expand_triangles, polygon_area, total_area};
use delaunay_voronoi::{build_voronoi, triangulate, validate_delaunay, Point, Triangle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

const RING_SIDES: usize = 24;
const RING_RADIUS: f64 = 500.0;
const INTERIOR_RADIUS: f64 = 400.0;
const CENTER: Point = Point::new(500.0, 500.0);

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ring_with_interior(seed: u64, interior: usize) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut points: Vec<Point> = (0..RING_SIDES)
        .map(|i| {
            let angle = i as f64 * TAU / RING_SIDES as f64;
            Point::new(
                CENTER.x + RING_RADIUS * angle.cos(),
                CENTER.y + RING_RADIUS * angle.sin(),
            )
        })
        .collect();

    while points.len() < RING_SIDES + interior {
        let candidate = Point::new(
            rng.random_range(CENTER.x - INTERIOR_RADIUS..CENTER.x + INTERIOR_RADIUS),
            rng.random_range(CENTER.y - INTERIOR_RADIUS..CENTER.y + INTERIOR_RADIUS),
        );
        if candidate.distance(&CENTER) < INTERIOR_RADIUS {
            points.push(candidate);
        }
    }
    points
}

fn seeds() -> impl Iterator<Item = u64> {
    [1_u64, 7, 42, 1234].into_iter()
}

#[test]
fn empty_circumcircle_property() {
    init_logger();
    for seed in seeds() {
        let points = ring_with_interior(seed, 150);
        let triangles = triangulate(&points);
        assert!(
            validate_delaunay(&triangles, &points, 1e-9),
            "seed {seed}: a point lies inside a circumcircle"
        );
    }
}

#[test]
fn triangles_cover_the_convex_hull() {
    for seed in seeds() {
        let points = ring_with_interior(seed, 150);
        let triangles = triangulate(&points);

        let hull = convex_hull(&points);
        assert_eq!(hull.len(), RING_SIDES);
        assert_relative_eq!(
            total_area(&triangles),
            polygon_area(&hull),
            max_relative = 1e-9
        );
    }
}

#[test]
fn border_covering_sets_cover_the_convex_hull() {
    init_logger();
    for seed in 0..12_u64 {
        for count in [25, 100, 500] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let points = full_cover_points(&mut rng, count, 1024.0, 768.0);
            let triangles = triangulate(&points);

            assert_relative_eq!(
                total_area(&triangles),
                1024.0 * 768.0,
                max_relative = 1e-9
            );
            assert!(
                validate_delaunay(&triangles, &points, 1e-9),
                "seed {seed}, {count} points: a point lies inside a circumcircle"
            );
            build_voronoi(&points, &triangles).expect("triangulation fans are connected");
        }
    }
}

#[test]
fn triangles_do_not_overlap() {
    let points = ring_with_interior(99, 120);
    let triangles = triangulate(&points);

    for (i, triangle) in triangles.iter().enumerate() {
        let centroid = triangle.centroid();
        let containing = triangles
            .iter()
            .filter(|other| other.contains_point(centroid))
            .count();
        assert_eq!(containing, 1, "centroid of triangle {i} covered {containing} times");
    }
}

#[test]
fn circumcenters_are_equidistant() {
    let points = ring_with_interior(3, 200);
    for triangle in triangulate(&points) {
        let circle = triangle.circumcircle();
        for v in triangle.vertices() {
            assert_relative_eq!(circle.center.distance(&v), circle.radius, epsilon = 1e-6);
        }
        assert_eq!(triangle.circumcircle(), circle);
    }
}

#[test]
fn triangle_count_matches_delaunator() {
    for seed in seeds() {
        let points = ring_with_interior(seed, 180);
        let triangles = triangulate(&points);

        let reference_points: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let reference = delaunator::triangulate(&reference_points);

        assert_eq!(triangles.len(), reference.triangles.len() / 3, "seed {seed}");
        // Euler: 2n - 2 - h
        assert_eq!(triangles.len(), 2 * points.len() - 2 - RING_SIDES);
    }
}

#[test]
fn every_site_is_used() {
    let points = ring_with_interior(8, 100);
    let triangles = triangulate(&points);
    for site in &points {
        assert!(
            triangles.iter().any(|t| t.has_vertex(*site)),
            "site {site} missing from triangulation"
        );
    }
}

#[test]
fn voronoi_cells_open_exactly_on_the_hull() {
    init_logger();
    for seed in seeds() {
        let points = ring_with_interior(seed, 150);
        let triangles = triangulate(&points);
        let cells = build_voronoi(&points, &triangles).expect("triangulation fans are connected");

        assert_eq!(cells.len(), points.len());
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.is_open(), i < RING_SIDES, "seed {seed}, site {i}");
        }
    }
}

#[test]
fn bezier_data_lengths_follow_cell_shape() {
    let points = ring_with_interior(21, 80);
    let triangles = triangulate(&points);
    let cells = build_voronoi(&points, &triangles).unwrap();

    for cell in &cells {
        let polygon = cell.to_polygon();
        let n = polygon.vertices().len();
        let quadratic = polygon.to_quadratic_bezier_data();
        let cubic = polygon.to_cubic_bezier_data(0.5);

        if n < 3 {
            assert!(quadratic.is_empty() && cubic.is_empty());
        } else if cell.is_open() {
            assert_eq!(quadratic.len(), 2 * n - 3);
            assert_eq!(cubic.len(), 3 * n - 5);
        } else {
            assert_eq!(quadratic.len(), 2 * n + 1);
            assert_eq!(cubic.len(), 3 * n + 1);
            assert_eq!(quadratic.first(), quadratic.last());
            assert_eq!(cubic.first(), cubic.last());

            let svg = polygon.to_cubic_bezier_svg_string(0.5);
            assert!(svg.starts_with("M "));
            assert_eq!(svg.matches(" C ").count(), n);
        }
    }
}

#[test]
fn gap_expansion_keeps_circumcenters() {
    let points = ring_with_interior(5, 60);
    let triangles = triangulate(&points);
    let expanded = expand_triangles(&triangles, 0.15);

    assert_eq!(expanded.len(), triangles.len());
    for (before, after) in triangles.iter().zip(&expanded) {
        assert_relative_eq!(after.radius(), before.radius() + 0.15, epsilon = 1e-6);
        assert_relative_eq!(after.center().x, before.center().x, epsilon = 1e-6);
        assert_relative_eq!(after.center().y, before.center().y, epsilon = 1e-6);
        assert!(after.area() >= before.area());
    }
}

#[test]
fn insertion_order_does_not_change_the_triangulation() {
    let points = ring_with_interior(17, 90);
    let mut reversed = points.clone();
    reversed.reverse();

    let forward = triangulate(&points);
    let backward = triangulate(&reversed);
    assert_eq!(forward.len(), backward.len());

    let same_triangle = |a: &Triangle, b: &Triangle| a.vertices().iter().all(|&v| b.has_vertex(v));
    for triangle in &forward {
        assert!(backward.iter().any(|other| same_triangle(triangle, other)));
    }
}
