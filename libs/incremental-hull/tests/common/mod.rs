//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use glam::{DVec2, DVec3};
use incremental_hull::{ConvexHull, Point, PointId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The four corners of the unit tetrahedron, ids 0 to 3.
pub fn unit_tetrahedron() -> [Point; 4] {
    [
        Point::new(0.0, 0.0, 0.0, 0),
        Point::new(1.0, 0.0, 0.0, 1),
        Point::new(0.0, 1.0, 0.0, 2),
        Point::new(0.0, 0.0, 1.0, 3),
    ]
}

/// `count` random points on the unit sphere, ids in generation order.
pub fn sphere_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let v = DVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let length = v.length();
        if (0.1..=1.0).contains(&length) {
            points.push(Point::from_position(v / length, points.len()));
        }
    }
    points
}

/// `count` random planar points in `[-extent, extent]²`.
pub fn planar_points(count: usize, extent: f64, seed: u64) -> Vec<DVec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            DVec2::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}

/// Face triples in a canonical order for set comparison.
pub fn sorted_triangles(hull: &ConvexHull) -> Vec<[PointId; 3]> {
    let mut triangles = hull.triangles();
    triangles.sort_unstable();
    triangles
}

/// Undirected edges shared by two faces.
pub fn shared_edges(a: [PointId; 3], b: [PointId; 3]) -> usize {
    let edges = |t: [PointId; 3]| {
        [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])].map(|(u, v)| (u.min(v), u.max(v)))
    };
    let eb = edges(b);
    edges(a).iter().filter(|e| eb.contains(e)).count()
}
