//! # Paraboloid Lifting
//!
//! Maps planar points onto `z = x² + y²`. The lower hull of the lifted set
//! projects to the Delaunay triangulation of the planar set, so hull adjacency
//! gives Voronoi neighbours.
//!
//! Lifted points are sorted lexicographically by exact `(x, y, z)`, which is
//! the order [`SeedSearch::LastAdded`](crate::SeedSearch::LastAdded) relies on.
//! Near-duplicates end up adjacent and the strict visibility test discards
//! the later copy.

use crate::core::point::{Point, PointId};
use glam::DVec2;
use std::cmp::Ordering;

/// Lifts `(x, y)` onto the paraboloid.
///
/// # Examples
/// ```
/// use incremental_hull::lift;
/// let p = lift(1.0, 2.0, 7);
/// assert_eq!(p.position.z, 5.0);
/// assert_eq!(p.id, 7);
/// ```
pub fn lift(x: f64, y: f64, id: PointId) -> Point {
    Point::new(x, y, x * x + y * y, id)
}

/// Lifts every planar point, tagging it with its input index, and sorts the
/// result with [`lexicographic_cmp`].
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use incremental_hull::lift_points;
/// let lifted = lift_points(&[DVec2::new(3.0, 0.0), DVec2::new(-1.0, 2.0)]);
/// assert_eq!(lifted[0].id, 1);
/// assert_eq!(lifted[1].id, 0);
/// ```
pub fn lift_points(points: &[DVec2]) -> Vec<Point> {
    let mut lifted: Vec<Point> = points
        .iter()
        .enumerate()
        .map(|(id, p)| lift(p.x, p.y, id))
        .collect();
    lifted.sort_by(lexicographic_cmp);
    lifted
}

/// Orders points by `x`, then `y`, then `z`, comparing exact coordinates with
/// [`f64::total_cmp`].
///
/// This is a total order, so it is safe for `sort_by` on any input. Use
/// [`Point::coincides`] when near-equal coordinates should count as the same
/// point.
pub fn lexicographic_cmp(a: &Point, b: &Point) -> Ordering {
    let (pa, pb) = (a.position, b.position);
    pa.x.total_cmp(&pb.x)
        .then_with(|| pa.y.total_cmp(&pb.y))
        .then_with(|| pa.z.total_cmp(&pb.z))
}
