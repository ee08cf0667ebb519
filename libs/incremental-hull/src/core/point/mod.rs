//! Points with a stable integer identity.
//!
//! Coordinates are compared within a tolerance; ordering is by id only, which
//! is what face construction uses to pick a canonical first vertex.

use crate::core::vec3::Vec3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Stable identifier of an input point, usually its index in the input.
pub type PointId = usize;

/// A 3D point tagged with its input id.
///
/// `Point` deliberately has no `PartialEq`: use [`Point::coincides`] for
/// coordinate equality and [`Point::cmp_by_id`] for ordering.
///
/// # Example
///
/// ```rust
/// use incremental_hull::Point;
///
/// let a = Point::new(1.0, 2.0, 5.0, 0);
/// let b = Point::new(1.0 + 1e-12, 2.0, 5.0, 7);
/// assert!(a.coincides(&b, 1e-9));
/// assert!(a.cmp_by_id(&b).is_lt());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    /// Position in space.
    pub position: Vec3,
    /// Input id, unique for the lifetime of the hull.
    pub id: PointId,
}

impl Point {
    /// Creates a point from coordinates and id.
    pub fn new(x: f64, y: f64, z: f64, id: PointId) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            id,
        }
    }

    /// Creates a point from a position vector and id.
    pub fn from_position(position: Vec3, id: PointId) -> Self {
        Self { position, id }
    }

    /// Returns true if every coordinate differs by less than `tolerance`.
    pub fn coincides(&self, other: &Point, tolerance: f64) -> bool {
        let delta = (self.position - other.position).abs();
        delta.x < tolerance && delta.y < tolerance && delta.z < tolerance
    }

    /// Orders points by id, ignoring coordinates.
    #[inline]
    pub fn cmp_by_id(&self, other: &Point) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests;
