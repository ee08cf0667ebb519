//! Thin wrapper around `glam::DVec3` shared across hull modules.
//!
//! The helpers name the products used by the hull predicates so call sites
//! read like the formulas they implement.

pub use glam::DVec3 as Vec3;

/// Vector (cross) product `a × b`.
///
/// # Examples
/// ```
/// use incremental_hull::core::vec3::{cross, Vec3};
/// assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
/// ```
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Scalar (dot) product `a · b`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

/// Scalar triple product `a · (b × c)`.
///
/// Six times the signed volume of the tetrahedron spanned by `a`, `b`, `c`.
///
/// # Examples
/// ```
/// use incremental_hull::core::vec3::{triple, Vec3};
/// assert_eq!(triple(Vec3::X, Vec3::Y, Vec3::Z), 1.0);
/// ```
#[inline]
pub fn triple(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    dot(a, cross(b, c))
}

/// Normal of the triangle `(v1, v2, v3)`, computed as `(v3 - v2) × (v1 - v2)`.
///
/// Points away from the side the triangle winds clockwise around. Not
/// normalized.
#[inline]
pub fn triangle_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    cross(v3 - v2, v1 - v2)
}

#[cfg(test)]
mod tests;
