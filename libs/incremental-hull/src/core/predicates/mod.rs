//! Orientation and visibility predicates.
//!
//! Both predicates work on raw `f64` arithmetic with no tolerance band, so
//! points within rounding distance of a face plane may be classified either
//! way.

use crate::core::vec3::{dot, triangle_normal, triple, Vec3};

/// Six times the signed volume of the tetrahedron `(a, b, c, d)`.
///
/// Positive when `d` lies on the side of the plane `(a, b, c)` that the normal
/// `(b - a) × (c - a)` points to.
///
/// # Examples
/// ```
/// use incremental_hull::core::predicates::signed_volume;
/// use incremental_hull::Vec3;
/// let v = signed_volume(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z);
/// assert_eq!(v, 1.0);
/// ```
#[inline]
pub fn signed_volume(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f64 {
    triple(d - a, b - a, c - a)
}

/// Returns true if the tetrahedron `(a, b, c, d)` is flat within `tolerance`.
///
/// The signed volume is divided by the product of the three edge lengths
/// leaving `a`, which makes the test independent of the coordinate scale. A
/// tetrahedron with a zero-length edge is flat.
///
/// # Examples
/// ```
/// use incremental_hull::core::predicates::is_flat;
/// use incremental_hull::Vec3;
/// let tiny = 1e-4;
/// assert!(!is_flat(Vec3::ZERO, Vec3::X * tiny, Vec3::Y * tiny, Vec3::Z * tiny, 1e-9));
/// assert!(is_flat(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0), 1e-9));
/// ```
pub fn is_flat(a: Vec3, b: Vec3, c: Vec3, d: Vec3, tolerance: f64) -> bool {
    let scale = (b - a).length() * (c - a).length() * (d - a).length();
    scale == 0.0 || signed_volume(a, b, c, d).abs() <= tolerance * scale
}

/// Returns true if `point` lies strictly on the outward side of the triangle
/// `(v1, v2, v3)`.
///
/// The outward normal is `(v3 - v2) × (v1 - v2)`. The point must be strictly
/// in front of the plane when measured from each of the three vertices.
///
/// # Examples
/// ```
/// use incremental_hull::core::predicates::is_visible;
/// use incremental_hull::Vec3;
/// let (v1, v2, v3) = (Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert!(is_visible(Vec3::new(0.2, 0.2, 1.0), v1, v2, v3));
/// assert!(!is_visible(Vec3::new(0.2, 0.2, 0.0), v1, v2, v3));
/// ```
pub fn is_visible(point: Vec3, v1: Vec3, v2: Vec3, v3: Vec3) -> bool {
    let normal = triangle_normal(v1, v2, v3);
    dot(normal, point - v1) > 0.0 && dot(normal, point - v2) > 0.0 && dot(normal, point - v3) > 0.0
}
