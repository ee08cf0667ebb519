//! Tests for the Vec3 helpers.

use super::*;
use approx::assert_relative_eq;

#[test]
fn cross_is_anticommutative() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 0.5, 2.0);
    assert_eq!(cross(a, b), -cross(b, a));
}

#[test]
fn triple_product_is_cyclic() {
    let a = Vec3::new(1.0, 0.2, -0.3);
    let b = Vec3::new(0.1, 2.0, 0.4);
    let c = Vec3::new(-0.5, 0.3, 1.5);
    assert_relative_eq!(triple(a, b, c), triple(b, c, a), epsilon = 1e-12);
    assert_relative_eq!(triple(a, b, c), -triple(b, a, c), epsilon = 1e-12);
}

/// Counter-clockwise winding seen from +z gives a +z normal.
#[test]
fn triangle_normal_follows_winding() {
    let v1 = Vec3::new(0.0, 0.0, 0.0);
    let v2 = Vec3::new(1.0, 0.0, 0.0);
    let v3 = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(triangle_normal(v1, v2, v3), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(triangle_normal(v1, v3, v2), Vec3::new(0.0, 0.0, -1.0));
}
