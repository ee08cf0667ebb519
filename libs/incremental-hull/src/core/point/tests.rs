//! Tests for identified points.

use super::*;

#[test]
fn coincides_within_tolerance_per_axis() {
    let a = Point::new(0.0, 0.0, 0.0, 0);
    assert!(a.coincides(&Point::new(5e-10, -5e-10, 0.0, 1), 1e-9));
    assert!(!a.coincides(&Point::new(0.0, 0.0, 2e-9, 1), 1e-9));
}

#[test]
fn ordering_ignores_coordinates() {
    let far = Point::new(100.0, 100.0, 100.0, 1);
    let near = Point::new(0.0, 0.0, 0.0, 2);
    assert_eq!(far.cmp_by_id(&near), Ordering::Less);

    let mut points = vec![near, far];
    points.sort_by(Point::cmp_by_id);
    assert_eq!(points[0].id, 1);
}
