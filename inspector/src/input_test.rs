use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(1.5, -2.0);
    assert!((p.x - 1.5).abs() < f64::EPSILON);
    assert!((p.y + 2.0).abs() < f64::EPSILON);
}

// =============================================================
// PointerTracker::locate
// =============================================================

#[test]
fn locate_floors_fractional_coordinates() {
    let tracker = PointerTracker::new(10, 10);
    assert_eq!(tracker.locate(Point::new(3.99, 0.01)), Some(CursorPosition { x: 3, y: 0 }));
}

#[test]
fn locate_subtracts_origin() {
    let mut tracker = PointerTracker::new(4, 4);
    tracker.set_origin(Point::new(100.0, 50.0));
    assert_eq!(tracker.locate(Point::new(102.5, 53.2)), Some(CursorPosition { x: 2, y: 3 }));
    assert_eq!(tracker.locate(Point::new(99.5, 53.2)), None);
}

#[test]
fn locate_accepts_last_row_and_column() {
    let tracker = PointerTracker::new(2, 2);
    assert_eq!(tracker.locate(Point::new(1.999, 1.999)), Some(CursorPosition { x: 1, y: 1 }));
}

#[test]
fn locate_rejects_outside_surface() {
    let mut tracker = PointerTracker::new(2, 2);
    tracker.set_origin(Point::new(10.0, 10.0));
    for client in [
        Point::new(12.0, 10.0),
        Point::new(10.0, 12.0),
        Point::new(9.5, 10.0),
        Point::new(10.0, 9.99),
        Point::new(15.0, 15.0),
    ] {
        assert_eq!(tracker.locate(client), None, "{client:?} should be rejected");
    }
}

#[test]
fn locate_rejects_non_finite() {
    let tracker = PointerTracker::new(2, 2);
    assert_eq!(tracker.locate(Point::new(f64::NAN, 0.0)), None);
    assert_eq!(tracker.locate(Point::new(0.0, f64::INFINITY)), None);
}

#[test]
fn empty_tracker_rejects_everything() {
    let tracker = PointerTracker::default();
    assert_eq!(tracker.locate(Point::new(0.0, 0.0)), None);
}

#[test]
fn set_size_resizes_the_hit_area() {
    let mut tracker = PointerTracker::default();
    tracker.set_size(3, 1);
    assert_eq!(tracker.locate(Point::new(2.0, 0.0)), Some(CursorPosition { x: 2, y: 0 }));
    assert_eq!(tracker.locate(Point::new(2.0, 1.0)), None);
}
