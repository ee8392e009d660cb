//! Pure containment predicates.
//!
//! The only geometry queries in the crate; both the toolbar and the
//! interaction session are built on these two functions.

use kurbo::Point;

/// Whether `point` lies within the disc at `center` with `radius`,
/// boundary inclusive.
pub fn disc_contains(center: Point, radius: f64, point: Point) -> bool {
    center.distance(point) <= radius
}

/// Whether `point` lies within the axis-aligned square at `origin` with
/// side `size`, inclusive on all four edges.
pub fn square_contains(origin: Point, size: f64, point: Point) -> bool {
    origin.x <= point.x
        && point.x <= origin.x + size
        && origin.y <= point.y
        && point.y <= origin.y + size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_contains_center_and_boundary() {
        let center = Point::new(55.0, 55.0);
        assert!(disc_contains(center, 40.0, center));
        // Exactly on the boundary counts as inside.
        assert!(disc_contains(center, 40.0, Point::new(95.0, 55.0)));
        assert!(!disc_contains(center, 40.0, Point::new(95.1, 55.0)));
    }

    #[test]
    fn test_square_contains_edges() {
        let origin = Point::new(10.0, 10.0);
        assert!(square_contains(origin, 20.0, origin));
        assert!(square_contains(origin, 20.0, Point::new(30.0, 30.0)));
        assert!(square_contains(origin, 20.0, Point::new(20.0, 10.0)));
        assert!(!square_contains(origin, 20.0, Point::new(30.1, 20.0)));
        assert!(!square_contains(origin, 20.0, Point::new(9.9, 20.0)));
    }

    #[test]
    fn test_empty_queries_miss() {
        // A zero-size square still contains its own origin (inclusive).
        let origin = Point::new(0.0, 0.0);
        assert!(square_contains(origin, 0.0, origin));
        assert!(!square_contains(origin, 0.0, Point::new(0.1, 0.0)));
    }
}
