//! Grid snapping for item positions.

use kurbo::Point;

/// Grid size for snapping dragged positions.
pub const GRID_SIZE: f64 = 16.0;

/// Snap a position to the nearest grid intersection.
///
/// This is the only normalization applied to positions. Every
/// position-reporting path routes through it, which makes repeated
/// snapping a no-op.
pub fn snap_position(point: Point) -> Point {
    Point::new(
        (point.x / GRID_SIZE).round() * GRID_SIZE,
        (point.y / GRID_SIZE).round() * GRID_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_grid() {
        assert_eq!(snap_position(Point::new(103.0, 57.0)), Point::new(96.0, 64.0));
    }

    #[test]
    fn test_snap_exact_points_unchanged() {
        assert_eq!(snap_position(Point::new(96.0, 64.0)), Point::new(96.0, 64.0));
        assert_eq!(snap_position(Point::ZERO), Point::ZERO);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let p = Point::new(123.7, -41.2);
        let once = snap_position(p);
        assert_eq!(snap_position(once), once);
    }

    #[test]
    fn test_snap_negative_coordinates() {
        assert_eq!(snap_position(Point::new(-9.0, -23.0)), Point::new(-16.0, -16.0));
    }
}
