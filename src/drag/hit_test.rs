//! Pointer to column resolution.

use super::geometry::Point;
use super::registry::ColumnRegistry;

/// Find the column whose rectangle contains `point`.
///
/// Rectangles are scanned in registration order and the first one whose
/// closed bounds contain the point wins. `None` means the pointer is over a
/// gutter or outside the board, which is an ordinary outcome.
pub fn resolve(point: Point, registry: &ColumnRegistry) -> Option<&str> {
    registry
        .iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::geometry::Rect;

    fn two_columns() -> ColumnRegistry {
        let mut registry = ColumnRegistry::new();
        registry.register("A", Rect::new(0.0, 0.0, 100.0, 500.0));
        registry.register("B", Rect::new(100.0, 0.0, 100.0, 500.0));
        registry
    }

    #[test]
    fn test_resolve_inside_columns() {
        let registry = two_columns();
        assert_eq!(resolve(Point::new(50.0, 50.0), &registry), Some("A"));
        assert_eq!(resolve(Point::new(150.0, 50.0), &registry), Some("B"));
    }

    #[test]
    fn test_resolve_edges_are_inclusive() {
        let registry = two_columns();
        assert_eq!(resolve(Point::new(0.0, 0.0), &registry), Some("A"));
        assert_eq!(resolve(Point::new(200.0, 500.0), &registry), Some("B"));
        // Shared edge belongs to the first registered column
        assert_eq!(resolve(Point::new(100.0, 10.0), &registry), Some("A"));
    }

    #[test]
    fn test_resolve_outside_is_none() {
        let registry = two_columns();
        assert_eq!(resolve(Point::new(250.0, 50.0), &registry), None);
        assert_eq!(resolve(Point::new(50.0, 500.5), &registry), None);
        assert_eq!(resolve(Point::new(-0.1, 10.0), &registry), None);
    }

    #[test]
    fn test_resolve_ignores_unregistered() {
        let mut registry = two_columns();
        registry.unregister("B");
        assert_eq!(resolve(Point::new(150.0, 50.0), &registry), None);
    }
}
