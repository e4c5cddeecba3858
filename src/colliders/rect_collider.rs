use crate::math::{Point2D, Rect};

/// A collider backed by a single axis-aligned rectangle.
///
/// The rectangle doubles as its own bounding rect, so the exact point
/// test and the bounding-rect pre-filter are the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectCollider {
    rect: Rect,
}

impl RectCollider {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn bounding_rect(&self) -> Rect {
        self.rect
    }

    pub fn translate(&mut self, v: Point2D) {
        self.rect = self.rect.translate(v);
    }

    pub fn point_collision(&self, point: Point2D) -> bool {
        self.rect.contains_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_collider_bounding_is_rect() {
        let c = RectCollider::new(Rect::new(1, 2, 3, 4));
        assert_eq!(c.bounding_rect(), c.rect());
    }

    #[test]
    fn test_rect_collider_translate_moves_bounding() {
        let mut c = RectCollider::new(Rect::new(0, 0, 10, 10));
        c.translate(Point2D::new(5, -2));
        assert_eq!(c.bounding_rect(), Rect::new(5, -2, 10, 10));
    }

    #[test]
    fn test_rect_collider_point_collision() {
        let c = RectCollider::new(Rect::new(0, 0, 10, 10));
        assert!(c.point_collision(Point2D::new(5, 5)));
        assert!(c.point_collision(Point2D::new(10, 0)));
        assert!(!c.point_collision(Point2D::new(11, 5)));
    }
}
