use super::gjk::gjk_intersects;
use crate::colliders::{Collider, PolygonCollider, RectCollider};
use crate::error::CollisionError;
use crate::math::Point2D;

/// Exact narrow-phase test for a pair of colliders.
///
/// Returns `Ok(Some(v))` with the translation vector separating the first
/// collider from the second, `Ok(None)` when they do not intersect, and
/// an error for any shape pairing the detector does not implement (those
/// must not be silently reported as "no collision").
///
/// Both implemented paths currently report the zero vector on hit; a true
/// minimal translation vector is not computed yet.
pub fn collide(a: &Collider, b: &Collider) -> Result<Option<Point2D>, CollisionError> {
    match (a, b) {
        (Collider::Rect(ra), Collider::Rect(rb)) => Ok(rect_collision(ra, rb)),
        (Collider::Polygon(pa), Collider::Polygon(pb)) => Ok(polygon_collision(pa, pb)),
        _ => Err(CollisionError::UnsupportedShapeCombination {
            first: a.kind(),
            second: b.kind(),
        }),
    }
}

/// Closed-interval AABB overlap: touching edges collide.
fn rect_collision(a: &RectCollider, b: &RectCollider) -> Option<Point2D> {
    if a.rect().overlaps(&b.rect()) {
        Some(Point2D::ZERO)
    } else {
        None
    }
}

fn polygon_collision(a: &PolygonCollider, b: &PolygonCollider) -> Option<Point2D> {
    if gjk_intersects(a.points(), b.points()) {
        Some(Point2D::ZERO)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colliders::CompositeCollider;
    use crate::math::Rect;

    fn rect(x: i64, y: i64, w: i64, h: i64) -> Collider {
        Collider::Rect(RectCollider::new(Rect::new(x, y, w, h)))
    }

    fn square_polygon(x: i64, y: i64, size: i64) -> Collider {
        Collider::Polygon(
            PolygonCollider::new(vec![
                Point2D::new(x, y),
                Point2D::new(x, y + size),
                Point2D::new(x + size, y + size),
                Point2D::new(x + size, y),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_rect_rect_overlapping() {
        let result = collide(&rect(0, 0, 10, 10), &rect(5, 5, 10, 10)).unwrap();
        assert_eq!(result, Some(Point2D::ZERO));
    }

    #[test]
    fn test_rect_rect_disjoint() {
        let result = collide(&rect(0, 0, 10, 10), &rect(20, 20, 10, 10)).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_rect_rect_touching_edge_collides() {
        let result = collide(&rect(0, 0, 10, 10), &rect(10, 0, 10, 10)).unwrap();
        assert_eq!(result, Some(Point2D::ZERO));
    }

    #[test]
    fn test_polygon_polygon_cases() {
        let a = square_polygon(0, 0, 10);
        assert!(collide(&a, &square_polygon(5, 5, 10)).unwrap().is_some());
        assert!(collide(&a, &square_polygon(20, 20, 10)).unwrap().is_none());
        // Shared edge: consistent with the closed rect convention
        assert!(collide(&a, &square_polygon(10, 0, 10)).unwrap().is_some());
    }

    #[test]
    fn test_order_independence() {
        let pairs = [
            (rect(0, 0, 10, 10), rect(5, 5, 10, 10)),
            (rect(0, 0, 10, 10), rect(20, 20, 10, 10)),
            (square_polygon(0, 0, 10), square_polygon(5, 5, 10)),
            (square_polygon(0, 0, 10), square_polygon(40, 0, 10)),
        ];
        for (a, b) in &pairs {
            assert_eq!(
                collide(a, b).unwrap().is_some(),
                collide(b, a).unwrap().is_some()
            );
        }
    }

    #[test]
    fn test_mixed_pairing_unsupported() {
        let result = collide(&rect(0, 0, 10, 10), &square_polygon(0, 0, 10));
        assert_eq!(
            result,
            Err(CollisionError::UnsupportedShapeCombination {
                first: "rect",
                second: "polygon",
            })
        );
    }

    #[test]
    fn test_composite_pairing_unsupported() {
        let composite = Collider::Composite(CompositeCollider::new(vec![rect(0, 0, 10, 10)]));
        let result = collide(&composite, &rect(0, 0, 10, 10));
        assert_eq!(
            result,
            Err(CollisionError::UnsupportedShapeCombination {
                first: "composite",
                second: "rect",
            })
        );
    }
}
