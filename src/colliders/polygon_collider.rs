use crate::error::CollisionError;
use crate::math::{Point2D, Rect};

/// A collider for a convex polygon, given as an ordered sequence of at
/// least 3 vertices. Convexity is assumed, not validated.
///
/// The tightest enclosing bounding rect is cached at construction and
/// kept in sync on every translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolygonCollider {
    points: Vec<Point2D>,
    bounding: Rect,
}

impl PolygonCollider {
    pub fn new(points: Vec<Point2D>) -> Result<Self, CollisionError> {
        if points.len() < 3 {
            return Err(CollisionError::InvalidGeometry {
                points: points.len(),
            });
        }
        // At least 3 points, so from_points cannot fail
        let Some(bounding) = Rect::from_points(&points) else {
            return Err(CollisionError::InvalidGeometry {
                points: points.len(),
            });
        };
        Ok(Self { points, bounding })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn bounding_rect(&self) -> Rect {
        self.bounding
    }

    pub fn translate(&mut self, v: Point2D) {
        for point in &mut self.points {
            *point += v;
        }
        self.bounding = self.bounding.translate(v);
    }

    /// Checks whether `point` lies inside the polygon (boundary included).
    ///
    /// Rejects against the cached bounding rect before walking the edges,
    /// keeping the common miss O(1). The exact test checks that the point
    /// is on the same side of every edge, which only holds for convex
    /// input.
    pub fn point_collision(&self, point: Point2D) -> bool {
        if !self.bounding.contains_point(point) {
            return false;
        }

        let n = self.points.len();
        let mut has_positive = false;
        let mut has_negative = false;
        for i in 0..n {
            let v1 = self.points[i];
            let v2 = self.points[(i + 1) % n];
            let edge = v2 - v1;
            let to_point = point - v1;
            let cross = edge.x * to_point.y - edge.y * to_point.x;
            if cross > 0 {
                has_positive = true;
            } else if cross < 0 {
                has_negative = true;
            }
            if has_positive && has_negative {
                return false;
            }
        }
        true
    }
}
