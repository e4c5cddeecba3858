pub mod composite;
pub mod polygon_collider;
pub mod rect_collider;

// Re-export the specific collider types
pub use composite::CompositeCollider;
pub use polygon_collider::PolygonCollider;
pub use rect_collider::RectCollider;

use crate::error::CollisionError;
use crate::math::{Point2D, Rect};

/// A 2D collider. Every variant owns its current geometry; the elementary
/// variants (rect, polygon) also cache a bounding rect that stays in sync
/// with the geometry across translations.
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    Rect(RectCollider),
    Polygon(PolygonCollider),
    Composite(CompositeCollider),
}

impl Collider {
    /// Translates the geometry and its cached bounding rect together.
    pub fn translate(&mut self, v: Point2D) {
        match self {
            Collider::Rect(c) => c.translate(v),
            Collider::Polygon(c) => c.translate(v),
            Collider::Composite(c) => c.translate(v),
        }
    }

    /// Moves the collider so its bounding rect's top-left corner lands on
    /// `position`. Fails for composites, which have no bounding rect.
    pub fn set_position(&mut self, position: Point2D) -> Result<(), CollisionError> {
        let current = self.bounding_rect()?.position();
        if current != position {
            self.translate(position - current);
        }
        Ok(())
    }

    /// Checks whether the point lies inside the shape. Elementary
    /// variants reject against the cached bounding rect before the exact
    /// test; composites delegate to every child.
    pub fn point_collision(&self, point: Point2D) -> bool {
        match self {
            Collider::Rect(c) => c.point_collision(point),
            Collider::Polygon(c) => c.point_collision(point),
            Collider::Composite(c) => c.point_collision(point),
        }
    }

    /// The tightest axis-aligned box containing the shape.
    ///
    /// Composites fail fast here: an aggregate box would be a guess some
    /// callers read as exact, so it is unsupported instead.
    pub fn bounding_rect(&self) -> Result<Rect, CollisionError> {
        match self {
            Collider::Rect(c) => Ok(c.bounding_rect()),
            Collider::Polygon(c) => Ok(c.bounding_rect()),
            Collider::Composite(_) => Err(CollisionError::UnsupportedOperation(
                "bounding rect of a composite collider",
            )),
        }
    }

    /// Variant name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Collider::Rect(_) => "rect",
            Collider::Polygon(_) => "polygon",
            Collider::Composite(_) => "composite",
        }
    }
}
