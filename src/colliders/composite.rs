use super::Collider;
use crate::math::Point2D;

/// A collider grouping a set of child colliders so they can be moved and
/// hit-tested as one. It has no bounding rect of its own; asking for one
/// is an error, handled at the `Collider` level.
///
/// Composites exist for caller-side grouping only. The collision manager
/// indexes elementary colliders, never composites.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCollider {
    children: Vec<Collider>,
}

impl CompositeCollider {
    pub fn new(children: Vec<Collider>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Collider] {
        &self.children
    }

    pub fn translate(&mut self, v: Point2D) {
        for child in &mut self.children {
            child.translate(v);
        }
    }

    /// True if the point is inside any child.
    pub fn point_collision(&self, point: Point2D) -> bool {
        self.children.iter().any(|c| c.point_collision(point))
    }
}
