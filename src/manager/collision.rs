use super::collidable::CollidableId;
use crate::math::Point2D;

/// Identifies one collider of one registered object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColliderRef {
    pub object: CollidableId,
    /// Index into the object's collider list.
    pub collider: usize,
}

/// An unordered pair of colliders whose bounding rects overlap on both
/// axes. `(A, B)` and `(B, A)` compare and hash equal: the pair is
/// canonicalized at construction, smaller reference first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreCollision {
    pub first: ColliderRef,
    pub second: ColliderRef,
}

impl PreCollision {
    pub fn new(a: ColliderRef, b: ColliderRef) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// True if either side belongs to `object`.
    pub fn involves(&self, object: CollidableId) -> bool {
        self.first.object == object || self.second.object == object
    }
}

/// A verified collision: a broad-phase pair confirmed by the narrow phase,
/// with the translation vector that separates the first collider from the
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Collision {
    pub pair: PreCollision,
    pub min_translation: Point2D,
}

impl Collision {
    pub fn new(pair: PreCollision, min_translation: Point2D) -> Self {
        Self {
            pair,
            min_translation,
        }
    }

    pub fn involves(&self, object: CollidableId) -> bool {
        self.pair.involves(object)
    }
}
