use crate::colliders::Collider;

/// Stable handle to an object registered with the collision manager.
///
/// Handles stay valid across frames; a deregistered object's slot is only
/// recycled after its sweep markers have been purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollidableId(pub(crate) usize);

/// The capability an object needs to participate in collision detection:
/// report the elementary colliders that currently represent it.
///
/// Implementations must flatten composites; the broad phase indexes
/// rectangle and polygon colliders only. Objects may report any number of
/// colliders.
pub trait Collidable {
    fn colliders(&self) -> Vec<Collider>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colliders::RectCollider;
    use crate::math::Rect;

    struct Crate;

    impl Collidable for Crate {
        fn colliders(&self) -> Vec<Collider> {
            vec![Collider::Rect(RectCollider::new(Rect::new(0, 0, 16, 16)))]
        }
    }

    #[test]
    fn test_collidable_reports_colliders() {
        assert_eq!(Crate.colliders().len(), 1);
    }

    #[test]
    fn test_id_ordering() {
        assert!(CollidableId(0) < CollidableId(1));
        assert_eq!(CollidableId(3), CollidableId(3));
    }
}
