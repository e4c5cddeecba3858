//! 2D collision detection core: a sweep-and-prune broad phase over both
//! axes feeding an exact narrow phase (closed-interval rect overlap and
//! GJK for convex polygons), managed over a mutable set of registered
//! objects.

pub mod colliders;
pub mod detection;
pub mod error;
pub mod manager;
pub mod math;

// Re-export key types for easier use
pub use colliders::{Collider, CompositeCollider, PolygonCollider, RectCollider};
pub use error::CollisionError;
pub use manager::{Collidable, CollidableId, Collision, CollisionManager, PreCollision};
pub use math::{Point2D, Rect};
