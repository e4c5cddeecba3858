pub mod collidable;
pub mod collision;
pub mod collision_manager;
pub(crate) mod sweep;

pub use collidable::{Collidable, CollidableId};
pub use collision::{ColliderRef, Collision, PreCollision};
pub use collision_manager::CollisionManager;
