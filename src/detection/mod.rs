pub mod detector;
pub mod gjk;

// Re-export key functions
pub use detector::collide;
pub use gjk::gjk_intersects;
