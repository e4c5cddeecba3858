pub mod point;
pub mod rect;

// Re-export key types
pub use point::Point2D;
pub use rect::Rect;
