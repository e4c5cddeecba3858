/// Errors surfaced by collider construction and narrow-phase dispatch.
///
/// All variants are deterministic programming errors: there is no I/O
/// anywhere in the crate and nothing here is transient or retryable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CollisionError {
    /// Narrow-phase detection invoked on a collider pairing it does not
    /// implement. Silently reporting "no collision" here would be a
    /// correctness violation, so the pairing is rejected loudly.
    #[error("unsupported collider combination: {first} vs {second}")]
    UnsupportedShapeCombination {
        first: &'static str,
        second: &'static str,
    },

    /// An operation the collider variant cannot provide, such as the
    /// bounding rectangle of a composite collider.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A polygon collider constructed with fewer than 3 points.
    #[error("polygon collider requires at least 3 points, got {points}")]
    InvalidGeometry { points: usize },
}
