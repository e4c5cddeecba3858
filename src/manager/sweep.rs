use super::collision::ColliderRef;
use crate::math::Rect;

/// The axis a marker sequence is sorted along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

/// Orders `Begin` before `End` so that at equal coordinates an interval
/// opens before another closes, which is what makes touching colliders
/// broad-phase candidates (closed intervals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum MarkerKind {
    /// The collider's interval opens at this coordinate.
    Begin,
    /// The collider's interval closes at this coordinate.
    End,
}

/// A per-axis interval endpoint for one collider. The coordinate is not
/// stored: it is read from the collider's current bounding rect at sort
/// and sweep time, so markers track moving colliders implicitly.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SweepMarker {
    pub target: ColliderRef,
    pub kind: MarkerKind,
}

impl SweepMarker {
    pub fn new(target: ColliderRef, kind: MarkerKind) -> Self {
        Self { target, kind }
    }

    /// The marker's projected coordinate given its collider's current
    /// bounding rect.
    pub fn value(&self, bounding: &Rect, axis: Axis) -> i64 {
        match (axis, self.kind) {
            (Axis::X, MarkerKind::Begin) => bounding.left(),
            (Axis::X, MarkerKind::End) => bounding.right(),
            (Axis::Y, MarkerKind::Begin) => bounding.top(),
            (Axis::Y, MarkerKind::End) => bounding.bottom(),
        }
    }
}

/// Stable in-place insertion sort.
///
/// Colliders move a bounded distance per frame, so the marker sequences
/// stay nearly sorted between frames and insertion sort's near-linear
/// best case beats a general-purpose sort here.
pub(crate) fn insertion_sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && key(&items[j - 1]) > key(&items[j]) {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::collidable::CollidableId;

    #[test]
    fn test_marker_values_read_current_rect() {
        let target = ColliderRef {
            object: CollidableId(0),
            collider: 0,
        };
        let begin = SweepMarker::new(target, MarkerKind::Begin);
        let end = SweepMarker::new(target, MarkerKind::End);
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(begin.value(&rect, Axis::X), 10);
        assert_eq!(end.value(&rect, Axis::X), 40);
        assert_eq!(begin.value(&rect, Axis::Y), 20);
        assert_eq!(end.value(&rect, Axis::Y), 60);

        let moved = rect.translate(crate::math::Point2D::new(5, 5));
        assert_eq!(begin.value(&moved, Axis::X), 15);
        assert_eq!(end.value(&moved, Axis::Y), 65);
    }

    #[test]
    fn test_begin_orders_before_end() {
        assert!(MarkerKind::Begin < MarkerKind::End);
    }

    #[test]
    fn test_insertion_sort_sorts() {
        let mut values = vec![5, 1, 4, 2, 3];
        insertion_sort_by_key(&mut values, |v| *v);
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insertion_sort_nearly_sorted() {
        let mut values = vec![1, 2, 4, 3, 5, 6, 7];
        insertion_sort_by_key(&mut values, |v| *v);
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_insertion_sort_stable() {
        // Equal keys keep their relative order
        let mut values = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by_key(&mut values, |(k, _)| *k);
        assert_eq!(values, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_insertion_sort_trivial_inputs() {
        let mut empty: Vec<i64> = vec![];
        insertion_sort_by_key(&mut empty, |v| *v);
        assert!(empty.is_empty());

        let mut single = vec![42];
        insertion_sort_by_key(&mut single, |v| *v);
        assert_eq!(single, vec![42]);
    }
}
