use super::point::Point2D;

/// An axis-aligned rectangle defined by its top-left corner and size.
///
/// Follows screen conventions: y grows downward, so `top` is the smaller
/// y coordinate and `bottom` the larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    /// Creates a new Rect.
    ///
    /// Panics if width or height is negative.
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "Rect size cannot be negative: {}x{}",
            width,
            height
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i64 {
        self.x
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn top(&self) -> i64 {
        self.y
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// The top-left corner.
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// The four corners, clockwise from top-left.
    pub fn corners(&self) -> [Point2D; 4] {
        [
            Point2D::new(self.left(), self.top()),
            Point2D::new(self.right(), self.top()),
            Point2D::new(self.right(), self.bottom()),
            Point2D::new(self.left(), self.bottom()),
        ]
    }

    /// Returns this rectangle translated by `v`; size is unchanged.
    pub fn translate(&self, v: Point2D) -> Rect {
        Rect {
            x: self.x + v.x,
            y: self.y + v.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Checks whether `point` lies inside the rectangle.
    /// The boundary counts as inside (closed intervals).
    pub fn contains_point(&self, point: Point2D) -> bool {
        self.left() <= point.x
            && point.x <= self.right()
            && self.top() <= point.y
            && point.y <= self.bottom()
    }

    /// Checks whether this rectangle overlaps another.
    /// Touching edges count as overlapping (closed intervals).
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// The tightest rectangle enclosing a set of points.
    /// Returns None for an empty set.
    pub fn from_points(points: &[Point2D]) -> Option<Self> {
        let first = points.first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for point in points.iter().skip(1) {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(Rect::new(
            min_pt.x,
            min_pt.y,
            max_pt.x - min_pt.x,
            max_pt.y - min_pt.y,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.position(), Point2D::new(10, 20));
    }

    #[test]
    #[should_panic]
    fn test_rect_negative_size() {
        Rect::new(0, 0, -1, 10);
    }

    #[test]
    fn test_rect_corners() {
        let r = Rect::new(0, 0, 10, 20);
        assert_eq!(
            r.corners(),
            [
                Point2D::new(0, 0),
                Point2D::new(10, 0),
                Point2D::new(10, 20),
                Point2D::new(0, 20),
            ]
        );
    }

    #[test]
    fn test_rect_translate_preserves_size() {
        let r = Rect::new(5, 5, 10, 15);
        let moved = r.translate(Point2D::new(-3, 7));
        assert_eq!(moved, Rect::new(2, 12, 10, 15));
        assert_eq!(moved.width, r.width);
        assert_eq!(moved.height, r.height);
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains_point(Point2D::new(5, 5)));
        // Boundary is inside
        assert!(r.contains_point(Point2D::new(0, 0)));
        assert!(r.contains_point(Point2D::new(10, 10)));
        assert!(!r.contains_point(Point2D::new(11, 5)));
        assert!(!r.contains_point(Point2D::new(5, -1)));
    }

    #[test]
    fn test_rect_overlaps() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
        assert!(!a.overlaps(&Rect::new(20, 20, 10, 10)));
        // Touching edges overlap
        assert!(a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(a.overlaps(&Rect::new(0, 10, 10, 10)));
    }

    #[test]
    fn test_rect_from_points() {
        assert_eq!(Rect::from_points(&[]), None);
        let points = [
            Point2D::new(3, 7),
            Point2D::new(-2, 4),
            Point2D::new(5, -1),
        ];
        let rect = Rect::from_points(&points).unwrap();
        assert_eq!(rect, Rect::new(-2, -1, 7, 8));
        for p in points {
            assert!(rect.contains_point(p));
        }
    }
}
