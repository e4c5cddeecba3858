//! GJK intersection test for convex polygons.
//!
//! Searches the Minkowski difference of the two vertex sets for the
//! origin, maintaining a simplex of one or two points plus the latest
//! support point. Integer coordinates make every sign test exact, so no
//! tolerance is involved.

use crate::math::Point2D;

/// Bounds the search loop against input that violates the convexity
/// contract; well-formed convex polygons settle much earlier.
const MAX_ITERATIONS: usize = 64;

/// The working simplex, excluding the support point currently being
/// folded in.
enum Simplex {
    Point(Point2D),
    Edge(Point2D, Point2D),
}

enum Step {
    /// Keep searching with the reduced simplex and a new direction.
    Continue(Simplex, Point2D),
    /// The simplex encloses the origin.
    Enclosed,
}

/// Returns true iff the two convex polygons intersect. Shapes that only
/// touch (shared edge or vertex) count as intersecting, matching the
/// closed-interval convention of the rectangle test.
pub fn gjk_intersects(poly1: &[Point2D], poly2: &[Point2D]) -> bool {
    debug_assert!(poly1.len() >= 3 && poly2.len() >= 3);

    let initial = poly1[0] - poly2[0];
    let mut simplex = Simplex::Point(initial);
    let mut direction = -initial;

    for _ in 0..MAX_ITERATIONS {
        let new_point = minkowski_support(direction, poly1, poly2);
        if new_point == Point2D::ZERO {
            // The difference contains the origin on its boundary
            return true;
        }
        if new_point.dot(direction) < 0 {
            // The support point never reached the origin: separated
            return false;
        }
        match fold_simplex(simplex, new_point) {
            Step::Continue(next, next_direction) => {
                simplex = next;
                direction = next_direction;
            }
            Step::Enclosed => return true,
        }
    }
    false
}

/// Folds the latest support point `a` into the simplex, discarding the
/// region that provably excludes the origin, and picks the next search
/// direction pointing from the kept feature toward the origin.
fn fold_simplex(simplex: Simplex, a: Point2D) -> Step {
    let d = -a;
    match simplex {
        Simplex::Point(b) => {
            let ab = b - a;
            if ab.dot(d) > 0 {
                // Origin lies beside the edge: search along its normal,
                // oriented toward the origin
                let mut normal = ab.perpendicular();
                if normal.dot(d) < 0 {
                    normal = -normal;
                }
                Step::Continue(Simplex::Edge(a, b), normal)
            } else {
                Step::Continue(Simplex::Point(a), d)
            }
        }
        Simplex::Edge(b, c) => {
            let ab = b - a;
            let ac = c - a;

            // Outward normal of edge ac (away from b)
            let mut alpha = ac.perpendicular();
            if alpha.dot(ab) > 0 {
                alpha = -alpha;
            }
            // Outward normal of edge ab (away from c)
            let mut beta = -ab.perpendicular();
            if beta.dot(ac) > 0 {
                beta = -beta;
            }

            if alpha.dot(d) > 0 {
                if ac.dot(d) > 0 {
                    Step::Continue(Simplex::Edge(a, c), alpha)
                } else {
                    Step::Continue(Simplex::Point(a), d)
                }
            } else if beta.dot(d) > 0 {
                if ab.dot(d) > 0 {
                    Step::Continue(Simplex::Edge(a, b), beta)
                } else {
                    Step::Continue(Simplex::Point(a), d)
                }
            } else {
                Step::Enclosed
            }
        }
    }
}

/// Support point of the Minkowski difference `poly1 - poly2` along
/// `direction`.
fn minkowski_support(direction: Point2D, poly1: &[Point2D], poly2: &[Point2D]) -> Point2D {
    support(direction, poly1) - support(-direction, poly2)
}

/// The vertex of `poly` farthest along `direction` (first of any ties).
fn support(direction: Point2D, poly: &[Point2D]) -> Point2D {
    let mut best = poly[0];
    let mut best_dot = best.dot(direction);
    for &vertex in &poly[1..] {
        let dot = vertex.dot(direction);
        if dot > best_dot {
            best = vertex;
            best_dot = dot;
        }
    }
    best
}
