//! Line segment intersection tests in the footprint plane.
//!
//! Used by footprint validation to reject self-intersecting outlines.

use crate::Point;
use crate::geom::EPS;

/// Orientation of the ordered triple (a, b, c).
///
/// Positive for counter-clockwise, negative for clockwise,
/// near-zero for collinear.
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

/// Checks if point `p` lies on the segment a-b, assuming collinearity.
fn is_point_on_collinear_segment(p: Point, a: Point, b: Point) -> bool {
    p.x >= a.x.min(b.x) - EPS
        && p.x <= a.x.max(b.x) + EPS
        && p.y >= a.y.min(b.y) - EPS
        && p.y <= a.y.max(b.y) + EPS
}

/// Checks if segments a-b and c-d intersect, including touching
/// endpoints and collinear overlap.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    // Proper intersection: the endpoints of each segment lie on
    // opposite sides of the other segment
    if ((o1 > EPS && o2 < -EPS) || (o1 < -EPS && o2 > EPS))
        && ((o3 > EPS && o4 < -EPS) || (o3 < -EPS && o4 > EPS))
    {
        return true;
    }

    // Collinear cases: an endpoint lies on the other segment
    if o1.abs() <= EPS && is_point_on_collinear_segment(c, a, b) {
        return true;
    }
    if o2.abs() <= EPS && is_point_on_collinear_segment(d, a, b) {
        return true;
    }
    if o3.abs() <= EPS && is_point_on_collinear_segment(a, c, d) {
        return true;
    }
    if o4.abs() <= EPS && is_point_on_collinear_segment(b, c, d) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proper_intersection() {
        let a = Point::new(0., 0.);
        let b = Point::new(2., 2.);
        let c = Point::new(0., 2.);
        let d = Point::new(2., 0.);
        assert!(segments_intersect(a, b, c, d));
    }

    #[test]
    fn test_no_intersection() {
        let a = Point::new(0., 0.);
        let b = Point::new(1., 0.);
        let c = Point::new(0., 1.);
        let d = Point::new(1., 1.);
        assert!(!segments_intersect(a, b, c, d));
    }

    #[test]
    fn test_shared_endpoint() {
        let a = Point::new(0., 0.);
        let b = Point::new(1., 0.);
        let c = Point::new(1., 0.);
        let d = Point::new(1., 1.);
        assert!(segments_intersect(a, b, c, d));
    }

    #[test]
    fn test_collinear_overlap() {
        let a = Point::new(0., 0.);
        let b = Point::new(2., 0.);
        let c = Point::new(1., 0.);
        let d = Point::new(3., 0.);
        assert!(segments_intersect(a, b, c, d));
    }

    #[test]
    fn test_collinear_disjoint() {
        let a = Point::new(0., 0.);
        let b = Point::new(1., 0.);
        let c = Point::new(2., 0.);
        let d = Point::new(3., 0.);
        assert!(!segments_intersect(a, b, c, d));
    }
}
