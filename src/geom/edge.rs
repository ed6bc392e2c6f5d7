use crate::{Point, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One segment of a footprint, between two consecutive vertices.
///
/// Edges are derived from a footprint on demand and carry their
/// 0-based index in vertex order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub index: usize,
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(index: usize, start: Point, end: Point) -> Self {
        Self { index, start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Unit vector from start to end. None for a degenerate edge.
    pub fn direction(&self) -> Option<Vector> {
        Vector::from_points(self.start, self.end).normalize()
    }

    /// Unit normal pointing away from the footprint interior.
    ///
    /// Valid for edges of a counter-clockwise footprint.
    /// None for a degenerate edge.
    pub fn outward_normal(&self) -> Option<Vector> {
        self.direction().map(|d| d.perpendicular())
    }

    /// Point at the given distance (in meters) from the edge start.
    pub fn point_at(&self, offset: f64) -> Point {
        match self.direction() {
            Some(dir) => self.start + dir * offset,
            None => self.start,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge[{}]({} -> {})", self.index, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let e = Edge::new(0, Point::new(0., 0.), Point::new(3., 4.));
        assert!((e.length() - 5.).abs() < 1e-12);
    }

    #[test]
    fn test_direction() {
        let e = Edge::new(0, Point::new(0., 0.), Point::new(10., 0.));
        let d = e.direction().unwrap();
        assert!(d.is_close(&Vector::new(1., 0.)));
    }

    #[test]
    fn test_degenerate_direction() {
        let p = Point::new(1., 1.);
        let e = Edge::new(0, p, p);
        assert!(e.direction().is_none());
        assert!(e.outward_normal().is_none());
    }

    #[test]
    fn test_outward_normal_ccw_square() {
        // Bottom edge of a CCW square faces -y
        let e = Edge::new(0, Point::new(0., 0.), Point::new(10., 0.));
        let n = e.outward_normal().unwrap();
        assert!(n.is_close(&Vector::new(0., -1.)));
        // Right edge faces +x
        let e = Edge::new(1, Point::new(10., 0.), Point::new(10., 10.));
        let n = e.outward_normal().unwrap();
        assert!(n.is_close(&Vector::new(1., 0.)));
    }

    #[test]
    fn test_point_at() {
        let e = Edge::new(0, Point::new(0., 0.), Point::new(10., 0.));
        let p = e.point_at(2.5);
        assert!(p.is_close(&Point::new(2.5, 0.)));
    }
}
