//! Footprint: the 2D outline of one building floor.
//!
//! A footprint is an immutable simple polygon. Validation happens at
//! construction; every instance the rest of the crate sees is simple,
//! free of zero-length edges, and ordered counter-clockwise.

use crate::geom::EPS;
use crate::geom::segment::segments_intersect;
use crate::{Edge, Point};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pts: Vec<Point>,
}

impl Footprint {
    /// Creates a footprint from ordered vertices.
    ///
    /// The outline is implicitly closed (last vertex connects back to
    /// the first). Vertex order may be clockwise or counter-clockwise;
    /// it is normalized to counter-clockwise.
    pub fn new(pts: Vec<Point>) -> Result<Self> {
        Self::validate(&pts)?;
        let mut pts = pts;
        if signed_area(&pts) < 0. {
            pts.reverse();
        }
        Ok(Self { pts })
    }

    /// Creates a footprint from `(x, y)` pairs.
    pub fn from_vertices(vertices: &[(f64, f64)]) -> Result<Self> {
        Self::new(vertices.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    fn validate(pts: &[Point]) -> Result<()> {
        if pts.len() < 3 {
            return Err(anyhow!(
                "Footprint needs at least 3 vertices, got {}",
                pts.len()
            ));
        }
        let n = pts.len();
        for i in 0..n {
            let next = pts[(i + 1) % n];
            if pts[i].is_close(&next) {
                return Err(anyhow!("Footprint has a zero-length edge at vertex {}", i));
            }
        }
        if signed_area(pts).abs() < EPS {
            return Err(anyhow!("Footprint is degenerate (zero area)"));
        }
        // A vertex where the outline folds back on itself
        for i in 0..n {
            let prev = pts[(i + n - 1) % n];
            let next = pts[(i + 1) % n];
            let va = pts[i] - prev;
            let vb = next - pts[i];
            if va.cross(vb).abs() < EPS && va.dot(vb) < 0. {
                return Err(anyhow!("Footprint folds back on itself at vertex {}", i));
            }
        }
        // Non-adjacent edges must not touch or cross
        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if adjacent {
                    continue;
                }
                let (a, b) = (pts[i], pts[(i + 1) % n]);
                let (c, d) = (pts[j], pts[(j + 1) % n]);
                if segments_intersect(a, b, c, d) {
                    return Err(anyhow!(
                        "Footprint is self-intersecting (edges {} and {})",
                        i,
                        j
                    ));
                }
            }
        }
        Ok(())
    }

    /// Checks the footprint invariants. Always true for instances
    /// created through `new`; part of the public polygon contract.
    pub fn is_valid(&self) -> bool {
        Self::validate(&self.pts).is_ok()
    }

    /// Vertices in counter-clockwise order.
    pub fn vertices(&self) -> &[Point] {
        &self.pts
    }

    pub fn num_vertices(&self) -> usize {
        self.pts.len()
    }

    /// Edges in vertex order. The last edge closes the outline.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.pts.len();
        (0..n)
            .map(|i| Edge::new(i, self.pts[i], self.pts[(i + 1) % n]))
            .collect()
    }

    pub fn edge(&self, index: usize) -> Result<Edge> {
        let n = self.pts.len();
        if index >= n {
            return Err(anyhow!("Edge index {} out of range (0..{})", index, n));
        }
        Ok(Edge::new(index, self.pts[index], self.pts[(index + 1) % n]))
    }

    pub fn edge_length(&self, index: usize) -> Result<f64> {
        Ok(self.edge(index)?.length())
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(|e| e.length()).sum()
    }

    /// Enclosed area (shoelace formula).
    pub fn area(&self) -> f64 {
        signed_area(&self.pts).abs()
    }

    /// Even-odd containment test (boundary points are not guaranteed
    /// either way).
    pub fn contains_point(&self, p: Point) -> bool {
        let n = self.pts.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.pts[i];
            let pj = self.pts[j];
            if (pi.y > p.y) != (pj.y > p.y) {
                let x_cross = pj.x + (p.y - pj.y) / (pi.y - pj.y) * (pi.x - pj.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

fn signed_area(pts: &[Point]) -> f64 {
    let n = pts.len();
    let mut sum = 0.;
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.
}
