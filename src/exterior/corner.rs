//! Corner generation.
//!
//! One corner detail per footprint vertex, spanning the full floor
//! height. Corner geometry is fully determined by the footprint; no
//! randomness is involved.

use crate::{Footprint, Point, Vector};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerParams {
    /// Width of the corner piece in meters.
    pub width: f64,
}

impl CornerParams {
    pub fn new() -> Self {
        Self { width: 0.15 }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width <= 0. {
            return Err(anyhow!("Corner width must be positive, got {}", self.width));
        }
        Ok(())
    }
}

impl Default for CornerParams {
    fn default() -> Self {
        Self::new()
    }
}

/// A vertical corner element where two walls meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    pub vertex_index: usize,
    pub position: Point,
    pub prev_position: Point,
    pub next_position: Point,
    pub floor_index: usize,
    pub z_base: f64,
    pub z_top: f64,
    pub width: f64,
}

impl Corner {
    /// Direction the corner faces: the normalized average of the
    /// outward normals of its two adjacent edges.
    ///
    /// None when the adjacent normals cancel out exactly.
    pub fn outward(&self) -> Option<Vector> {
        let incoming = (self.position - self.prev_position).normalize()?;
        let outgoing = (self.next_position - self.position).normalize()?;
        (incoming.perpendicular() + outgoing.perpendicular()).normalize()
    }

    pub fn height(&self) -> f64 {
        self.z_top - self.z_base
    }
}

/// Builds one corner per footprint vertex.
pub(crate) fn generate_corners(
    footprint: &Footprint,
    floor_index: usize,
    z_base: f64,
    z_top: f64,
    params: &CornerParams,
) -> Vec<Corner> {
    let vertices = footprint.vertices();
    let n = vertices.len();
    (0..n)
        .map(|i| Corner {
            vertex_index: i,
            position: vertices[i],
            prev_position: vertices[(i + n - 1) % n],
            next_position: vertices[(i + 1) % n],
            floor_index,
            z_base,
            z_top,
            width: params.width,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square10() -> Footprint {
        Footprint::from_vertices(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.)]).unwrap()
    }

    #[test]
    fn test_one_corner_per_vertex() {
        let fp = square10();
        let corners = generate_corners(&fp, 0, 0., 3., &CornerParams::new());
        assert_eq!(corners.len(), 4);
        for (i, c) in corners.iter().enumerate() {
            assert_eq!(c.vertex_index, i);
            assert!((c.height() - 3.).abs() < 1e-9);
            assert!((c.width - 0.15).abs() < 1e-9);
        }
    }

    #[test]
    fn test_outward_direction() {
        let fp = square10();
        let corners = generate_corners(&fp, 0, 0., 3., &CornerParams::new());
        // Vertex (0, 0) sits between the left edge (facing -x) and the
        // bottom edge (facing -y)
        let c = corners.iter().find(|c| c.position.is_close(&Point::new(0., 0.))).unwrap();
        let outward = c.outward().unwrap();
        let expected = Vector::new(-1., -1.).normalize().unwrap();
        assert!(outward.is_close(&expected));
    }

    #[test]
    fn test_straight_vertex_outward() {
        // A vertex on a straight run still faces the shared normal
        let fp = Footprint::from_vertices(&[(0., 0.), (5., 0.), (10., 0.), (10., 10.), (0., 10.)])
            .unwrap();
        let corners = generate_corners(&fp, 0, 0., 3., &CornerParams::new());
        let c = corners.iter().find(|c| c.position.is_close(&Point::new(5., 0.))).unwrap();
        assert!(c.outward().unwrap().is_close(&Vector::new(0., -1.)));
    }

    #[test]
    fn test_invalid_width() {
        assert!(CornerParams { width: 0. }.validate().is_err());
        assert!(CornerParams::new().validate().is_ok());
    }
}
