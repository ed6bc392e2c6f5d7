//! Vertical-axis conversion for consumers of generated geometry.
//!
//! The crate works in Z-up coordinates (X right, Y forward, Z up).
//! Engines that expect Y-up can convert through [`UpAxis::Y`]; the
//! convention is a value chosen at construction time, never a process
//! global.

use serde::{Deserialize, Serialize};

/// A 3D position handed to consumers (viewer, engine adapter).
pub type Point3 = [f64; 3];

/// Vertical-axis convention of the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpAxis {
    /// X right, Y forward, Z up (internal convention).
    #[default]
    Z,
    /// X right, Y up, Z forward.
    Y,
}

impl UpAxis {
    /// Converts a point from internal Z-up coordinates to this
    /// convention.
    pub fn from_internal(&self, p: Point3) -> Point3 {
        match self {
            UpAxis::Z => p,
            UpAxis::Y => [p[0], p[2], -p[1]],
        }
    }

    /// Converts a point from this convention back to internal Z-up
    /// coordinates.
    pub fn to_internal(&self, p: Point3) -> Point3 {
        match self {
            UpAxis::Z => p,
            UpAxis::Y => [p[0], -p[2], p[1]],
        }
    }

    /// Converts a slice of internal points to this convention.
    pub fn convert_all(&self, points: &[Point3]) -> Vec<Point3> {
        points.iter().map(|&p| self.from_internal(p)).collect()
    }
}
