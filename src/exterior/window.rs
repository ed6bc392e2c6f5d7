//! Window generation.
//!
//! Windows are placed on every floor, after doors, through the same
//! placement engine so they respect segments already reserved by doors
//! on the same edge.

use crate::exterior::placement::{EdgePlacementEngine, ObjectKind, PlacementRequest};
use crate::{Footprint, Point, Vector};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowParams {
    /// Windows per meter of perimeter.
    pub density: f64,
    /// Minimum center-to-center distance between windows on one edge.
    pub spacing: f64,
    /// Minimum distance between a window center and either corner of
    /// its edge.
    pub edge_spacing: f64,
    pub width: f64,
    pub height: f64,
    /// Height of the window sill above the floor base.
    pub sill_height: f64,
}

impl WindowParams {
    pub fn new() -> Self {
        Self {
            density: 0.3,
            spacing: 0.5,
            edge_spacing: 1.0,
            width: 1.2,
            height: 1.5,
            sill_height: 0.9,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.density < 0. {
            return Err(anyhow!(
                "Window density must be non-negative, got {}",
                self.density
            ));
        }
        if self.spacing <= 0. {
            return Err(anyhow!("Window spacing must be positive, got {}", self.spacing));
        }
        if self.edge_spacing < 0. {
            return Err(anyhow!(
                "Window edge spacing must be non-negative, got {}",
                self.edge_spacing
            ));
        }
        if self.width <= 0. || self.height <= 0. {
            return Err(anyhow!(
                "Window dimensions must be positive, got {}x{}",
                self.width,
                self.height
            ));
        }
        if self.sill_height < 0. {
            return Err(anyhow!(
                "Window sill height must be non-negative, got {}",
                self.sill_height
            ));
        }
        Ok(())
    }
}

impl Default for WindowParams {
    fn default() -> Self {
        Self::new()
    }
}

/// A window on a wall segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub edge_index: usize,
    /// Offset of the window center along the edge, in meters from the
    /// edge start.
    pub position: f64,
    pub edge_start: Point,
    pub edge_end: Point,
    /// Outward normal of the edge the window sits on.
    pub facing: Vector,
    pub floor_index: usize,
    pub z_base: f64,
    pub width: f64,
    pub height: f64,
    pub sill_height: f64,
}

impl Window {
    /// World (x, y) position of the window center.
    pub fn world_position(&self) -> Point {
        match Vector::from_points(self.edge_start, self.edge_end).normalize() {
            Some(dir) => self.edge_start + dir * self.position,
            None => self.edge_start,
        }
    }

    /// Z coordinate of the window center.
    pub fn center_z(&self) -> f64 {
        self.z_base + self.sill_height + self.height / 2.
    }
}

fn desired_count(perimeter: f64, density: f64) -> usize {
    if density <= 0. {
        return 0;
    }
    (perimeter * density) as usize
}

/// Places windows on a floor.
///
/// Returns the windows plus the number of requested windows that could
/// not be placed.
pub(crate) fn generate_windows(
    footprint: &Footprint,
    floor_index: usize,
    z_base: f64,
    seed: u64,
    engine: &mut EdgePlacementEngine,
    params: &WindowParams,
) -> Result<(Vec<Window>, usize)> {
    let request = PlacementRequest {
        kind: ObjectKind::Window,
        count: desired_count(footprint.perimeter(), params.density),
        spacing: params.spacing,
        edge_spacing: params.edge_spacing,
        seed,
    };
    let outcome = engine.place(&request)?;
    let mut windows = Vec::with_capacity(outcome.placed.len());
    for placed in &outcome.placed {
        let edge = footprint.edge(placed.edge_index)?;
        let facing = match edge.outward_normal() {
            Some(normal) => normal,
            None => continue,
        };
        windows.push(Window {
            edge_index: placed.edge_index,
            position: placed.position,
            edge_start: edge.start,
            edge_end: edge.end,
            facing,
            floor_index,
            z_base,
            width: params.width,
            height: params.height,
            sill_height: params.sill_height,
        });
    }
    Ok((windows, outcome.skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square10() -> Footprint {
        Footprint::from_vertices(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.)]).unwrap()
    }

    #[test]
    fn test_desired_count() {
        assert_eq!(desired_count(40., 0.3), 12);
        assert_eq!(desired_count(40., 0.2), 8);
        assert_eq!(desired_count(40., 0.), 0);
        // Windows do not get the at-least-one rule doors have
        assert_eq!(desired_count(40., 0.001), 0);
    }

    #[test]
    fn test_windows_on_upper_floor() {
        let fp = square10();
        let mut engine = EdgePlacementEngine::new(&fp.edges());
        let params = WindowParams {
            density: 0.2,
            ..WindowParams::new()
        };
        let (windows, skipped) =
            generate_windows(&fp, 2, 6., 54321, &mut engine, &params).unwrap();
        assert_eq!(windows.len(), 8);
        assert_eq!(skipped, 0);
        for w in &windows {
            assert_eq!(w.floor_index, 2);
            assert!((w.z_base - 6.).abs() < 1e-9);
            assert!(w.position >= 1. - 1e-6);
            assert!(w.position <= 9. + 1e-6);
        }
    }

    #[test]
    fn test_center_z_includes_sill() {
        let w = Window {
            edge_index: 0,
            position: 5.,
            edge_start: Point::new(0., 0.),
            edge_end: Point::new(10., 0.),
            facing: Vector::new(0., -1.),
            floor_index: 1,
            z_base: 3.,
            width: 1.2,
            height: 1.5,
            sill_height: 0.9,
        };
        assert!((w.center_z() - (3. + 0.9 + 0.75)).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_params() {
        assert!(WindowParams { spacing: -1., ..WindowParams::new() }.validate().is_err());
        assert!(WindowParams { sill_height: -0.1, ..WindowParams::new() }.validate().is_err());
        assert!(WindowParams::new().validate().is_ok());
    }
}
