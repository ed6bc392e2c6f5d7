//! Door generation.
//!
//! Doors go on ground-floor exterior walls only. Placement is
//! delegated to the edge placement engine; this module wraps accepted
//! placements into `Door` values with their properties.

use crate::exterior::placement::{EdgePlacementEngine, ObjectKind, PlacementRequest};
use crate::{Footprint, Point, Vector};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorParams {
    /// Doors per meter of perimeter.
    pub density: f64,
    /// Minimum center-to-center distance between doors on one edge.
    pub spacing: f64,
    /// Minimum distance between a door center and either corner of its
    /// edge.
    pub edge_spacing: f64,
    pub width: f64,
    pub height: f64,
}

impl DoorParams {
    pub fn new() -> Self {
        Self {
            density: 0.05,
            spacing: 2.0,
            edge_spacing: 1.0,
            width: 1.0,
            height: 2.1,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.density < 0. {
            return Err(anyhow!("Door density must be non-negative, got {}", self.density));
        }
        if self.spacing <= 0. {
            return Err(anyhow!("Door spacing must be positive, got {}", self.spacing));
        }
        if self.edge_spacing < 0. {
            return Err(anyhow!(
                "Door edge spacing must be non-negative, got {}",
                self.edge_spacing
            ));
        }
        if self.width <= 0. || self.height <= 0. {
            return Err(anyhow!(
                "Door dimensions must be positive, got {}x{}",
                self.width,
                self.height
            ));
        }
        Ok(())
    }
}

impl Default for DoorParams {
    fn default() -> Self {
        Self::new()
    }
}

/// A door on a wall segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub edge_index: usize,
    /// Offset of the door center along the edge, in meters from the
    /// edge start.
    pub position: f64,
    pub edge_start: Point,
    pub edge_end: Point,
    /// Outward normal of the edge the door sits on.
    pub facing: Vector,
    pub floor_index: usize,
    pub z_base: f64,
    pub width: f64,
    pub height: f64,
    pub is_main_entrance: bool,
}

impl Door {
    /// World (x, y) position of the door center.
    pub fn world_position(&self) -> Point {
        match Vector::from_points(self.edge_start, self.edge_end).normalize() {
            Some(dir) => self.edge_start + dir * self.position,
            None => self.edge_start,
        }
    }

    /// Z coordinate of the door center.
    pub fn center_z(&self) -> f64 {
        self.z_base + self.height / 2.
    }

    /// Position along the edge normalized to 0..1.
    pub fn position_normalized(&self) -> f64 {
        let length = self.edge_start.distance(&self.edge_end);
        if length > 0. { self.position / length } else { 0. }
    }
}

fn desired_count(perimeter: f64, density: f64) -> usize {
    if density <= 0. {
        return 0;
    }
    ((perimeter * density) as usize).max(1)
}

/// Places doors on a ground floor. Upper floors get none.
///
/// Returns the doors plus the number of requested doors that could not
/// be placed.
pub(crate) fn generate_doors(
    footprint: &Footprint,
    floor_index: usize,
    z_base: f64,
    seed: u64,
    engine: &mut EdgePlacementEngine,
    params: &DoorParams,
) -> Result<(Vec<Door>, usize)> {
    if floor_index != 0 {
        return Ok((Vec::new(), 0));
    }
    let request = PlacementRequest {
        kind: ObjectKind::Door,
        count: desired_count(footprint.perimeter(), params.density),
        spacing: params.spacing,
        edge_spacing: params.edge_spacing,
        seed,
    };
    let outcome = engine.place(&request)?;
    let mut doors = Vec::with_capacity(outcome.placed.len());
    for (i, placed) in outcome.placed.iter().enumerate() {
        let edge = footprint.edge(placed.edge_index)?;
        let facing = match edge.outward_normal() {
            Some(normal) => normal,
            None => continue,
        };
        doors.push(Door {
            edge_index: placed.edge_index,
            position: placed.position,
            edge_start: edge.start,
            edge_end: edge.end,
            facing,
            floor_index,
            z_base,
            width: params.width,
            height: params.height,
            is_main_entrance: i == 0,
        });
    }
    Ok((doors, outcome.skipped))
}
