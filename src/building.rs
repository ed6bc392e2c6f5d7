//! Building: the top level of the hierarchy.
//!
//! Hierarchy: Building → Floor → Wall → Door/Window
//!
//! A building owns its floors and the root seed. Everything below is
//! generated lazily and memoized; the building is logically immutable
//! after construction.

use crate::Floor;
use crate::Footprint;
use crate::UID;
use crate::Wall;
use crate::coords::{Point3, UpAxis};
use crate::seed::derive_seed;
use anyhow::{Result, anyhow};

#[derive(Debug)]
pub struct Building {
    pub name: String,
    pub uid: UID,
    seed: u64,
    up_axis: UpAxis,
    floors: Vec<Floor>,
}

impl Building {
    /// Creates a building from per-floor footprints (bottom to top) and
    /// matching floor heights.
    pub fn new(
        name: &str,
        footprints: Vec<Footprint>,
        floor_heights: &[f64],
        seed: u64,
    ) -> Result<Self> {
        let name = validate_name(name)?;
        if footprints.is_empty() {
            return Err(anyhow!("Building needs at least one floor"));
        }
        if floor_heights.len() != footprints.len() {
            return Err(anyhow!(
                "floor_heights length must match the number of floors: {} != {}",
                floor_heights.len(),
                footprints.len()
            ));
        }
        let mut floors = Vec::with_capacity(footprints.len());
        let mut z_base = 0.;
        for (index, footprint) in footprints.into_iter().enumerate() {
            let height = floor_heights[index];
            let floor_seed = derive_seed(seed, ("floor", index));
            floors.push(Floor::new(footprint, height, index, z_base, floor_seed)?);
            z_base += height;
        }
        Ok(Self {
            name,
            uid: UID::new(),
            seed,
            up_axis: UpAxis::Z,
            floors,
        })
    }

    /// Creates a building from raw vertex lists, one per floor.
    pub fn from_vertices(
        name: &str,
        floor_plans: &[Vec<(f64, f64)>],
        floor_heights: &[f64],
        seed: u64,
    ) -> Result<Self> {
        let footprints = floor_plans
            .iter()
            .map(|plan| Footprint::from_vertices(plan))
            .collect::<Result<Vec<_>>>()?;
        Self::new(name, footprints, floor_heights, seed)
    }

    /// Creates a building where every floor has the same height.
    pub fn with_uniform_height(
        name: &str,
        footprints: Vec<Footprint>,
        floor_height: f64,
        seed: u64,
    ) -> Result<Self> {
        let heights = vec![floor_height; footprints.len()];
        Self::new(name, footprints, &heights, seed)
    }

    /// Sets the vertical-axis convention handed to consumers.
    /// Chosen at construction time; the internal model stays Z-up.
    pub fn with_up_axis(mut self, up_axis: UpAxis) -> Self {
        self.up_axis = up_axis;
        self
    }

    pub fn num_floors(&self) -> usize {
        self.floors.len()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn up_axis(&self) -> UpAxis {
        self.up_axis
    }

    pub fn get_floor(&self, index: usize) -> Result<&Floor> {
        self.floors.get(index).ok_or_else(|| {
            anyhow!(
                "Floor index {} out of range (0..{})",
                index,
                self.floors.len()
            )
        })
    }

    /// Floors from bottom to top.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Walls of the given floor, generated lazily.
    pub fn get_walls(&self, floor_index: usize) -> Result<&[Wall]> {
        Ok(self.get_floor(floor_index)?.get_walls())
    }

    pub fn get_floor_z_base(&self, index: usize) -> Result<f64> {
        Ok(self.get_floor(index)?.z_base())
    }

    pub fn get_floor_z_top(&self, index: usize) -> Result<f64> {
        Ok(self.get_floor(index)?.z_top())
    }

    /// Total building height in meters.
    pub fn get_total_height(&self) -> f64 {
        self.floors.iter().map(|f| f.height()).sum()
    }

    /// Converts an internal Z-up point to the building's configured
    /// axis convention.
    pub fn to_world(&self, point: Point3) -> Point3 {
        self.up_axis.from_internal(point)
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Building name cannot be empty"));
    }
    Ok(name.to_string())
}
