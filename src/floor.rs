//! Floor: one level of a building.
//!
//! A floor owns its footprint, height and index, knows its own Z
//! extent, and memoizes everything generated from it (walls, doors,
//! windows, corners) in write-once caches.

use crate::Footprint;
use crate::UID;
use crate::exterior::corner::Corner;
use crate::exterior::door::Door;
use crate::exterior::wall::{self, Wall};
use crate::exterior::window::Window;
use crate::exterior::{ExteriorCache, ExteriorElements, ExteriorParams};
use anyhow::{Result, anyhow};
use std::sync::{Arc, OnceLock};

#[derive(Debug)]
pub struct Floor {
    pub name: String,
    pub uid: UID,
    index: usize,
    height: f64,
    z_base: f64,
    seed: u64,
    footprint: Arc<Footprint>,
    walls: OnceLock<Vec<Wall>>,
    exterior: Arc<ExteriorCache>,
}

impl Floor {
    /// Creates a floor. `z_base` and `seed` come from the owning
    /// building (cumulative height of the floors below, and the seed
    /// derived from the building seed and the floor index).
    pub(crate) fn new(
        footprint: Footprint,
        height: f64,
        index: usize,
        z_base: f64,
        seed: u64,
    ) -> Result<Self> {
        if height <= 0. {
            return Err(anyhow!(
                "Floor {} height must be positive, got {}",
                index,
                height
            ));
        }
        let footprint = Arc::new(footprint);
        let exterior = Arc::new(ExteriorCache::new(
            Arc::clone(&footprint),
            index,
            z_base,
            z_base + height,
            seed,
        ));
        Ok(Self {
            name: format!("floor_{}", index),
            uid: UID::new(),
            index,
            height,
            z_base,
            seed,
            footprint,
            walls: OnceLock::new(),
            exterior,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn z_base(&self) -> f64 {
        self.z_base
    }

    pub fn z_top(&self) -> f64 {
        self.z_base + self.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Walls of this floor, one per footprint edge. Generated on first
    /// access, then memoized.
    pub fn get_walls(&self) -> &[Wall] {
        self.walls.get_or_init(|| {
            wall::generate_walls(
                &self.footprint,
                self.index,
                self.z_base,
                self.z_top(),
                self.seed,
                &self.exterior,
            )
        })
    }

    pub fn wall(&self, edge_index: usize) -> Result<&Wall> {
        let walls = self.get_walls();
        walls.get(edge_index).ok_or_else(|| {
            anyhow!(
                "Wall index {} out of range (0..{})",
                edge_index,
                walls.len()
            )
        })
    }

    /// Doors of this floor (empty above the ground floor). The first
    /// call runs the floor's generation pass with the given
    /// parameters; later calls return the memoized result.
    pub fn get_doors(&self, params: &ExteriorParams) -> Result<&[Door]> {
        Ok(&self.exterior.get_or_generate(params)?.doors)
    }

    /// Windows of this floor. Same caching rules as `get_doors`.
    pub fn get_windows(&self, params: &ExteriorParams) -> Result<&[Window]> {
        Ok(&self.exterior.get_or_generate(params)?.windows)
    }

    /// Corners of this floor, one per footprint vertex. Same caching
    /// rules as `get_doors`.
    pub fn get_corners(&self, params: &ExteriorParams) -> Result<&[Corner]> {
        Ok(&self.exterior.get_or_generate(params)?.corners)
    }

    /// Full generation result including skip counts.
    pub fn exterior(&self, params: &ExteriorParams) -> Result<&ExteriorElements> {
        self.exterior.get_or_generate(params)
    }
}
