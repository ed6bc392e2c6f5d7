//! Exterior element generation.
//!
//! Hierarchy: Building → Floor → Wall → Door/Window, with corners at
//! footprint vertices. Each generator consumes a parent context plus a
//! seed derived from its position in the hierarchy, so every element is
//! reproducible in isolation. Results are generated once per floor and
//! memoized.

pub mod corner;
pub mod door;
pub mod placement;
pub mod wall;
pub mod window;

use crate::Footprint;
use crate::exterior::corner::{Corner, CornerParams};
use crate::exterior::door::{Door, DoorParams};
use crate::exterior::placement::EdgePlacementEngine;
use crate::exterior::window::{Window, WindowParams};
use crate::seed::derive_seed;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Parameters for one floor-level generation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExteriorParams {
    pub doors: DoorParams,
    pub windows: WindowParams,
    pub corners: CornerParams,
}

impl ExteriorParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.doors.validate()?;
        self.windows.validate()?;
        self.corners.validate()?;
        Ok(())
    }
}

/// Everything generated for one floor, plus skip accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExteriorElements {
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub corners: Vec<Corner>,
    pub skipped_doors: usize,
    pub skipped_windows: usize,
    /// Parameters the pass actually ran with (the first caller's).
    pub params: ExteriorParams,
}

/// Write-once store for a floor's generated exterior.
///
/// The floor and each of its walls hold the cache through an `Arc`, so
/// `wall.get_doors(..)` works without a live pointer back to the floor.
/// `OnceLock` gives at-most-once generation even under concurrent
/// first access.
#[derive(Debug)]
pub(crate) struct ExteriorCache {
    footprint: Arc<Footprint>,
    floor_index: usize,
    z_base: f64,
    z_top: f64,
    seed: u64,
    cell: OnceLock<ExteriorElements>,
}

impl ExteriorCache {
    pub(crate) fn new(
        footprint: Arc<Footprint>,
        floor_index: usize,
        z_base: f64,
        z_top: f64,
        seed: u64,
    ) -> Self {
        Self {
            footprint,
            floor_index,
            z_base,
            z_top,
            seed,
            cell: OnceLock::new(),
        }
    }

    /// Returns the generated elements, running the generation pass on
    /// first call. Parameters are not part of the cache key: later
    /// calls with different parameters get the memoized result.
    pub(crate) fn get_or_generate(&self, params: &ExteriorParams) -> Result<&ExteriorElements> {
        if let Some(existing) = self.cell.get() {
            if existing.params != *params {
                log::warn!(
                    "Exterior of floor {} already generated; ignoring differing parameters",
                    self.floor_index
                );
            }
            return Ok(existing);
        }
        params.validate()?;
        let elements = self.generate(params)?;
        Ok(self.cell.get_or_init(|| elements))
    }

    fn generate(&self, params: &ExteriorParams) -> Result<ExteriorElements> {
        let edges = self.footprint.edges();
        let mut engine = EdgePlacementEngine::new(&edges);

        // Doors claim their segments first; windows then share the
        // same occupancy map
        let (doors, skipped_doors) = door::generate_doors(
            &self.footprint,
            self.floor_index,
            self.z_base,
            derive_seed(self.seed, "doors"),
            &mut engine,
            &params.doors,
        )?;
        let (windows, skipped_windows) = window::generate_windows(
            &self.footprint,
            self.floor_index,
            self.z_base,
            derive_seed(self.seed, "windows"),
            &mut engine,
            &params.windows,
        )?;
        let corners = corner::generate_corners(
            &self.footprint,
            self.floor_index,
            self.z_base,
            self.z_top,
            &params.corners,
        );
        log::debug!(
            "Floor {}: {} doors ({} skipped), {} windows ({} skipped), {} corners",
            self.floor_index,
            doors.len(),
            skipped_doors,
            windows.len(),
            skipped_windows,
            corners.len()
        );
        Ok(ExteriorElements {
            doors,
            windows,
            corners,
            skipped_doors,
            skipped_windows,
            params: params.clone(),
        })
    }
}
