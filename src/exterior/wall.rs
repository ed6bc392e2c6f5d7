//! Wall generation.
//!
//! One wall segment per footprint edge. Wall geometry is the edge
//! extruded from the floor base to the floor top; no randomness is
//! involved, but each wall carries a derived seed for wall-local
//! sub-generation.

use crate::UID;
use crate::coords::Point3;
use crate::exterior::door::Door;
use crate::exterior::window::Window;
use crate::exterior::{ExteriorCache, ExteriorParams};
use crate::seed::derive_seed;
use crate::{Edge, Footprint, Vector};
use anyhow::Result;
use std::sync::Arc;

/// A wall segment derived from a footprint edge.
#[derive(Debug, Clone)]
pub struct Wall {
    pub name: String,
    pub uid: UID,
    pub edge: Edge,
    pub floor_index: usize,
    pub z_base: f64,
    pub z_top: f64,
    pub seed: u64,
    exterior: Arc<ExteriorCache>,
}

impl Wall {
    pub fn length(&self) -> f64 {
        self.edge.length()
    }

    pub fn height(&self) -> f64 {
        self.z_top - self.z_base
    }

    /// Unit normal pointing away from the building.
    pub fn outward_normal(&self) -> Option<Vector> {
        self.edge.outward_normal()
    }

    /// The wall rectangle in Z-up coordinates, counter-clockwise when
    /// seen from outside: base start, base end, top end, top start.
    pub fn corners(&self) -> [Point3; 4] {
        let s = self.edge.start;
        let e = self.edge.end;
        [
            [s.x, s.y, self.z_base],
            [e.x, e.y, self.z_base],
            [e.x, e.y, self.z_top],
            [s.x, s.y, self.z_top],
        ]
    }

    /// Doors on this wall. Triggers the floor-level generation pass on
    /// first access anywhere on the floor.
    pub fn get_doors(&self, params: &ExteriorParams) -> Result<Vec<&Door>> {
        let elements = self.exterior.get_or_generate(params)?;
        Ok(elements
            .doors
            .iter()
            .filter(|d| d.edge_index == self.edge.index)
            .collect())
    }

    /// Windows on this wall. Triggers the floor-level generation pass
    /// on first access anywhere on the floor.
    pub fn get_windows(&self, params: &ExteriorParams) -> Result<Vec<&Window>> {
        let elements = self.exterior.get_or_generate(params)?;
        Ok(elements
            .windows
            .iter()
            .filter(|w| w.edge_index == self.edge.index)
            .collect())
    }
}

/// Builds one wall per footprint edge.
pub(crate) fn generate_walls(
    footprint: &Footprint,
    floor_index: usize,
    z_base: f64,
    z_top: f64,
    floor_seed: u64,
    exterior: &Arc<ExteriorCache>,
) -> Vec<Wall> {
    footprint
        .edges()
        .into_iter()
        .map(|edge| Wall {
            name: format!("wall_{}", edge.index),
            uid: UID::new(),
            seed: derive_seed(floor_seed, ("wall", edge.index)),
            edge,
            floor_index,
            z_base,
            z_top,
            exterior: Arc::clone(exterior),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn setup() -> (Footprint, Arc<ExteriorCache>) {
        let fp = Footprint::from_vertices(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.)]).unwrap();
        let shared = Arc::new(fp.clone());
        let cache = Arc::new(ExteriorCache::new(Arc::clone(&shared), 0, 0., 3., 12345));
        (fp, cache)
    }

    #[test]
    fn test_one_wall_per_edge() {
        let (fp, cache) = setup();
        let walls = generate_walls(&fp, 0, 0., 3., 777, &cache);
        assert_eq!(walls.len(), 4);
        assert_eq!(walls[0].name, "wall_0");
        assert_eq!(walls[3].name, "wall_3");
        for (i, wall) in walls.iter().enumerate() {
            assert_eq!(wall.edge.index, i);
            assert!((wall.length() - 10.).abs() < 1e-9);
            assert!((wall.height() - 3.).abs() < 1e-9);
        }
        // Bottom wall of a CCW square faces -y
        let normal = walls[0].outward_normal().unwrap();
        assert!(normal.is_close(&Vector::new(0., -1.)));
    }

    #[test]
    fn test_wall_seeds_are_distinct() {
        let (fp, cache) = setup();
        let walls = generate_walls(&fp, 0, 0., 3., 777, &cache);
        for a in &walls {
            for b in &walls {
                if a.edge.index != b.edge.index {
                    assert_ne!(a.seed, b.seed);
                }
            }
        }
        // Same derivation inputs give the same wall seeds
        let again = generate_walls(&fp, 0, 0., 3., 777, &cache);
        for (a, b) in walls.iter().zip(again.iter()) {
            assert_eq!(a.seed, b.seed);
        }
    }

    #[test]
    fn test_corners_extrusion() {
        let (fp, cache) = setup();
        let walls = generate_walls(&fp, 0, 1.5, 4.5, 777, &cache);
        let corners = walls[0].corners();
        assert_eq!(corners[0], [0., 0., 1.5]);
        assert_eq!(corners[1], [10., 0., 1.5]);
        assert_eq!(corners[2], [10., 0., 4.5]);
        assert_eq!(corners[3], [0., 0., 4.5]);
    }

    #[test]
    fn test_wall_door_filter() {
        let (fp, cache) = setup();
        let walls = generate_walls(&fp, 0, 0., 3., 777, &cache);
        let params = ExteriorParams::new();
        let mut total = 0;
        for wall in &walls {
            let doors = wall.get_doors(&params).unwrap();
            for door in &doors {
                assert_eq!(door.edge_index, wall.edge.index);
            }
            total += doors.len();
        }
        // Every placed door belongs to exactly one wall
        let all = cache.get_or_generate(&params).unwrap();
        assert_eq!(total, all.doors.len());
        assert!(total >= 1);
    }
}
