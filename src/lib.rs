pub mod building;
pub mod coords;
pub mod exterior;
pub mod floor;
pub mod geom;
pub mod seed;
mod uid;

// Prelude
pub use building::Building;
pub use coords::{Point3, UpAxis};
pub use exterior::corner::{Corner, CornerParams};
pub use exterior::door::{Door, DoorParams};
pub use exterior::placement::{
    EdgePlacementEngine, ObjectKind, PlacedObject, PlacementOutcome, PlacementRequest,
};
pub use exterior::wall::Wall;
pub use exterior::window::{Window, WindowParams};
pub use exterior::{ExteriorElements, ExteriorParams};
pub use floor::Floor;
pub use geom::edge::Edge;
pub use geom::footprint::Footprint;
pub use geom::point::Point;
pub use geom::vector::Vector;
pub use seed::{create_rng, derive_seed, split_seed};
pub use uid::UID;
