//! Generate doors and windows on a small building and print where
//! they ended up.
//!
//! Buildings are immutable once generated, so each density gets its
//! own building; identical seeds keep runs reproducible.
//!
//! Run with: cargo run --example doors_and_windows

use anyhow::Result;
use buildgen::{Building, DoorParams, ExteriorParams, UpAxis};

fn main() -> Result<()> {
    env_logger::init();

    let plan = vec![(-5., -5.), (5., -5.), (5., 5.), (-5., 5.)];

    println!("=== Doors at increasing densities ===");
    for density in [0.025, 0.05, 0.1, 0.2] {
        let building =
            Building::from_vertices("square", &[plan.clone(), plan.clone()], &[3.0, 3.0], 12345)?;
        let params = ExteriorParams {
            doors: DoorParams {
                density,
                ..DoorParams::new()
            },
            ..ExteriorParams::new()
        };

        let ground = building.get_floor(0)?;
        let doors = ground.get_doors(&params)?;
        println!("\nDensity {}: {} doors", density, doors.len());
        for door in doors {
            let pos = door.world_position();
            println!(
                "  edge {} at ({:.2}, {:.2}), facing ({:.2}, {:.2}), {}x{} m, main={}",
                door.edge_index,
                pos.x,
                pos.y,
                door.facing.dx,
                door.facing.dy,
                door.width,
                door.height,
                door.is_main_entrance
            );
        }

        // Upper floors never get doors
        let upper_doors = building.get_floor(1)?.get_doors(&params)?;
        println!("  upper floor: {} doors", upper_doors.len());
    }

    println!("\n=== Windows share the occupancy map with doors ===");
    let building = Building::from_vertices("square", &[plan.clone(), plan], &[3.0, 3.0], 12345)?
        .with_up_axis(UpAxis::Y);
    let params = ExteriorParams::new();
    for floor in building.floors() {
        let exterior = floor.exterior(&params)?;
        println!(
            "\n{}: {} doors, {} windows ({} skipped)",
            floor.name,
            exterior.doors.len(),
            exterior.windows.len(),
            exterior.skipped_windows
        );
        for window in &exterior.windows {
            let p = window.world_position();
            // Hand the engine Y-up coordinates of the window center
            let world = building.to_world([p.x, p.y, window.center_z()]);
            println!(
                "  edge {} at ({:.2}, {:.2}, {:.2}), {}x{} m",
                window.edge_index, world[0], world[1], world[2], window.width, window.height
            );
        }
    }

    Ok(())
}
