use anyhow::Result;
use buildgen::{Building, ExteriorParams};

fn main() -> Result<()> {
    let l_shape = vec![(0., 0.), (10., 0.), (10., 5.), (5., 5.), (5., 10.), (0., 10.)];
    let building = Building::from_vertices(
        "l_building",
        &[l_shape.clone(), l_shape],
        &[3.0, 3.0],
        12345,
    )?;

    println!(
        "{} [{}]: {} floors, {:.1} m tall",
        building.name,
        building.uid.short(),
        building.num_floors(),
        building.get_total_height()
    );

    let params = ExteriorParams::new();
    for floor in building.floors() {
        let exterior = floor.exterior(&params)?;
        println!(
            "  {}: area {:.1} m2, {} walls, {} doors, {} windows, {} corners",
            floor.name,
            floor.footprint().area(),
            floor.get_walls().len(),
            exterior.doors.len(),
            exterior.windows.len(),
            exterior.corners.len()
        );
        for door in &exterior.doors {
            let pos = door.world_position();
            println!(
                "    door on edge {} at {:.2} ({:.2}, {:.2}), main entrance: {}",
                door.edge_index, door.position, pos.x, pos.y, door.is_main_entrance
            );
        }
    }
    Ok(())
}
