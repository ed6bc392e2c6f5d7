//! Create and inspect a basic building without any generation of
//! doors or windows.
//!
//! Run with: cargo run --example simple_building

use anyhow::Result;
use buildgen::{Building, Footprint};

fn main() -> Result<()> {
    env_logger::init();

    // A three-floor tower from raw vertex lists
    let plan = vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.)];
    let building = Building::from_vertices(
        "tower",
        &[plan.clone(), plan.clone(), plan],
        &[3.0, 3.0, 3.0],
        12345,
    )?;

    println!("Number of floors: {}", building.num_floors());
    println!("Total height: {:.1} m", building.get_total_height());

    for floor in building.floors() {
        println!("\n{}:", floor.name);
        println!("  Height: {:.1} m", floor.height());
        println!("  Z range: {:.1} m to {:.1} m", floor.z_base(), floor.z_top());
        println!("  Area: {:.1} m2", floor.footprint().area());
        println!("  Perimeter: {:.1} m", floor.footprint().perimeter());
        println!("  Vertices: {}", floor.footprint().num_vertices());
    }

    // A non-convex L-shaped footprint
    let l_shape = Footprint::from_vertices(&[
        (0., 0.),
        (10., 0.),
        (10., 5.),
        (5., 5.),
        (5., 10.),
        (0., 10.),
    ])?;
    println!("\nL-shaped footprint:");
    println!("  Area: {:.1} m2", l_shape.area());
    println!("  Perimeter: {:.1} m", l_shape.perimeter());
    for edge in l_shape.edges() {
        println!("  {}", edge);
    }

    Ok(())
}
