use std::path::Path;

use rocket_ascent::telemetry_system::{export, plot};
use rocket_ascent::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let vehicle = VehicleConstants::falcon_9();
    let physics = PhysicalConstants::standard();

    let trajectory = match Integrator::new(&vehicle, &physics)?.run() {
        Ok(trajectory) => trajectory,
        Err(e) => {
            println!("Error during simulation: {}", e);
            return Err(e.into());
        }
    };

    let telemetry = Telemetry::from_trajectory(&trajectory, &vehicle);
    telemetry.display_summary();

    let csv_path = Path::new("artifacts/trajectory.csv");
    export::write_csv_file(&trajectory, csv_path)?;
    println!("\nTrajectory written to {}", csv_path.display());

    let png_path = Path::new("artifacts/trajectory.png");
    plot::render_png(&trajectory, png_path, plot::DEFAULT_SIZE)?;
    println!("Plots written to {}", png_path.display());

    Ok(())
}
