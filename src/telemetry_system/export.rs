use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::Trajectory;

const HEADER: [&str; 4] = ["time_s", "acceleration_m_s2", "velocity_m_s", "altitude_m"];

/// Write the four histories as CSV rows, one per step.
pub fn write_csv<W: Write>(trajectory: &Trajectory, writer: W) -> Result<(), SimulationError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER).map_err(export_error)?;

    for sample in trajectory.samples() {
        csv_writer
            .write_record(&[
                sample.time.to_string(),
                sample.acceleration.to_string(),
                sample.velocity.to_string(),
                sample.altitude.to_string(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file(trajectory: &Trajectory, path: &Path) -> Result<(), SimulationError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    write_csv(trajectory, file)
}

fn export_error(err: csv::Error) -> SimulationError {
    SimulationError::Export(err.to_string())
}
