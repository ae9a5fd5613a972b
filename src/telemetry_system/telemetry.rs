use crate::control::structure::VehicleConstants;
use crate::trajectory_system::kinematics::{EscapeEvent, Trajectory};

/// Post-run digest of a trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub escape: Option<EscapeEvent>,
    pub steps: usize,
    pub max_acceleration: f64,
    pub max_altitude: f64,
    pub separation_time: f64,
    pub separation_step: Option<usize>,
    pub final_mass: f64,
}

impl Telemetry {
    pub fn from_trajectory(trajectory: &Trajectory, vehicle: &VehicleConstants) -> Self {
        let separation_time = vehicle.separation_time();
        let final_time = trajectory.last().map_or(0.0, |sample| sample.time);

        Telemetry {
            escape: trajectory.escape(),
            steps: trajectory.len(),
            max_acceleration: trajectory
                .accelerations()
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
            max_altitude: trajectory
                .altitudes()
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
            separation_time,
            separation_step: trajectory
                .times()
                .iter()
                .position(|&time| time >= separation_time),
            final_mass: vehicle.mass(final_time),
        }
    }

    pub fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn escape_message(&self) -> Option<String> {
        self.escape.map(|escape| {
            format!(
                "Escape velocity reached at time: {} s and altitude: {:.0} m",
                escape.time, escape.altitude
            )
        })
    }

    pub fn separation_line(&self) -> String {
        match self.separation_step {
            Some(step) => format!(
                "{} (first upper stage sample: step {})",
                Self::format_time(self.separation_time),
                step
            ),
            None => format!(
                "{} (not reached)",
                Self::format_time(self.separation_time)
            ),
        }
    }

    pub fn display_summary(&self) {
        if let Some(message) = self.escape_message() {
            println!("{}", message);
        }

        println!("\n--- Simulation Summary ---");
        println!("Steps: {}", self.steps);
        println!("Stage Separation: {}", self.separation_line());
        if let Some(escape) = self.escape {
            println!("Escape Time: {}", Self::format_time(escape.time));
            println!("Escape Velocity: {:.2} m/s", escape.velocity);
        }
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        println!("Max Acceleration: {:.2} m/s²", self.max_acceleration);
        println!("Mass At Escape: {:.2} kg", self.final_mass);
    }
}
