pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::environment::{Atmosphere, CelestialBody, PhysicalConstants};
pub use control::launch_stages::{Stage, StageEngine};
pub use control::structure::VehicleConstants;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::forces::FlightModel;
pub use trajectory_system::kinematics::{
    simulate, AscentState, EscapeEvent, Integrator, MassGuard, Trajectory, TrajectorySample,
};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;
