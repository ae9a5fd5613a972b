use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Non-physical state at t = {time} s: vehicle mass {mass} kg is not positive")]
    NonPhysicalState { time: f64, mass: f64 },

    #[error("Trajectory diverged at t = {time} s")]
    Diverged { time: f64 },

    #[error("Escape velocity not reached within {time} s")]
    NoEscape { time: f64 },

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
