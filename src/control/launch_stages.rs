/// Which stage is burning. Derived from elapsed time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    One,
    Two,
}

impl Stage {
    /// Stage 1 burns on `[0, separation_time)`; separation itself belongs to stage 2.
    pub fn at(time: f64, separation_time: f64) -> Self {
        if time < separation_time {
            Stage::One
        } else {
            Stage::Two
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Stage::One => 1,
            Stage::Two => 2,
        }
    }
}

/// Engine and tank figures for a single stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageEngine {
    pub fuel_mass: f64, // kg
    pub flow_rate: f64, // kg/s
    pub sea_level_isp: Option<f64>, // s, only meaningful for an engine lit on the pad
    pub vacuum_isp: f64, // s
    pub exit_pressure: f64, // Pa
    pub exit_area: f64, // m²
}

impl StageEngine {
    pub fn new(
        fuel_mass: f64,
        flow_rate: f64,
        sea_level_isp: Option<f64>,
        vacuum_isp: f64,
        exit_pressure: f64,
        exit_area: f64,
    ) -> Self {
        StageEngine {
            fuel_mass,
            flow_rate,
            sea_level_isp,
            vacuum_isp,
            exit_pressure,
            exit_area,
        }
    }

    /// Seconds of burn the tank holds at the nominal flow rate.
    pub fn burn_time(&self) -> f64 {
        self.fuel_mass / self.flow_rate
    }
}
