use super::launch_stages::{Stage, StageEngine};
use crate::constants::*;
use crate::errors::SimulationError;

/// Immutable description of a two-stage vehicle and the step used to fly it.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleConstants {
    pub stage_one: StageEngine,
    pub stage_two: StageEngine,
    pub total_mass: f64,     // kg, fully fuelled at liftoff
    pub discarded_mass: f64, // kg, stage 1 hardware dropped at separation
    pub scale_height: f64,   // m
    pub time_step: f64,      // s
}

impl VehicleConstants {
    pub fn new(
        stage_one: StageEngine,
        stage_two: StageEngine,
        total_mass: f64,
        discarded_mass: f64,
        scale_height: f64,
        time_step: f64,
    ) -> Self {
        VehicleConstants {
            stage_one,
            stage_two,
            total_mass,
            discarded_mass,
            scale_height,
            time_step,
        }
    }

    /// Falcon 9 reference vehicle flown with a one second step.
    pub fn falcon_9() -> Self {
        let stage_one = StageEngine::new(
            STAGE_ONE_FUEL_MASS,
            STAGE_ONE_FLOW_RATE,
            Some(STAGE_ONE_ISP_SEA_LEVEL),
            STAGE_ONE_ISP_VACUUM,
            STAGE_ONE_EXIT_PRESSURE,
            STAGE_ONE_EXIT_AREA,
        );
        let stage_two = StageEngine::new(
            STAGE_TWO_FUEL_MASS,
            STAGE_TWO_FLOW_RATE,
            None,
            STAGE_TWO_ISP_VACUUM,
            STAGE_TWO_EXIT_PRESSURE,
            STAGE_TWO_EXIT_AREA,
        );

        VehicleConstants::new(
            stage_one,
            stage_two,
            ROCKET_TOTAL_MASS,
            STAGE_ONE_DISCARDED_MASS,
            SCALE_HEIGHT,
            TIME_STEP,
        )
    }

    /// Time at which stage 1 fuel runs out and the stages separate.
    pub fn separation_time(&self) -> f64 {
        self.stage_one.burn_time()
    }

    pub fn stage(&self, time: f64) -> Stage {
        Stage::at(time, self.separation_time())
    }

    pub fn engine(&self, stage: Stage) -> &StageEngine {
        match stage {
            Stage::One => &self.stage_one,
            Stage::Two => &self.stage_two,
        }
    }

    /// Vehicle mass after `time` seconds of flight.
    ///
    /// No floor is applied: flying past the point where stage 2 runs dry
    /// yields zero or negative mass, and callers decide what to do with it.
    pub fn mass(&self, time: f64) -> f64 {
        match self.stage(time) {
            Stage::One => self.total_mass - self.stage_one.flow_rate * time,
            Stage::Two => {
                let stage_two_time = time - self.separation_time();
                self.total_mass
                    - self.stage_two.flow_rate * stage_two_time
                    - self.discarded_mass
                    - self.stage_one.fuel_mass
            }
        }
    }

    /// Mass left in the upper stage the moment it separates.
    pub fn stage_two_initial_mass(&self) -> f64 {
        self.total_mass - self.discarded_mass - self.stage_one.fuel_mass
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("total mass", self.total_mass),
            ("discarded mass", self.discarded_mass),
            ("scale height", self.scale_height),
            ("time step", self.time_step),
            ("stage 1 fuel mass", self.stage_one.fuel_mass),
            ("stage 1 flow rate", self.stage_one.flow_rate),
            ("stage 1 vacuum impulse", self.stage_one.vacuum_isp),
            ("stage 1 exit area", self.stage_one.exit_area),
            ("stage 2 fuel mass", self.stage_two.fuel_mass),
            ("stage 2 flow rate", self.stage_two.flow_rate),
            ("stage 2 vacuum impulse", self.stage_two.vacuum_isp),
            ("stage 2 exit area", self.stage_two.exit_area),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        if let Some(isp) = self.stage_one.sea_level_isp {
            if !isp.is_finite() || isp <= 0.0 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "stage 1 sea level impulse must be positive and finite, got {}",
                    isp
                )));
            }
        }

        for (name, value) in [
            ("stage 1 exit pressure", self.stage_one.exit_pressure),
            ("stage 2 exit pressure", self.stage_two.exit_pressure),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        let separation_time = self.separation_time();
        if !separation_time.is_finite() || separation_time <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "separation time must be positive, got {}",
                separation_time
            )));
        }

        if self.stage_two_initial_mass() <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "total mass {} kg cannot carry {} kg of stage 1 fuel plus {} kg of stage 1 hardware",
                self.total_mass, self.stage_one.fuel_mass, self.discarded_mass
            )));
        }

        Ok(())
    }
}
