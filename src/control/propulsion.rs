use super::launch_stages::{Stage, StageEngine};

impl StageEngine {
    /// Specific impulse for this engine flying as `stage` at `altitude`.
    ///
    /// Stage 1 switches from its sea level figure to its vacuum figure the
    /// instant it leaves the ground (breakpoint at `h = 0`, no blending).
    /// Stage 2 always runs on its vacuum figure.
    pub fn specific_impulse(&self, stage: Stage, altitude: f64) -> f64 {
        match (stage, self.sea_level_isp) {
            (Stage::One, Some(sea_level_isp)) if altitude <= 0.0 => sea_level_isp,
            _ => self.vacuum_isp,
        }
    }

    /// Momentum thrust plus the pressure term across the nozzle exit.
    ///
    /// `F = mdot * Isp * g0 + (Pe - Pa) * Ae`
    pub fn thrust(
        &self,
        stage: Stage,
        altitude: f64,
        ambient_pressure: f64,
        standard_gravity: f64,
    ) -> f64 {
        let momentum_thrust =
            self.flow_rate * self.specific_impulse(stage, altitude) * standard_gravity;
        let pressure_thrust = (self.exit_pressure - ambient_pressure) * self.exit_area;
        momentum_thrust + pressure_thrust
    }
}
