use crate::control::environment::{Atmosphere, PhysicalConstants};
use crate::control::launch_stages::Stage;
use crate::control::structure::VehicleConstants;

/// Force model of the vertical ascent. Every quantity is a pure function of
/// elapsed time `t` (s) and altitude `h` (m); nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct FlightModel<'a> {
    pub vehicle: &'a VehicleConstants,
    pub physics: &'a PhysicalConstants,
}

impl<'a> FlightModel<'a> {
    pub fn new(vehicle: &'a VehicleConstants, physics: &'a PhysicalConstants) -> Self {
        FlightModel { vehicle, physics }
    }

    pub fn atmosphere(&self) -> Atmosphere {
        self.physics.atmosphere(self.vehicle.scale_height)
    }

    pub fn stage(&self, t: f64) -> Stage {
        self.vehicle.stage(t)
    }

    pub fn mass(&self, t: f64) -> f64 {
        self.vehicle.mass(t)
    }

    pub fn ambient_pressure(&self, h: f64) -> f64 {
        self.atmosphere().pressure(h)
    }

    pub fn specific_impulse(&self, t: f64, h: f64) -> f64 {
        let stage = self.stage(t);
        self.vehicle.engine(stage).specific_impulse(stage, h)
    }

    pub fn thrust(&self, t: f64, h: f64) -> f64 {
        let stage = self.stage(t);
        self.vehicle.engine(stage).thrust(
            stage,
            h,
            self.ambient_pressure(h),
            self.physics.standard_gravity,
        )
    }

    pub fn gravitational_force(&self, t: f64, h: f64) -> f64 {
        self.physics
            .earth
            .gravitational_force(self.physics.gravitational_constant, self.mass(t), h)
    }

    pub fn net_force(&self, t: f64, h: f64) -> f64 {
        self.thrust(t, h) - self.gravitational_force(t, h)
    }

    pub fn acceleration(&self, t: f64, h: f64) -> f64 {
        self.net_force(t, h) / self.mass(t)
    }
}
