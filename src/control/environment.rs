use crate::constants::{
    ATMOSPHERE_CEILING, EARTH_MASS, EARTH_RADIUS, ESCAPE_VELOCITY, GRAVITATIONAL_CONSTANT,
    SEA_LEVEL_PRESSURE, STANDARD_GRAVITY,
};
use crate::errors::SimulationError;

/// Universal and planetary constants the flight model reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalConstants {
    pub gravitational_constant: f64, // N⋅m²/kg²
    pub standard_gravity: f64,       // m/s²
    pub sea_level_pressure: f64,     // Pa
    pub atmosphere_ceiling: f64,     // m
    pub escape_velocity: f64,        // m/s
    pub earth: CelestialBody,
}

impl PhysicalConstants {
    pub fn standard() -> Self {
        PhysicalConstants {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            standard_gravity: STANDARD_GRAVITY,
            sea_level_pressure: SEA_LEVEL_PRESSURE,
            atmosphere_ceiling: ATMOSPHERE_CEILING,
            escape_velocity: ESCAPE_VELOCITY,
            earth: CelestialBody::new(EARTH_RADIUS, EARTH_MASS),
        }
    }

    pub fn atmosphere(&self, scale_height: f64) -> Atmosphere {
        Atmosphere::new(self.sea_level_pressure, scale_height, self.atmosphere_ceiling)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("gravitational constant", self.gravitational_constant),
            ("standard gravity", self.standard_gravity),
            ("sea level pressure", self.sea_level_pressure),
            ("atmosphere ceiling", self.atmosphere_ceiling),
            ("escape velocity", self.escape_velocity),
            ("earth radius", self.earth.radius),
            ("earth mass", self.earth.mass),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub radius: f64, // m
    pub mass: f64,   // kg
}

impl CelestialBody {
    pub fn new(radius: f64, mass: f64) -> Self {
        CelestialBody { radius, mass }
    }

    /// Newtonian attraction on `mass` kilograms at `altitude` above the surface.
    pub fn gravitational_force(
        &self,
        gravitational_constant: f64,
        mass: f64,
        altitude: f64,
    ) -> f64 {
        let distance = self.radius + altitude;
        gravitational_constant * self.mass * mass / distance.powi(2)
    }
}

/// Isothermal exponential atmosphere with a hard ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub sea_level_pressure: f64,
    pub scale_height: f64,
    pub ceiling: f64,
}

impl Atmosphere {
    pub fn new(sea_level_pressure: f64, scale_height: f64, ceiling: f64) -> Self {
        Atmosphere {
            sea_level_pressure,
            scale_height,
            ceiling,
        }
    }

    /// Ambient pressure in pascals. Breakpoint at the ceiling: up to and
    /// including it the exponential applies, above it the pressure is zero.
    pub fn pressure(&self, altitude: f64) -> f64 {
        if altitude <= self.ceiling {
            self.sea_level_pressure * (-altitude / self.scale_height).exp()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn earth_atmosphere() -> Atmosphere {
        PhysicalConstants::standard().atmosphere(8_500.0)
    }

    #[test]
    fn test_sea_level_pressure() {
        assert_eq!(earth_atmosphere().pressure(0.0), 101_325.0);
    }

    #[test]
    fn test_pressure_one_scale_height_up() {
        let atmosphere = earth_atmosphere();
        assert_abs_diff_eq!(
            atmosphere.pressure(8_500.0),
            101_325.0 / std::f64::consts::E,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_pressure_at_ceiling_boundary() {
        let atmosphere = earth_atmosphere();
        let at_ceiling = atmosphere.pressure(100_000.0);
        assert!(at_ceiling > 0.0);
        assert_abs_diff_eq!(
            at_ceiling,
            101_325.0 * (-100_000.0_f64 / 8_500.0).exp(),
            epsilon = 1e-12
        );
        assert_eq!(atmosphere.pressure(100_000.001), 0.0);
        assert_eq!(atmosphere.pressure(500_000.0), 0.0);
    }

    #[test]
    fn test_pressure_decays_with_altitude() {
        let atmosphere = earth_atmosphere();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..1_000 {
            let a: f64 = rng.gen_range(0.0..100_000.0);
            let b: f64 = rng.gen_range(0.0..100_000.0);
            if a < b {
                assert!(atmosphere.pressure(a) > atmosphere.pressure(b));
            }
        }
    }

    #[test]
    fn test_weight_of_one_kilogram_at_surface() {
        let constants = PhysicalConstants::standard();
        let weight = constants
            .earth
            .gravitational_force(constants.gravitational_constant, 1.0, 0.0);
        assert_abs_diff_eq!(weight, 9.798, epsilon = 1e-3);
    }

    #[test]
    fn test_standard_constants_are_valid() {
        assert!(PhysicalConstants::standard().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_constants() {
        let mut constants = PhysicalConstants::standard();
        constants.standard_gravity = 0.0;
        assert!(matches!(
            constants.validate(),
            Err(SimulationError::InvalidConfiguration(message)) if message.contains("standard gravity")
        ));

        let mut constants = PhysicalConstants::standard();
        constants.atmosphere_ceiling = f64::NAN;
        assert!(constants.validate().is_err());

        let mut constants = PhysicalConstants::standard();
        constants.earth.radius = -6_378_000.0;
        assert!(constants.validate().is_err());

        let mut constants = PhysicalConstants::standard();
        constants.sea_level_pressure = f64::INFINITY;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_gravity_variation_with_altitude() {
        let constants = PhysicalConstants::standard();
        let g = constants.gravitational_constant;
        let at_surface = constants.earth.gravitational_force(g, 1_000.0, 0.0);
        let at_100km = constants.earth.gravitational_force(g, 1_000.0, 100_000.0);

        assert!(at_100km < at_surface);

        let expected_ratio = (EARTH_RADIUS / (EARTH_RADIUS + 100_000.0)).powi(2);
        assert_abs_diff_eq!(at_100km / at_surface, expected_ratio, epsilon = 1e-12);
    }
}
