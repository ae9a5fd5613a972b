// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const EARTH_RADIUS: f64 = 6_378_000.0; // meters
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // N⋅m²/kg²
pub const ESCAPE_VELOCITY: f64 = 11_200.0; // m/s, fixed approximation at the surface

// Environmental Constants
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa (pascals)
pub const SCALE_HEIGHT: f64 = 8_500.0; // m, pressure falls by a factor of e
pub const ATMOSPHERE_CEILING: f64 = 100_000.0; // m, ambient pressure is zero above this

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0; // s
pub const MAX_SIMULATION_TIME: f64 = 86400.0; // s

// Falcon 9 mass budget
pub const ROCKET_TOTAL_MASS: f64 = 549_054.0; // kg
pub const STAGE_ONE_DISCARDED_MASS: f64 = 26_000.0; // kg, stage 1 hardware dropped at separation

// Stage 1 (Merlin 1D cluster)
pub const STAGE_ONE_FUEL_MASS: f64 = 411_000.0; // kg
pub const STAGE_ONE_FLOW_RATE: f64 = 2_750.0; // kg/s
pub const STAGE_ONE_ISP_SEA_LEVEL: f64 = 282.0; // s
pub const STAGE_ONE_ISP_VACUUM: f64 = 311.0; // s
pub const STAGE_ONE_EXIT_PRESSURE: f64 = 40_000.0; // Pa
pub const STAGE_ONE_EXIT_AREA: f64 = 0.7; // m²

// Stage 2 (Merlin Vacuum)
pub const STAGE_TWO_FUEL_MASS: f64 = 116_000.0; // kg
pub const STAGE_TWO_FLOW_RATE: f64 = 287.0; // kg/s
pub const STAGE_TWO_ISP_VACUUM: f64 = 348.0; // s
pub const STAGE_TWO_EXIT_PRESSURE: f64 = 500.0; // Pa
pub const STAGE_TWO_EXIT_AREA: f64 = 1.1; // m²
