use crate::constants::MAX_SIMULATION_TIME;
use crate::control::environment::PhysicalConstants;
use crate::control::structure::VehicleConstants;
use crate::errors::SimulationError;

use super::forces::FlightModel;

/// Per-step state of the vertical ascent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscentState {
    pub time: f64,     // s
    pub altitude: f64, // m
    pub velocity: f64, // m/s
}

impl AscentState {
    pub fn liftoff() -> Self {
        AscentState {
            time: 0.0,
            altitude: 0.0,
            velocity: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: f64,
    pub acceleration: f64,
    pub velocity: f64,
    pub altitude: f64,
}

/// Where and when the run crossed escape velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeEvent {
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
}

/// Four index-aligned histories, one entry per integration step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    time: Vec<f64>,
    acceleration: Vec<f64>,
    velocity: Vec<f64>,
    altitude: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: TrajectorySample) {
        self.time.push(sample.time);
        self.acceleration.push(sample.acceleration);
        self.velocity.push(sample.velocity);
        self.altitude.push(sample.altitude);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.time
    }

    pub fn accelerations(&self) -> &[f64] {
        &self.acceleration
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocity
    }

    pub fn altitudes(&self) -> &[f64] {
        &self.altitude
    }

    pub fn sample(&self, index: usize) -> Option<TrajectorySample> {
        Some(TrajectorySample {
            time: *self.time.get(index)?,
            acceleration: *self.acceleration.get(index)?,
            velocity: *self.velocity.get(index)?,
            altitude: *self.altitude.get(index)?,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = TrajectorySample> + '_ {
        (0..self.len()).filter_map(move |index| self.sample(index))
    }

    pub fn last(&self) -> Option<TrajectorySample> {
        self.len().checked_sub(1).and_then(|index| self.sample(index))
    }

    /// The final sample, which is where a completed run crossed escape velocity.
    pub fn escape(&self) -> Option<EscapeEvent> {
        self.last().map(|sample| EscapeEvent {
            time: sample.time,
            altitude: sample.altitude,
            velocity: sample.velocity,
        })
    }

    pub fn acceleration_series(&self) -> Vec<(f64, f64)> {
        Self::zip_with_time(&self.time, &self.acceleration)
    }

    pub fn velocity_series(&self) -> Vec<(f64, f64)> {
        Self::zip_with_time(&self.time, &self.velocity)
    }

    pub fn altitude_series(&self) -> Vec<(f64, f64)> {
        Self::zip_with_time(&self.time, &self.altitude)
    }

    fn zip_with_time(time: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
        time.iter().copied().zip(values.iter().copied()).collect()
    }
}

/// What to do when the modelled mass reaches zero or below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassGuard {
    /// Keep integrating with whatever the mass arithmetic produces.
    #[default]
    Unguarded,
    /// Stop with [`SimulationError::NonPhysicalState`].
    Reject,
}

/// Fixed-step semi-implicit Euler integrator: velocity is advanced first and
/// the new velocity advances altitude within the same step.
#[derive(Debug, Clone)]
pub struct Integrator<'a> {
    model: FlightModel<'a>,
    mass_guard: MassGuard,
    max_duration: f64,
}

impl<'a> Integrator<'a> {
    /// Fails fast with `InvalidConfiguration` before any step is taken.
    pub fn new(
        vehicle: &'a VehicleConstants,
        physics: &'a PhysicalConstants,
    ) -> Result<Self, SimulationError> {
        vehicle.validate()?;
        physics.validate()?;

        Ok(Integrator {
            model: FlightModel::new(vehicle, physics),
            mass_guard: MassGuard::default(),
            max_duration: MAX_SIMULATION_TIME,
        })
    }

    pub fn with_mass_guard(mut self, mass_guard: MassGuard) -> Self {
        self.mass_guard = mass_guard;
        self
    }

    /// Cap on simulated time before the run gives up with `NoEscape`.
    pub fn with_max_duration(mut self, max_duration: f64) -> Result<Self, SimulationError> {
        if !max_duration.is_finite() || max_duration <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "max duration must be positive and finite, got {}",
                max_duration
            )));
        }
        self.max_duration = max_duration;
        Ok(self)
    }

    pub fn model(&self) -> &FlightModel<'a> {
        &self.model
    }

    /// Advance one step from `state`, returning the recorded sample.
    pub fn step(&self, state: &AscentState) -> Result<TrajectorySample, SimulationError> {
        let dt = self.model.vehicle.time_step;
        let time = state.time;
        let mass = self.model.mass(time);

        if self.mass_guard == MassGuard::Reject && mass <= 0.0 {
            return Err(SimulationError::NonPhysicalState { time, mass });
        }

        let acceleration = self.model.net_force(time, state.altitude) / mass;
        let velocity = state.velocity + acceleration * dt;
        let altitude = state.altitude + velocity * dt;

        if !(acceleration.is_finite() && velocity.is_finite() && altitude.is_finite()) {
            return Err(SimulationError::Diverged { time });
        }

        Ok(TrajectorySample {
            time,
            acceleration,
            velocity,
            altitude,
        })
    }

    /// Integrate from liftoff until the first sample at or above escape velocity.
    pub fn run(&self) -> Result<Trajectory, SimulationError> {
        let dt = self.model.vehicle.time_step;
        let escape_velocity = self.model.physics.escape_velocity;

        let mut trajectory = Trajectory::new();
        let mut state = AscentState::liftoff();
        let mut step: u64 = 0;

        loop {
            if state.time > self.max_duration {
                return Err(SimulationError::NoEscape {
                    time: self.max_duration,
                });
            }

            let sample = self.step(&state)?;
            trajectory.push(sample);

            if sample.velocity >= escape_velocity {
                return Ok(trajectory);
            }

            // time[i] is i * dt exactly, with no accumulated rounding
            step += 1;
            state = AscentState {
                time: step as f64 * dt,
                altitude: sample.altitude,
                velocity: sample.velocity,
            };
        }
    }
}

/// Fly `vehicle` from liftoff to escape velocity with the default integrator.
pub fn simulate(
    vehicle: &VehicleConstants,
    physics: &PhysicalConstants,
) -> Result<Trajectory, SimulationError> {
    Integrator::new(vehicle, physics)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::launch_stages::StageEngine;
    use approx::assert_relative_eq;

    /// Small vehicle whose upper stage runs dry at exactly t = 20 s.
    fn dry_at_twenty_seconds() -> VehicleConstants {
        let stage_one = StageEngine::new(100.0, 10.0, Some(300.0), 300.0, 0.0, 0.01);
        let stage_two = StageEngine::new(900.0, 80.0, None, 200.0, 0.0, 0.01);
        VehicleConstants::new(stage_one, stage_two, 1_000.0, 100.0, 8_500.0, 1.0)
    }

    #[test]
    fn test_first_step_is_semi_implicit() {
        let vehicle = VehicleConstants::falcon_9();
        let physics = PhysicalConstants::standard();
        let integrator = Integrator::new(&vehicle, &physics).unwrap();

        let sample = integrator.step(&AscentState::liftoff()).unwrap();
        let expected_acceleration = integrator.model().net_force(0.0, 0.0) / 549_054.0;

        assert_eq!(sample.time, 0.0);
        assert_relative_eq!(sample.acceleration, expected_acceleration);
        assert_eq!(sample.velocity, sample.acceleration * vehicle.time_step);
        // Altitude is advanced with the velocity from this same step
        assert_eq!(sample.altitude, sample.velocity * vehicle.time_step);
    }

    #[test]
    fn test_run_stops_at_first_escape_sample() {
        let vehicle = VehicleConstants::falcon_9();
        let physics = PhysicalConstants::standard();
        let trajectory = simulate(&vehicle, &physics).unwrap();

        let velocities = trajectory.velocities();
        let (last, earlier) = velocities.split_last().unwrap();
        assert!(*last >= 11_200.0);
        assert!(earlier.iter().all(|&v| v < 11_200.0));
    }

    #[test]
    fn test_time_is_index_times_step() {
        let mut vehicle = VehicleConstants::falcon_9();
        vehicle.time_step = 0.25;
        let physics = PhysicalConstants::standard();
        let trajectory = simulate(&vehicle, &physics).unwrap();

        for (i, &t) in trajectory.times().iter().enumerate() {
            assert_eq!(t, i as f64 * 0.25);
        }
    }

    #[test]
    fn test_invalid_configuration_fails_before_running() {
        let mut vehicle = VehicleConstants::falcon_9();
        vehicle.stage_one.flow_rate = 0.0;
        let physics = PhysicalConstants::standard();

        assert!(matches!(
            Integrator::new(&vehicle, &physics),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_mass_guard_rejects_empty_vehicle() {
        let vehicle = dry_at_twenty_seconds();
        let physics = PhysicalConstants::standard();
        let result = Integrator::new(&vehicle, &physics)
            .unwrap()
            .with_mass_guard(MassGuard::Reject)
            .run();

        match result {
            Err(SimulationError::NonPhysicalState { time, mass }) => {
                assert_eq!(time, 20.0);
                assert_eq!(mass, 0.0);
            }
            other => panic!("expected NonPhysicalState, got {:?}", other),
        }
    }

    #[test]
    fn test_unguarded_zero_mass_diverges() {
        let vehicle = dry_at_twenty_seconds();
        let physics = PhysicalConstants::standard();
        let result = simulate(&vehicle, &physics);

        assert!(matches!(
            result,
            Err(SimulationError::Diverged { time }) if time == 20.0
        ));
    }

    #[test]
    fn test_max_duration_bounds_the_loop() {
        let vehicle = VehicleConstants::falcon_9();
        let physics = PhysicalConstants::standard();
        let result = Integrator::new(&vehicle, &physics)
            .unwrap()
            .with_max_duration(100.0)
            .unwrap()
            .run();

        assert!(matches!(result, Err(SimulationError::NoEscape { time }) if time == 100.0));
    }

    #[test]
    fn test_max_duration_must_be_positive_and_finite() {
        let vehicle = VehicleConstants::falcon_9();
        let physics = PhysicalConstants::standard();

        for bad in [f64::NAN, f64::INFINITY, 0.0, -5.0] {
            let result = Integrator::new(&vehicle, &physics)
                .unwrap()
                .with_max_duration(bad);
            assert!(
                matches!(result, Err(SimulationError::InvalidConfiguration(_))),
                "max duration {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_physical_constants_fail_before_running() {
        let vehicle = VehicleConstants::falcon_9();
        let mut physics = PhysicalConstants::standard();
        physics.earth.mass = 0.0;

        assert!(matches!(
            Integrator::new(&vehicle, &physics),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_trajectory_series_share_time_axis() {
        let mut trajectory = Trajectory::new();
        trajectory.push(TrajectorySample {
            time: 0.0,
            acceleration: 4.0,
            velocity: 4.0,
            altitude: 4.0,
        });
        trajectory.push(TrajectorySample {
            time: 1.0,
            acceleration: 5.0,
            velocity: 9.0,
            altitude: 13.0,
        });

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.acceleration_series(), vec![(0.0, 4.0), (1.0, 5.0)]);
        assert_eq!(trajectory.velocity_series(), vec![(0.0, 4.0), (1.0, 9.0)]);
        assert_eq!(trajectory.altitude_series(), vec![(0.0, 4.0), (1.0, 13.0)]);
        assert_eq!(
            trajectory.escape(),
            Some(EscapeEvent {
                time: 1.0,
                altitude: 13.0,
                velocity: 9.0,
            })
        );
        assert_eq!(trajectory.samples().count(), 2);
        assert!(trajectory.sample(2).is_none());
    }

    #[test]
    fn test_empty_trajectory_has_no_escape() {
        let trajectory = Trajectory::new();
        assert!(trajectory.is_empty());
        assert!(trajectory.last().is_none());
        assert!(trajectory.escape().is_none());
    }
}
