use std::sync::Mutex;

use nalgebra::Vector3;
use tracing::trace;

use crate::{
    error::Error,
    traits::{PositionSource, SetpointSink, CONTROL_RATE_HZ},
    Setpoint,
};

const DEFAULT_MAX_SPEED: f64 = 2.0;

/// Kinematic point-mass vehicle, for running the test without an autopilot.
///
/// Every received setpoint advances the simulation by one control tick:
/// velocity commands are integrated as-is, position commands move the vehicle
/// straight toward the target at no more than `max_speed`.
#[derive(Debug)]
pub struct SimulatedVehicle {
    position: Mutex<Vector3<f64>>,
    max_speed: f64,
    dt: f64,
    history: Mutex<Vec<Setpoint>>,
}

impl SimulatedVehicle {
    pub fn new(initial_position: Vector3<f64>, max_speed: f64) -> Self {
        Self {
            position: Mutex::new(initial_position),
            max_speed,
            dt: 1.0 / CONTROL_RATE_HZ,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Setpoints received so far, in order.
    pub fn received_setpoints(&self) -> Vec<Setpoint> {
        self.history.lock().unwrap().clone()
    }

    fn step(&self, position: &mut Vector3<f64>, setpoint: &Setpoint) {
        match setpoint {
            Setpoint::Position(target) => {
                let diff = target - *position;
                let distance = diff.norm();
                let max_step = self.max_speed * self.dt;
                if distance <= max_step {
                    *position = *target;
                } else {
                    *position += diff * (max_step / distance);
                }
            }
            Setpoint::Velocity(velocity) => {
                *position += velocity * self.dt;
            }
        }
    }
}

impl Default for SimulatedVehicle {
    fn default() -> Self {
        Self::new(Vector3::zeros(), DEFAULT_MAX_SPEED)
    }
}

impl SetpointSink for SimulatedVehicle {
    fn send_setpoint(&self, setpoint: &Setpoint) -> Result<(), Error> {
        let mut position = self
            .position
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock simulated position : {}", e))?;
        self.step(&mut position, setpoint);
        trace!(?setpoint, position = ?*position, "simulated vehicle stepped");
        self.history
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock setpoint history : {}", e))?
            .push(*setpoint);
        Ok(())
    }
}

impl PositionSource for SimulatedVehicle {
    fn current_position(&self) -> Result<Vector3<f64>, Error> {
        Ok(*self
            .position
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock simulated position : {}", e))?)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_position_setpoint_is_rate_limited() {
        let vehicle = SimulatedVehicle::new(Vector3::zeros(), 2.0);
        let target = Setpoint::Position(Vector3::new(1.0, 0.0, 0.0));
        vehicle.send_setpoint(&target).unwrap();
        assert_approx_eq!(vehicle.current_position().unwrap().x, 0.2);
        for _ in 0..10 {
            vehicle.send_setpoint(&target).unwrap();
        }
        assert_eq!(vehicle.current_position().unwrap(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(vehicle.received_setpoints().len(), 11);
    }

    #[test]
    fn test_velocity_setpoint_is_integrated() {
        let vehicle = SimulatedVehicle::default();
        vehicle
            .send_setpoint(&Setpoint::Velocity(Vector3::new(1.0, -2.0, 0.5)))
            .unwrap();
        let p = vehicle.current_position().unwrap();
        assert_approx_eq!(p.x, 0.1);
        assert_approx_eq!(p.y, -0.2);
        assert_approx_eq!(p.z, 0.05);
    }
}
