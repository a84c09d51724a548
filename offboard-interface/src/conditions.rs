use std::time::Duration;

use auto_impl::auto_impl;
use nalgebra::Vector3;

use crate::error::Error;

/// Distance to the target under which the vehicle is considered arrived.
pub const DEFAULT_ARRIVAL_THRESHOLD: f64 = 0.1;

/// Decides when the vehicle has reached a target.
///
/// `elapsed` is the time spent waiting on this target so far, counted in
/// control ticks rather than wall clock.
#[auto_impl(&, Box, Rc, Arc)]
pub trait ArrivalCondition {
    fn is_arrived(
        &self,
        target: &Vector3<f64>,
        current: &Vector3<f64>,
        elapsed: Duration,
    ) -> Result<bool, Error>;
}

/// Arrived once the euclidean distance is within `allowable_error`.
///
/// Never gives up: if the vehicle does not converge, waiting on this
/// condition does not end until the lifecycle stops.
#[derive(Clone, Debug)]
pub struct DistanceThreshold {
    pub allowable_error: f64,
}

impl DistanceThreshold {
    pub fn new(allowable_error: f64) -> Self {
        Self { allowable_error }
    }
}

impl Default for DistanceThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_ARRIVAL_THRESHOLD)
    }
}

impl ArrivalCondition for DistanceThreshold {
    fn is_arrived(
        &self,
        target: &Vector3<f64>,
        current: &Vector3<f64>,
        _elapsed: Duration,
    ) -> Result<bool, Error> {
        Ok((target - current).norm() <= self.allowable_error)
    }
}

/// Same as [`DistanceThreshold`], but fails with [`Error::ArrivalTimeout`]
/// once `timeout_sec` has elapsed without arriving.
#[derive(Clone, Debug)]
pub struct BoundedDistanceThreshold {
    pub allowable_error: f64,
    pub timeout_sec: f64,
}

impl BoundedDistanceThreshold {
    pub fn new(allowable_error: f64, timeout_sec: f64) -> Self {
        Self {
            allowable_error,
            timeout_sec,
        }
    }
}

impl ArrivalCondition for BoundedDistanceThreshold {
    fn is_arrived(
        &self,
        target: &Vector3<f64>,
        current: &Vector3<f64>,
        elapsed: Duration,
    ) -> Result<bool, Error> {
        let distance = (target - current).norm();
        if distance <= self.allowable_error {
            return Ok(true);
        }
        if elapsed.as_secs_f64() >= self.timeout_sec {
            return Err(Error::ArrivalTimeout {
                timeout: Duration::from_secs_f64(self.timeout_sec),
                target: *target,
                current: *current,
                distance,
            });
        }
        Ok(false)
    }
}
