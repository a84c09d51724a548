use std::time::Duration;

use auto_impl::auto_impl;

/// Rate of the control loops and of the arrival polling.
pub const CONTROL_RATE_HZ: f64 = 10.0;

/// Period of one control tick.
pub fn control_period() -> Duration {
    Duration::from_secs_f64(1.0 / CONTROL_RATE_HZ)
}

/// Paces the control loop and carries the process-wide "keep running" flag.
#[auto_impl(&, Box, Rc, Arc)]
pub trait Lifecycle {
    /// Whether the test should keep running. Polled once per tick.
    fn is_ok(&self) -> bool;
    /// Sleeps until the next tick and lets pending events be processed.
    fn spin_once(&self);
    /// Requests the process to stop; `is_ok` returns `false` afterwards.
    fn shutdown(&self);
}
