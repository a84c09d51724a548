use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
    time::{Duration, Instant},
};

use crate::traits::{control_period, Lifecycle};

/// Wall-clock lifecycle for running without middleware.
///
/// `spin_once` sleeps until the next tick boundary, so the loop body's own
/// duration is absorbed. If the body overran the period, the schedule is reset
/// instead of bursting to catch up.
#[derive(Debug)]
pub struct LoopRateLifecycle {
    period: Duration,
    next_tick: Mutex<Instant>,
    running: AtomicBool,
}

impl LoopRateLifecycle {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_tick: Mutex::new(Instant::now() + period),
            running: AtomicBool::new(true),
        }
    }

    pub fn from_hz(rate_hz: f64) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / rate_hz))
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for LoopRateLifecycle {
    fn default() -> Self {
        Self::new(control_period())
    }
}

impl Lifecycle for LoopRateLifecycle {
    fn is_ok(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn spin_once(&self) {
        let mut next_tick = match self.next_tick.lock() {
            Ok(next_tick) => next_tick,
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = Instant::now();
        if now < *next_tick {
            std::thread::sleep(*next_tick - now);
            *next_tick += self.period;
        } else {
            *next_tick = now + self.period;
        }
    }

    fn shutdown(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_once_keeps_rate() {
        let lifecycle = LoopRateLifecycle::new(Duration::from_millis(20));
        let now = Instant::now();
        for _ in 0..3 {
            lifecycle.spin_once();
        }
        assert!(now.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_shutdown() {
        let lifecycle = LoopRateLifecycle::default();
        assert_eq!(lifecycle.period(), Duration::from_millis(100));
        assert!(lifecycle.is_ok());
        lifecycle.shutdown();
        assert!(!lifecycle.is_ok());
    }
}
