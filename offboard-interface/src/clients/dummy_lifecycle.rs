use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::traits::Lifecycle;

/// Lifecycle that never sleeps. For tests.
///
/// With `max_ticks`, it stops being ok after that many ticks, which bounds
/// loops that would otherwise wait forever.
#[derive(Debug, Default)]
pub struct DummyLifecycle {
    max_ticks: Option<usize>,
    ticks: AtomicUsize,
    shutdown_requested: AtomicBool,
}

impl DummyLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_ticks(max_ticks: usize) -> Self {
        Self {
            max_ticks: Some(max_ticks),
            ..Default::default()
        }
    }

    /// Number of `spin_once` calls so far.
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::SeqCst)
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}

impl Lifecycle for DummyLifecycle {
    fn is_ok(&self) -> bool {
        !self.is_shutdown_requested() && self.max_ticks.map_or(true, |max| self.ticks() < max)
    }

    fn spin_once(&self) {
        self.ticks.fetch_add(1, Ordering::SeqCst);
    }

    fn shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_ticks() {
        let lifecycle = DummyLifecycle::with_max_ticks(2);
        assert!(lifecycle.is_ok());
        lifecycle.spin_once();
        assert!(lifecycle.is_ok());
        lifecycle.spin_once();
        assert!(!lifecycle.is_ok());
        assert_eq!(lifecycle.ticks(), 2);
        assert!(!lifecycle.is_shutdown_requested());
    }

    #[test]
    fn test_shutdown() {
        let lifecycle = DummyLifecycle::new();
        for _ in 0..1000 {
            lifecycle.spin_once();
        }
        assert!(lifecycle.is_ok());
        lifecycle.shutdown();
        assert!(!lifecycle.is_ok());
        assert!(lifecycle.is_shutdown_requested());
    }
}
