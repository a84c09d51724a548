use std::sync::{Arc, Mutex};

use nalgebra::Vector3;

use crate::{error::Error, traits::PositionSource};

/// Latest vehicle position, written by one producer and read by one consumer.
///
/// Clones share the same cell, so the writing half can be moved into a
/// subscriber callback while the reading half stays with the control loop.
#[derive(Clone, Debug, Default)]
pub struct SharedPosition {
    buffer: Arc<Mutex<Option<Vector3<f64>>>>,
}

impl SharedPosition {
    /// Creates an empty cell. Reading it fails until the first `set`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(position: Vector3<f64>) -> Self {
        let cell = Self::new();
        cell.set(position);
        cell
    }

    pub fn set(&self, position: Vector3<f64>) {
        // a poisoned lock still holds a complete snapshot
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        buffer.replace(position);
    }

    pub fn get(&self) -> Result<Option<Vector3<f64>>, Error> {
        Ok(*self
            .buffer
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock position buffer : {}", e))?)
    }
}

impl PositionSource for SharedPosition {
    fn current_position(&self) -> Result<Vector3<f64>, Error> {
        self.get()?.ok_or_else(|| Error::NoPosition {
            message: "no position has been received yet".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let cell = SharedPosition::new();
        assert!(cell.get().unwrap().is_none());
        assert!(matches!(
            cell.current_position(),
            Err(Error::NoPosition { .. })
        ));
        cell.set(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(cell.current_position().unwrap(), Vector3::new(1.0, 2.0, 3.0));
        cell.set(Vector3::new(-1.0, 0.0, 0.5));
        assert_eq!(cell.current_position().unwrap(), Vector3::new(-1.0, 0.0, 0.5));
    }

    #[test]
    fn test_shared_between_threads() {
        let reader = SharedPosition::with_position(Vector3::zeros());
        let writer = reader.clone();
        std::thread::spawn(move || {
            for i in 1..=100 {
                writer.set(Vector3::new(i as f64, 0.0, 0.0));
            }
        })
        .join()
        .unwrap();
        assert_eq!(reader.current_position().unwrap(), Vector3::new(100.0, 0.0, 0.0));
    }
}
